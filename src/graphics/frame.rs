/*
 *  graphics/frame.rs
 *
 *  ledwall - pixels with purpose
 *  (c) 2021-26 the ledwall authors
 *
 *  Fixed-size pixel buffer with bounds-checked writes
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use super::Pixel;

/// A 2-D pixel grid with width and height fixed at construction.
///
/// Out-of-range writes are silently dropped rather than treated as errors,
/// matching the hardware canvas contract. A frame is drawn into by exactly
/// one task at a time; it is not safe for concurrent writers.
#[derive(Debug, Clone)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Set a pixel. Writes outside the frame are dropped.
    pub fn set_pixel(&mut self, row: usize, column: usize, pixel: Pixel) {
        if row < self.height && column < self.width {
            self.pixels[row * self.width + column] = pixel;
        }
    }

    pub fn get_pixel(&self, row: usize, column: usize) -> Option<Pixel> {
        if row < self.height && column < self.width {
            Some(self.pixels[row * self.width + column])
        } else {
            None
        }
    }

    /// Erase the whole buffer to black. Used by animated widgets before a
    /// redraw.
    pub fn clear(&mut self) {
        self.pixels.fill(Pixel::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_pixel() {
        let mut frame = Frame::new(8, 6);
        let red = Pixel::new(255, 0, 0);
        frame.set_pixel(2, 3, red);
        assert_eq!(frame.get_pixel(2, 3), Some(red));
        assert_eq!(frame.get_pixel(2, 4), Some(Pixel::BLACK));
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut frame = Frame::new(8, 6);
        frame.set_pixel(6, 0, Pixel::WHITE);
        frame.set_pixel(0, 8, Pixel::WHITE);
        frame.set_pixel(100, 100, Pixel::WHITE);
        for row in 0..6 {
            for col in 0..8 {
                assert_eq!(frame.get_pixel(row, col), Some(Pixel::BLACK));
            }
        }
    }

    #[test]
    fn out_of_range_reads_return_none() {
        let frame = Frame::new(4, 4);
        assert_eq!(frame.get_pixel(4, 0), None);
        assert_eq!(frame.get_pixel(0, 4), None);
    }

    #[test]
    fn clear_erases_to_black() {
        let mut frame = Frame::new(4, 4);
        frame.set_pixel(1, 1, Pixel::WHITE);
        frame.clear();
        assert_eq!(frame.get_pixel(1, 1), Some(Pixel::BLACK));
    }
}
