/*
 *  canvas.rs
 *
 *  ledwall - pixels with purpose
 *  (c) 2021-26 the ledwall authors
 *
 *  Hardware canvas boundary: the minimal surface the matrix driver exposes
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

use crate::graphics::Frame;

/// The surface a physical LED matrix exposes. The rendering core only ever
/// needs bounds-checked pixel writes, so this is the whole contract.
pub trait Canvas {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn set_pixel(&mut self, x: usize, y: usize, red: u8, green: u8, blue: u8);
    fn clear(&mut self);
}

/// Copy a rendered frame out to the hardware surface.
pub fn blit(frame: &Frame, canvas: &mut impl Canvas) {
    let rows = frame.height().min(canvas.height());
    let cols = frame.width().min(canvas.width());
    for row in 0..rows {
        for col in 0..cols {
            if let Some(pixel) = frame.get_pixel(row, col) {
                canvas.set_pixel(col, row, pixel.red, pixel.green, pixel.blue);
            }
        }
    }
}

/// In-memory canvas for tests and running without hardware. Records pixel
/// writes and operation counts for inspection.
pub struct MockCanvas {
    width: usize,
    height: usize,
    pub pixels: Vec<(u8, u8, u8)>,
    pub write_count: usize,
    pub clear_count: usize,
}

impl MockCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![(0, 0, 0); width * height],
            write_count: 0,
            clear_count: 0,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<(u8, u8, u8)> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }
}

impl Canvas for MockCanvas {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set_pixel(&mut self, x: usize, y: usize, red: u8, green: u8, blue: u8) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = (red, green, blue);
            self.write_count += 1;
        }
    }

    fn clear(&mut self) {
        self.pixels.fill((0, 0, 0));
        self.clear_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::Pixel;

    #[test]
    fn blit_copies_frame_contents() {
        let mut frame = Frame::new(4, 3);
        frame.set_pixel(1, 2, Pixel::new(10, 20, 30));

        let mut canvas = MockCanvas::new(4, 3);
        blit(&frame, &mut canvas);

        assert_eq!(canvas.pixel(2, 1), Some((10, 20, 30)));
        assert_eq!(canvas.pixel(0, 0), Some((0, 0, 0)));
        assert_eq!(canvas.write_count, 12);
    }

    #[test]
    fn blit_clamps_to_smaller_canvas() {
        let frame = Frame::new(8, 8);
        let mut canvas = MockCanvas::new(4, 4);
        blit(&frame, &mut canvas);
        assert_eq!(canvas.write_count, 16);
    }
}
