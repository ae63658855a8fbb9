/*
 *  graphics/text.rs
 *
 *  ledwall - pixels with purpose
 *  (c) 2021-26 the ledwall authors
 *
 *  Glyph stamping: fixed-pitch left-to-right text rendering onto a frame
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

use super::{Frame, HorizontalAlignment, Origin, Pixel, VerticalAlignment};
use crate::fonts::Character;

/// Behavior when a glyph run reaches the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWrap {
    /// Keep stamping; overflow is clipped by the frame bounds check.
    #[default]
    Clip,
    /// Start a new line when the next glyph would cross the right edge.
    /// The line advance is the tallest glyph height in the run.
    Wrap,
}

/// Stamp a glyph run onto the frame, left to right from (x, y), advancing
/// the cursor by each glyph's bounding-box width. No kerning. Pixels that
/// land outside the frame are dropped individually; the walk never
/// terminates early.
fn stamp(
    frame: &mut Frame,
    characters: &[Character],
    origin_x: i32,
    origin_y: i32,
    color: Pixel,
    wrap: TextWrap,
    right_edge: i32,
) {
    let line_height = characters
        .iter()
        .map(|c| c.properties.bounding_box.height)
        .max()
        .unwrap_or(0) as i32;

    let mut x = origin_x;
    let mut y = origin_y;
    for character in characters {
        let bbox = character.properties.bounding_box;
        let width = bbox.width as i32;

        if wrap == TextWrap::Wrap && x > origin_x && x + width > right_edge {
            x = origin_x;
            y += line_height;
        }

        // rows are right-padded to the next byte boundary, capped at the
        // 32-bit word the parser stores them in
        let shift = (((bbox.width as i32 + 7) / 8) * 8 - 1).min(31);
        for (i, row) in character.bitmap.iter().enumerate() {
            for j in 0..width {
                let bit = shift - j;
                if bit < 0 {
                    break;
                }
                if row & (1u32 << bit) != 0 {
                    let px = x + j;
                    let py = y + i as i32;
                    if px >= 0 && py >= 0 {
                        frame.set_pixel(py as usize, px as usize, color);
                    }
                }
            }
        }

        x += width;
    }
}

/// Renders an encoded glyph sequence at a fixed origin.
#[derive(Debug, Clone)]
pub struct FontRenderer {
    characters: Vec<Character>,
    origin: Origin,
    color: Pixel,
    wrap: TextWrap,
}

impl FontRenderer {
    pub fn new(characters: Vec<Character>, origin: Origin, color: Pixel, wrap: TextWrap) -> Self {
        Self { characters, origin, color, wrap }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let right_edge = frame.width() as i32;
        stamp(
            frame,
            &self.characters,
            self.origin.x as i32,
            self.origin.y as i32,
            self.color,
            self.wrap,
            right_edge,
        );
    }
}

/// Positions a glyph sequence as a unit inside a caller-specified box
/// before stamping. The box only affects alignment; overflow is clipped by
/// the frame bounds.
#[derive(Debug, Clone)]
pub struct TextBox {
    characters: Vec<Character>,
    origin: Origin,
    color: Pixel,
    width: u16,
    height: u16,
    h_align: HorizontalAlignment,
    v_align: VerticalAlignment,
}

impl TextBox {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        characters: Vec<Character>,
        origin: Origin,
        color: Pixel,
        width: u16,
        height: u16,
        h_align: HorizontalAlignment,
        v_align: VerticalAlignment,
    ) -> Self {
        Self { characters, origin, color, width, height, h_align, v_align }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let Some(first) = self.characters.first() else {
            return;
        };

        // fixed-pitch layout: the first glyph's box is the nominal cell
        let char_width = first.properties.bounding_box.width as i32;
        let char_height = first.properties.bounding_box.height as i32;
        let string_width = self.characters.len() as i32 * char_width;

        let mut x = self.origin.x as i32;
        let mut y = self.origin.y as i32;

        if string_width < self.width as i32 {
            match self.h_align {
                HorizontalAlignment::Left => {}
                HorizontalAlignment::Center => x += (self.width as i32 - string_width) / 2,
                HorizontalAlignment::Right => x += self.width as i32 - string_width,
            }
        }

        if char_height < self.height as i32 {
            match self.v_align {
                VerticalAlignment::Top => {}
                VerticalAlignment::Center => y += (self.height as i32 - char_height) / 2,
                VerticalAlignment::Bottom => y += self.height as i32 - char_height,
            }
        }

        let right_edge = frame.width() as i32;
        stamp(frame, &self.characters, x, y, self.color, TextWrap::Clip, right_edge);
    }
}
