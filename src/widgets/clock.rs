/*
 *  widgets/clock.rs
 *
 *  ledwall - pixels with purpose
 *  (c) 2021-26 the ledwall authors
 *
 *  Simple HH:MM wall clock widget
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

use crate::fonts::Font;
use crate::graphics::{
    Frame, HorizontalAlignment, Origin, Pixel, TextBox, VerticalAlignment,
};
use chrono::Local;
use std::sync::Arc;

const CLOCK_COLOR: Pixel = Pixel::new(255, 128, 128);

/// Draws the local time as `HH:MM`, centered in the frame.
///
/// Encoding goes through `encode_with_default` so a font without one of the
/// digits still produces a drawable (if gappy) result. Redraws are skipped
/// while the displayed minute is unchanged.
pub struct SimpleClock {
    origin: Origin,
    font: Arc<Font>,
    color: Pixel,
    last_drawn: Option<String>,
}

impl SimpleClock {
    pub fn new(origin: Origin, font: Arc<Font>) -> Self {
        Self {
            origin,
            font,
            color: CLOCK_COLOR,
            last_drawn: None,
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let time_string = Local::now().format("%H:%M").to_string();
        self.draw_time(frame, &time_string);
    }

    // split out from draw so tests can feed a fixed time string
    fn draw_time(&mut self, frame: &mut Frame, time_string: &str) {
        if self.last_drawn.as_deref() == Some(time_string) {
            return;
        }

        frame.clear();
        let default = self
            .font
            .get_character(' ' as u32)
            .cloned()
            .unwrap_or_default();
        let characters = self.font.encode_with_default(time_string, &default);
        TextBox::new(
            characters,
            self.origin,
            self.color,
            frame.width() as u16,
            frame.height() as u16,
            HorizontalAlignment::Center,
            VerticalAlignment::Center,
        )
        .draw(frame);
        self.last_drawn = Some(time_string.to_string());
    }
}
