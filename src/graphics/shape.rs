/*
 *  graphics/shape.rs
 *
 *  ledwall - pixels with purpose
 *  (c) 2021-26 the ledwall authors
 *
 *  Closed set of drawable widgets with enum dispatch
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

use super::text::{FontRenderer, TextBox};
use super::Frame;
use crate::widgets::{IntervalTimer, SimpleClock};
use std::time::Duration;

/// Every drawable unit the daemon knows how to display.
///
/// Enum dispatch keeps the widget set closed and avoids trait objects; the
/// draw loop holds exactly one active shape at a time.
pub enum Shape {
    Text(FontRenderer),
    TextBox(TextBox),
    Clock(SimpleClock),
    IntervalTimer(IntervalTimer),
}

impl Shape {
    /// Advance any internal timer state. Stateless shapes ignore this.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Shape::IntervalTimer(timer) = self {
            timer.tick(elapsed);
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        match self {
            Shape::Text(renderer) => renderer.draw(frame),
            Shape::TextBox(text_box) => text_box.draw(frame),
            Shape::Clock(clock) => clock.draw(frame),
            Shape::IntervalTimer(timer) => timer.draw(frame),
        }
    }
}
