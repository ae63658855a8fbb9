/*
 *  widgets/interval_timer.rs
 *
 *  ledwall - pixels with purpose
 *  (c) 2021-26 the ledwall authors
 *
 *  Interval workout timer: warmup / high / low / cooldown state machine
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
use crate::graphics::{FontRenderer, Frame, Origin, Pixel, TextWrap};
use std::sync::Arc;
use std::time::Duration;

/// Phase of the interval timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Warmup,
    High,
    Low,
    Cooldown,
    Complete,
}

/// Configuration for one timer run.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTimerConfig {
    /// high/low pairs per set
    pub total_intervals: u32,
    pub high_interval: Duration,
    pub low_interval: Duration,
    pub warmup_interval: Duration,
    pub cooldown_interval: Duration,
    /// number of full sets before the timer completes
    pub repeat_times: u8,
}

/// Interval timer driven by an external clock.
///
/// The state machine advances only through [`IntervalTimer::tick`], which
/// takes the elapsed time since the previous tick; draw calls never read
/// the wall clock, so transitions are testable without real time passing.
pub struct IntervalTimer {
    origin: Origin,
    time_font: Arc<Font>,
    stats_font: Arc<Font>,
    config: IntervalTimerConfig,
    state: TimerState,
    remaining: Duration,
    elapsed_high_intervals: u32,
    elapsed_low_intervals: u32,
    repeats_complete: u8,
    time_line_height: u16,
    stats_line_height: u16,
}

impl IntervalTimer {
    pub fn new(
        origin: Origin,
        time_font: Arc<Font>,
        stats_font: Arc<Font>,
        config: IntervalTimerConfig,
    ) -> Self {
        // line spacing comes from each font's glyph envelope
        let time_line_height = time_font
            .bounding_box()
            .map(|b| b.height.max(0) as u16)
            .unwrap_or(0);
        let stats_line_height = stats_font
            .bounding_box()
            .map(|b| b.height.max(0) as u16)
            .unwrap_or(0);

        Self {
            origin,
            time_font,
            stats_font,
            remaining: config.warmup_interval,
            config,
            state: TimerState::Warmup,
            elapsed_high_intervals: 0,
            elapsed_low_intervals: 0,
            repeats_complete: 0,
            time_line_height,
            stats_line_height,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == TimerState::Complete
    }

    /// Advance the timer by `elapsed` and return the resulting state.
    pub fn tick(&mut self, elapsed: Duration) -> TimerState {
        self.remaining = self.remaining.saturating_sub(elapsed);
        if !self.remaining.is_zero() {
            return self.state;
        }

        match self.state {
            TimerState::Warmup => {
                self.state = TimerState::High;
                self.remaining = self.config.high_interval;
            }
            TimerState::High => {
                self.elapsed_high_intervals += 1;
                self.state = TimerState::Low;
                self.remaining = self.config.low_interval;
            }
            TimerState::Low => {
                self.elapsed_low_intervals += 1;
                if self.elapsed_low_intervals == self.config.total_intervals {
                    self.state = TimerState::Cooldown;
                    self.remaining = self.config.cooldown_interval;
                } else {
                    self.state = TimerState::High;
                    self.remaining = self.config.high_interval;
                }
            }
            TimerState::Cooldown => {
                self.repeats_complete += 1;
                if self.repeats_complete >= self.config.repeat_times {
                    self.state = TimerState::Complete;
                } else {
                    self.elapsed_low_intervals = 0;
                    self.elapsed_high_intervals = 0;
                    self.state = TimerState::High;
                    self.remaining = self.config.high_interval;
                }
            }
            TimerState::Complete => {}
        }
        self.state
    }

    pub fn draw(&self, frame: &mut Frame) {
        frame.clear();

        let state_tag = match self.state {
            TimerState::Warmup => "W:",
            TimerState::High => "H:",
            TimerState::Low => "L:",
            TimerState::Cooldown | TimerState::Complete => "C:",
        };
        let color = match self.state {
            TimerState::Warmup => Pixel::new(255, 128, 128),
            TimerState::High => Pixel::new(255, 255, 0),
            TimerState::Low => Pixel::new(0, 255, 0),
            TimerState::Cooldown | TimerState::Complete => Pixel::new(0, 180, 255),
        };

        let time_line = format!("{} {:.2}", state_tag, self.remaining.as_secs_f32());
        let time_default = self
            .time_font
            .get_character(' ' as u32)
            .cloned()
            .unwrap_or_default();
        FontRenderer::new(
            self.time_font.encode_with_default(&time_line, &time_default),
            self.origin,
            color,
            TextWrap::Wrap,
        )
        .draw(frame);

        let stats_default = self
            .stats_font
            .get_character(' ' as u32)
            .cloned()
            .unwrap_or_default();

        let reps = format!(
            "Reps: {}/{}",
            self.elapsed_low_intervals, self.config.total_intervals
        );
        FontRenderer::new(
            self.stats_font.encode_with_default(&reps, &stats_default),
            Origin::new(self.origin.x, self.origin.y + self.time_line_height),
            Pixel::WHITE,
            TextWrap::Wrap,
        )
        .draw(frame);

        let sets = format!("Sets: {}/{}", self.repeats_complete, self.config.repeat_times);
        FontRenderer::new(
            self.stats_font.encode_with_default(&sets, &stats_default),
            Origin::new(
                self.origin.x,
                self.origin.y + self.time_line_height + self.stats_line_height,
            ),
            Pixel::WHITE,
            TextWrap::Wrap,
        )
        .draw(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{BoundingBox, Character, CharacterProperties};

    fn test_font() -> Arc<Font> {
        let glyphs = " :/.0123456789CHLWRSepst".chars().map(|c| Character {
            properties: CharacterProperties {
                encoding: c as u32,
                scalable_width: (640, 0),
                device_width: (4, 0),
                bounding_box: BoundingBox { width: 4, height: 6, x_origin: 0, y_origin: -1 },
            },
            bitmap: vec![0xF0; 6],
        });
        Arc::new(Font::new(glyphs))
    }

    fn timer(intervals: u32, repeats: u8) -> IntervalTimer {
        let font = test_font();
        IntervalTimer::new(
            Origin::new(0, 0),
            font.clone(),
            font,
            IntervalTimerConfig {
                total_intervals: intervals,
                high_interval: Duration::from_secs(20),
                low_interval: Duration::from_secs(10),
                warmup_interval: Duration::from_secs(30),
                cooldown_interval: Duration::from_secs(60),
                repeat_times: repeats,
            },
        )
    }

    #[test]
    fn warmup_transitions_to_high_when_elapsed() {
        let mut t = timer(2, 1);
        assert_eq!(t.state(), TimerState::Warmup);
        assert_eq!(t.tick(Duration::from_secs(29)), TimerState::Warmup);
        assert_eq!(t.tick(Duration::from_secs(1)), TimerState::High);
    }

    #[test]
    fn runs_high_low_pairs_until_cooldown() {
        let mut t = timer(2, 1);
        t.tick(Duration::from_secs(30)); // warmup done -> high

        assert_eq!(t.tick(Duration::from_secs(20)), TimerState::Low);
        assert_eq!(t.tick(Duration::from_secs(10)), TimerState::High);
        assert_eq!(t.tick(Duration::from_secs(20)), TimerState::Low);
        // second low completes the set
        assert_eq!(t.tick(Duration::from_secs(10)), TimerState::Cooldown);
    }

    #[test]
    fn completes_after_final_cooldown() {
        let mut t = timer(1, 1);
        t.tick(Duration::from_secs(30));
        t.tick(Duration::from_secs(20));
        t.tick(Duration::from_secs(10));
        assert_eq!(t.state(), TimerState::Cooldown);
        assert_eq!(t.tick(Duration::from_secs(60)), TimerState::Complete);
        assert!(t.is_complete());

        // further ticks are inert
        assert_eq!(t.tick(Duration::from_secs(999)), TimerState::Complete);
    }

    #[test]
    fn repeats_loop_back_to_high_and_reset_counts() {
        let mut t = timer(1, 2);
        t.tick(Duration::from_secs(30));
        t.tick(Duration::from_secs(20));
        t.tick(Duration::from_secs(10));
        // first cooldown loops back instead of completing
        assert_eq!(t.tick(Duration::from_secs(60)), TimerState::High);
        assert_eq!(t.elapsed_low_intervals, 0);

        t.tick(Duration::from_secs(20));
        t.tick(Duration::from_secs(10));
        assert_eq!(t.state(), TimerState::Cooldown);
        assert_eq!(t.tick(Duration::from_secs(60)), TimerState::Complete);
    }

    #[test]
    fn oversized_tick_consumes_only_one_transition() {
        let mut t = timer(2, 1);
        // a huge tick drains the warmup but does not skip phases
        assert_eq!(t.tick(Duration::from_secs(1000)), TimerState::High);
        assert_eq!(t.state(), TimerState::High);
    }

    #[test]
    fn draw_lights_pixels_without_wall_clock() {
        let mut t = timer(2, 1);
        let mut frame = Frame::new(64, 32);
        t.draw(&mut frame);

        let lit = (0..32)
            .flat_map(|r| (0..64).map(move |c| (r, c)))
            .filter(|&(r, c)| frame.get_pixel(r, c) != Some(Pixel::BLACK))
            .count();
        assert!(lit > 0);
    }
}
