/*
 *  main.rs
 *
 *  ledwall - pixels with purpose
 *  (c) 2021-26 the ledwall authors
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

use anyhow::Context;
use env_logger::Env;
use log::{error, info};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;

use ledwall::canvas::{blit, Canvas, MockCanvas};
use ledwall::config;
use ledwall::control::{self, Instruction};
use ledwall::fonts::Font;
use ledwall::graphics::{FontRenderer, Frame, Origin, Pixel, Shape, TextWrap};
use ledwall::widgets::{IntervalTimer, IntervalTimerConfig, SimpleClock};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Draw-loop refresh period. Widgets skip work when nothing changed.
const FRAME_PERIOD: Duration = Duration::from_millis(50);

/// Build the shape a control instruction asks for.
fn shape_for(instruction: Instruction, font: &Arc<Font>) -> Option<Shape> {
    match instruction {
        Instruction::Text { message, x, y, color } => {
            let default = font.get_character(' ' as u32).cloned().unwrap_or_default();
            let characters = font.encode_with_default(&message, &default);
            Some(Shape::Text(FontRenderer::new(
                characters,
                Origin::new(x, y),
                Pixel::new(color[0], color[1], color[2]),
                TextWrap::Wrap,
            )))
        }
        Instruction::Clock => Some(Shape::Clock(SimpleClock::new(Origin::new(0, 0), font.clone()))),
        Instruction::Timer { intervals, high_ms, low_ms, warmup_ms, cooldown_ms, repeat } => {
            Some(Shape::IntervalTimer(IntervalTimer::new(
                Origin::new(0, 0),
                font.clone(),
                font.clone(),
                IntervalTimerConfig {
                    total_intervals: intervals,
                    high_interval: Duration::from_millis(high_ms),
                    low_interval: Duration::from_millis(low_ms),
                    warmup_interval: Duration::from_millis(warmup_ms),
                    cooldown_interval: Duration::from_millis(cooldown_ms),
                    repeat_times: repeat,
                },
            )))
        }
        Instruction::Clear => None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load()?;
    env_logger::Builder::from_env(Env::default().default_filter_or(cfg.log_level())).init();
    info!("ledwall v.{} built {}", env!("CARGO_PKG_VERSION"), BUILD_DATE);

    let font_path = cfg
        .font_path()
        .context("config validation guarantees a font path")?;
    let font = Arc::new(
        Font::from_file(font_path)
            .with_context(|| format!("loading font {}", font_path.display()))?,
    );
    info!("loaded font with {} glyphs from {}", font.len(), font_path.display());

    let mut frame = Frame::new(cfg.cols(), cfg.rows());
    // TODO: bind the rpi-rgb-led-matrix driver behind the Canvas trait; the
    // mock surface keeps the daemon runnable off-target in the meantime
    let mut matrix = MockCanvas::new(cfg.cols(), cfg.rows());
    info!("matrix surface {}x{}", matrix.width(), matrix.height());

    let listener = TcpListener::bind((cfg.bind(), cfg.port()))
        .await
        .with_context(|| format!("binding control socket on {}:{}", cfg.bind(), cfg.port()))?;
    info!("control channel listening on {}:{}", cfg.bind(), cfg.port());

    let (tx, mut rx) = mpsc::channel::<Instruction>(32);
    tokio::spawn(async move {
        if let Err(e) = control::serve(listener, tx).await {
            error!("control listener failed: {}", e);
        }
    });

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    // start out as a clock until told otherwise
    let mut active: Option<Shape> = Some(Shape::Clock(SimpleClock::new(
        Origin::new(0, 0),
        font.clone(),
    )));

    let mut ticker = tokio::time::interval(FRAME_PERIOD);
    let mut last_tick = Instant::now();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                let elapsed = now - last_tick;
                last_tick = now;
                if let Some(shape) = active.as_mut() {
                    shape.tick(elapsed);
                    shape.draw(&mut frame);
                    blit(&frame, &mut matrix);
                }
            }
            Some(instruction) = rx.recv() => {
                info!("applying instruction: {:?}", instruction);
                active = shape_for(instruction, &font);
                if active.is_none() {
                    frame.clear();
                    blit(&frame, &mut matrix);
                }
            }
            _ = sigint.recv() => {
                info!("SIGINT received, shutting down");
                break;
            }
            _ = sigterm.recv() => {
                info!("SIGTERM received, shutting down");
                break;
            }
        }
    }

    Ok(())
}
