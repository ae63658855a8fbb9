/*
 *  lib.rs
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

//! Drives an RGB LED matrix from a Raspberry Pi: parses BDF bitmap fonts,
//! composes text/clock/timer widgets onto a frame buffer, and accepts
//! line-delimited JSON control instructions over TCP.

pub mod canvas;
pub mod config;
pub mod control;
pub mod fonts;
pub mod graphics;
pub mod widgets;
