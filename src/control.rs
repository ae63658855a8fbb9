/*
 *  control.rs
 *
 *  ledwall - pixels with purpose
 *  (c) 2021-26 the ledwall authors
 *
 *  TCP control channel: line-delimited JSON instructions
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

use log::{debug, info, warn};
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

fn default_repeat() -> u8 {
    1
}

/// One decoded control message. The wire format is one JSON object per
/// line, e.g. `{"command":"text","message":"hi","x":0,"y":0}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Instruction {
    Text {
        message: String,
        #[serde(default)]
        x: u16,
        #[serde(default)]
        y: u16,
        #[serde(default = "default_color")]
        color: [u8; 3],
    },
    Clock,
    Timer {
        intervals: u32,
        high_ms: u64,
        low_ms: u64,
        #[serde(default)]
        warmup_ms: u64,
        #[serde(default)]
        cooldown_ms: u64,
        #[serde(default = "default_repeat")]
        repeat: u8,
    },
    Clear,
}

/// Decode one line of the control protocol.
pub fn decode(line: &str) -> Result<Instruction, serde_json::Error> {
    serde_json::from_str(line)
}

/// Accept control connections forever, forwarding decoded instructions to
/// the draw loop. Malformed lines are logged and skipped; the connection
/// stays open.
pub async fn serve(
    listener: TcpListener,
    instructions: mpsc::Sender<Instruction>,
) -> std::io::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("control connection from {}", peer);
        let tx = instructions.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(socket).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if line.trim().is_empty() {
                    continue;
                }
                match decode(&line) {
                    Ok(instruction) => {
                        debug!("instruction from {}: {:?}", peer, instruction);
                        if tx.send(instruction).await.is_err() {
                            // draw loop is gone, nothing left to do
                            return;
                        }
                    }
                    Err(e) => warn!("discarding malformed control message: {}", e),
                }
            }
            debug!("control connection {} closed", peer);
        });
    }
}
