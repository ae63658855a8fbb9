/*
 *  fonts/mod.rs
 *
 *  ledwall - pixels with purpose
 *  (c) 2021-26 the ledwall authors
 *
 *  BDF font aggregate: glyph lookup and message encoding
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

pub mod bdf;

pub use bdf::{BoundingBox, Character, CharacterProperties};

use log::warn;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error type for font parsing and glyph lookup.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line is missing the {0} tag")]
    MissingTag(&'static str),
    #[error("expected {expected} numeric fields, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("character block has no ENCODING line")]
    MissingEncoding,
    #[error("character block has no BBX line")]
    MissingBoundingBox,
    #[error("bitmap has {actual} rows, bounding box expects {expected}")]
    BitmapRowCountMismatch { expected: usize, actual: usize },
    #[error("no characters found in font stream")]
    NoCharactersFound,
    #[error("character {0:?} has no glyph in this font")]
    UnencodableCharacter(char),
    #[error("no glyph with encoding {0}")]
    CharacterNotFound(u32),
    #[error("invalid numeric value {0:?}")]
    InvalidValue(String),
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),
}

/// Section break between font-level metadata and the character blocks.
const END_PROPERTIES: &str = "ENDPROPERTIES";

/// Opener of a single character block.
const START_CHAR: &str = "STARTCHAR";

/// Terminator of a single character block.
const END_CHAR: &str = "ENDCHAR";

/// A parsed BDF font: glyphs keyed by their encoding value.
///
/// Built once by [`Font::parse`] and read-only afterwards, so it can be
/// shared across draw tasks behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct Font {
    characters: HashMap<u32, Character>,
}

impl Font {
    /// Build a font from a collection of parsed characters.
    ///
    /// Duplicate encodings resolve last-write-wins: a later glyph with the
    /// same encoding replaces the earlier one.
    pub fn new(characters: impl IntoIterator<Item = Character>) -> Self {
        let characters = characters
            .into_iter()
            .map(|c| (c.properties.encoding, c))
            .collect();
        Self { characters }
    }

    /// Parse a complete BDF stream into a font.
    ///
    /// Parsing is best-effort per glyph: malformed character blocks are
    /// logged and dropped so one bad glyph does not take down the whole
    /// font. Only a stream with zero usable glyphs is an error.
    pub fn parse(stream: &str) -> Result<Self, ParseError> {
        let body = stream.split(END_PROPERTIES).nth(1).unwrap_or(stream);
        let characters: Vec<Character> = body
            .split(END_CHAR)
            // skips the trailer after the last ENDCHAR (ENDFONT and friends)
            .filter(|block| block.contains(START_CHAR))
            .filter_map(|block| match Character::from_block(block) {
                Ok(character) => Some(character),
                Err(e) => {
                    warn!("dropping malformed glyph block: {}", e);
                    None
                }
            })
            .collect();

        if characters.is_empty() {
            return Err(ParseError::NoCharactersFound);
        }
        Ok(Self::new(characters))
    }

    /// Read and parse a BDF font file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let data = fs::read_to_string(path)?;
        Self::parse(&data)
    }

    /// Number of glyphs in the font.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Look up a glyph by its encoding value.
    pub fn get_character(&self, encoding: u32) -> Result<&Character, ParseError> {
        self.characters
            .get(&encoding)
            .ok_or(ParseError::CharacterNotFound(encoding))
    }

    /// Encode a message as a glyph sequence, all-or-nothing: any character
    /// without a glyph fails the whole call. Callers that need to detect an
    /// incomplete font before committing to a draw use this; best-effort
    /// rendering goes through [`Font::encode_with_default`].
    pub fn encode(&self, message: &str) -> Result<Vec<Character>, ParseError> {
        message
            .chars()
            .map(|c| {
                self.get_character(c as u32)
                    .cloned()
                    .map_err(|_| ParseError::UnencodableCharacter(c))
            })
            .collect()
    }

    /// Encode a message, substituting `default` for any character without a
    /// glyph. Always yields one glyph per input character.
    pub fn encode_with_default(&self, message: &str, default: &Character) -> Vec<Character> {
        message
            .chars()
            .map(|c| {
                self.get_character(c as u32)
                    .cloned()
                    .unwrap_or_else(|_| default.clone())
            })
            .collect()
    }

    /// Envelope bounding box over every glyph in the font: widest/tallest
    /// extents with the smallest origins. Used for line spacing.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.characters
            .values()
            .map(|c| c.properties.bounding_box)
            .reduce(|a, b| BoundingBox {
                width: a.width.max(b.width),
                height: a.height.max(b.height),
                x_origin: a.x_origin.min(b.x_origin),
                y_origin: a.y_origin.min(b.y_origin),
            })
    }
}
