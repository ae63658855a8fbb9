/*
 *  fonts/bdf.rs
 *
 *  ledwall - pixels with purpose
 *  (c) 2021-26 the ledwall authors
 *
 *  Parsers for the Glyph Bitmap Distribution Format: bounding box
 *  records and per-character blocks
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

use super::ParseError;
use std::str::FromStr;

/// Pixel rectangle a glyph occupies plus its drawing offset.
///
/// Fields are `i16`: BDF origins are commonly negative (descenders hang
/// below the baseline), so one signed representation is used for all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub width: i16,
    pub height: i16,
    pub x_origin: i16,
    pub y_origin: i16,
}

impl BoundingBox {
    /// Parse a `BBX w h x y` line.
    ///
    /// The first token must be exactly `BBX`; at least four numeric tokens
    /// must follow. Pure function, no side effects.
    pub fn from_line(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("BBX") {
            return Err(ParseError::MissingTag("BBX"));
        }

        // stop at the first non-numeric token; whatever parsed counts
        let fields: Vec<i16> = tokens.map_while(|t| t.parse().ok()).collect();
        if fields.len() < 4 {
            return Err(ParseError::ArityMismatch { expected: 4, found: fields.len() });
        }

        Ok(Self {
            width: fields[0],
            height: fields[1],
            x_origin: fields[2],
            y_origin: fields[3],
        })
    }
}

/// Metadata for a single glyph. `encoding` is the lookup key within a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterProperties {
    /// ASCII/Unicode code point value of the glyph
    pub encoding: u32,
    /// scalable width for DPI scaling
    pub scalable_width: (u16, u16),
    /// offset to the start of the next character in X
    pub device_width: (u8, u8),
    pub bounding_box: BoundingBox,
}

/// One glyph: properties plus bitmap rows.
///
/// Each row packs pixel on/off bits from the most significant bit down,
/// right-padded to the next byte boundary, so glyphs can be at most 32
/// pixels wide. `bitmap.len()` always equals the bounding box height. The
/// default value is a zero-box "no glyph" placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Character {
    pub properties: CharacterProperties,
    pub bitmap: Vec<u32>,
}

impl Character {
    /// Parse one `STARTCHAR .. ENDCHAR` block.
    ///
    /// Property lines before `BITMAP` are scanned for `ENCODING`, `SWIDTH`,
    /// `DWIDTH` and `BBX`; unknown keys are ignored. Everything between
    /// `BITMAP` and `ENDCHAR` is a hex-encoded bitmap row, and the row
    /// count must match the bounding box height.
    pub fn from_block(block: &str) -> Result<Self, ParseError> {
        let mut encoding = None;
        let mut scalable_width = (0u16, 0u16);
        let mut device_width = (0u8, 0u8);
        let mut bounding_box = None;

        let mut lines = block.lines().map(str::trim).filter(|l| !l.is_empty());
        for line in lines.by_ref() {
            if line == "BITMAP" {
                break;
            }
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("ENCODING") => {
                    let token = tokens.next().ok_or(ParseError::MissingEncoding)?;
                    let value = token
                        .parse()
                        .map_err(|_| ParseError::InvalidValue(token.to_string()))?;
                    encoding = Some(value);
                }
                Some("SWIDTH") => scalable_width = parse_pair(tokens)?,
                Some("DWIDTH") => device_width = parse_pair(tokens)?,
                Some("BBX") => bounding_box = Some(BoundingBox::from_line(line)?),
                _ => {}
            }
        }

        let encoding = encoding.ok_or(ParseError::MissingEncoding)?;
        let bounding_box = bounding_box.ok_or(ParseError::MissingBoundingBox)?;

        // rows live in a u32, which caps the renderable width
        if bounding_box.width > 32 {
            return Err(ParseError::InvalidValue(format!(
                "BBX width {}",
                bounding_box.width
            )));
        }

        let bitmap = lines
            .take_while(|l| *l != "ENDCHAR")
            .map(|l| {
                u32::from_str_radix(l, 16).map_err(|_| ParseError::InvalidValue(l.to_string()))
            })
            .collect::<Result<Vec<u32>, ParseError>>()?;

        let expected = bounding_box.height.max(0) as usize;
        if bitmap.len() != expected {
            return Err(ParseError::BitmapRowCountMismatch { expected, actual: bitmap.len() });
        }

        Ok(Self {
            properties: CharacterProperties { encoding, scalable_width, device_width, bounding_box },
            bitmap,
        })
    }
}

/// Parse two whitespace-separated numeric fields (SWIDTH/DWIDTH values).
fn parse_pair<'a, T: FromStr>(
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<(T, T), ParseError> {
    let mut next = |found| {
        let token = tokens
            .next()
            .ok_or(ParseError::ArityMismatch { expected: 2, found })?;
        token
            .parse::<T>()
            .map_err(|_| ParseError::InvalidValue(token.to_string()))
    };
    Ok((next(0)?, next(1)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_parses_valid_line() {
        let bbox = BoundingBox::from_line("BBX 4 6 0 -1").unwrap();
        assert_eq!(bbox.width, 4);
        assert_eq!(bbox.height, 6);
        assert_eq!(bbox.x_origin, 0);
        assert_eq!(bbox.y_origin, -1);
    }

    #[test]
    fn bounding_box_missing_tag_fails() {
        assert!(matches!(
            BoundingBox::from_line("4 6 0 -1"),
            Err(ParseError::MissingTag("BBX"))
        ));
    }

    #[test]
    fn bounding_box_wrong_tag_fails() {
        assert!(matches!(
            BoundingBox::from_line("WRONG_TAG 4 6 0 -1"),
            Err(ParseError::MissingTag("BBX"))
        ));
    }

    #[test]
    fn bounding_box_too_few_fields_fails() {
        assert!(matches!(
            BoundingBox::from_line("BBX 4 6 0"),
            Err(ParseError::ArityMismatch { expected: 4, found: 3 })
        ));
    }

    #[test]
    fn bounding_box_non_numeric_field_counts_as_missing() {
        assert!(matches!(
            BoundingBox::from_line("BBX 4 six 0 -1"),
            Err(ParseError::ArityMismatch { expected: 4, found: 1 })
        ));
    }

    const SPACE_BLOCK: &str = "STARTCHAR space\n\
        ENCODING 32\n\
        SWIDTH 640 0\n\
        DWIDTH 4 0\n\
        BBX 4 6 0 -1\n\
        BITMAP\n00\n00\n00\n00\n00\n00\nENDCHAR\n";

    #[test]
    fn character_parses_complete_block() {
        let character = Character::from_block(SPACE_BLOCK).unwrap();
        assert_eq!(character.properties.encoding, 32);
        assert_eq!(character.properties.scalable_width, (640, 0));
        assert_eq!(character.properties.device_width, (4, 0));
        assert_eq!(character.properties.bounding_box.height, 6);
        assert_eq!(character.bitmap.len(), 6);
    }

    #[test]
    fn character_without_encoding_fails() {
        let block = "STARTCHAR x\nBBX 4 6 0 -1\nBITMAP\n00\n00\n00\n00\n00\n00\nENDCHAR\n";
        assert!(matches!(
            Character::from_block(block),
            Err(ParseError::MissingEncoding)
        ));
    }

    #[test]
    fn character_without_bounding_box_fails() {
        let block = "STARTCHAR x\nENCODING 32\nBITMAP\n00\nENDCHAR\n";
        assert!(matches!(
            Character::from_block(block),
            Err(ParseError::MissingBoundingBox)
        ));
    }

    #[test]
    fn character_with_short_bitmap_fails() {
        // five rows against a height-six box
        let block = "STARTCHAR space\nENCODING 32\nSWIDTH 640 0\nDWIDTH 4 0\n\
            BBX 4 6 0 -1\nBITMAP\n00\n00\n00\n00\n00\nENDCHAR\n";
        assert!(matches!(
            Character::from_block(block),
            Err(ParseError::BitmapRowCountMismatch { expected: 6, actual: 5 })
        ));
    }

    #[test]
    fn character_with_bad_hex_row_fails() {
        let block = "STARTCHAR x\nENCODING 32\nBBX 4 2 0 0\nBITMAP\n00\nZZ\nENDCHAR\n";
        assert!(matches!(
            Character::from_block(block),
            Err(ParseError::InvalidValue(_))
        ));
    }

    #[test]
    fn character_wider_than_a_row_word_fails() {
        let block = "STARTCHAR x\nENCODING 33\nBBX 40 1 0 0\nBITMAP\n00\nENDCHAR\n";
        assert!(matches!(
            Character::from_block(block),
            Err(ParseError::InvalidValue(_))
        ));
    }

    #[test]
    fn character_ignores_unknown_property_keys() {
        let block = "STARTCHAR a\nENCODING 97\nVVECTOR 0 0\nBBX 2 2 0 0\nBITMAP\nC0\nC0\nENDCHAR\n";
        let character = Character::from_block(block).unwrap();
        assert_eq!(character.properties.encoding, 97);
        assert_eq!(character.bitmap, vec![0xC0, 0xC0]);
    }

    #[test]
    fn character_bitmap_rows_parse_as_hex() {
        let block = "STARTCHAR one\nENCODING 49\nDWIDTH 4 0\nBBX 4 6 0 -1\n\
            BITMAP\n40\nC0\n40\n40\nE0\n00\nENDCHAR\n";
        let character = Character::from_block(block).unwrap();
        assert_eq!(character.bitmap, vec![0x40, 0xC0, 0x40, 0x40, 0xE0, 0x00]);
    }
}
