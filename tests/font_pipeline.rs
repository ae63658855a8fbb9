/*
 *  tests/font_pipeline.rs
 *
 *  Integration tests: BDF stream -> Font -> TextBox -> Frame -> Canvas
 *
 *  ledwall - pixels with purpose
 *  (c) 2021-26 the ledwall authors
 */

use ledwall::canvas::{blit, MockCanvas};
use ledwall::control::{decode, Instruction};
use ledwall::fonts::{BoundingBox, Font};
use ledwall::graphics::{
    Frame, HorizontalAlignment, Origin, Pixel, TextBox, VerticalAlignment,
};

/// A two-glyph BDF font: a solid 4x6 block at 'A' and a space at 32.
const TEST_FONT: &str = "STARTFONT 2.1\n\
FONT test-4x6\n\
SIZE 6 75 75\n\
FONTBOUNDINGBOX 4 6 0 -1\n\
STARTPROPERTIES 2\n\
FONT_ASCENT 5\n\
FONT_DESCENT 1\n\
ENDPROPERTIES\n\
CHARS 2\n\
STARTCHAR space\n\
ENCODING 32\n\
SWIDTH 640 0\n\
DWIDTH 4 0\n\
BBX 4 6 0 -1\n\
BITMAP\n\
00\n\
00\n\
00\n\
00\n\
00\n\
00\n\
ENDCHAR\n\
STARTCHAR A\n\
ENCODING 65\n\
SWIDTH 640 0\n\
DWIDTH 4 0\n\
BBX 4 6 0 -1\n\
BITMAP\n\
F0\n\
F0\n\
F0\n\
F0\n\
F0\n\
F0\n\
ENDCHAR\n\
ENDFONT\n";

#[test]
fn bdf_stream_loads_expected_glyphs() {
    let font = Font::parse(TEST_FONT).unwrap();
    assert_eq!(font.len(), 2);

    let space = font.get_character(32).unwrap();
    assert_eq!(
        space.properties.bounding_box,
        BoundingBox { width: 4, height: 6, x_origin: 0, y_origin: -1 }
    );
    assert_eq!(space.bitmap, vec![0; 6]);
}

#[test]
fn rendered_message_reaches_the_canvas() {
    let font = Font::parse(TEST_FONT).unwrap();
    let space = font.get_character(32).unwrap().clone();

    // "AA" fills columns [0,8); the trailing missing glyph becomes a space
    let characters = font.encode_with_default("AAz", &space);
    assert_eq!(characters.len(), 3);

    let mut frame = Frame::new(12, 6);
    TextBox::new(
        characters,
        Origin::new(0, 0),
        Pixel::new(0, 255, 0),
        12,
        6,
        HorizontalAlignment::Left,
        VerticalAlignment::Top,
    )
    .draw(&mut frame);

    let mut canvas = MockCanvas::new(12, 6);
    blit(&frame, &mut canvas);

    for y in 0..6 {
        for x in 0..8 {
            assert_eq!(canvas.pixel(x, y), Some((0, 255, 0)), "pixel ({x},{y})");
        }
        for x in 8..12 {
            assert_eq!(canvas.pixel(x, y), Some((0, 0, 0)), "pixel ({x},{y})");
        }
    }
}

#[test]
fn strict_encode_gates_incomplete_fonts() {
    let font = Font::parse(TEST_FONT).unwrap();
    assert!(font.encode("AA A").is_ok());
    assert!(font.encode("AB").is_err());
}

#[test]
fn control_message_drives_a_text_render() {
    let instruction = decode(r#"{"command":"text","message":"A","color":[0,0,255]}"#).unwrap();
    let Instruction::Text { message, x, y, color } = instruction else {
        panic!("expected a text instruction");
    };

    let font = Font::parse(TEST_FONT).unwrap();
    let space = font.get_character(32).unwrap().clone();
    let characters = font.encode_with_default(&message, &space);

    let mut frame = Frame::new(8, 8);
    TextBox::new(
        characters,
        Origin::new(x, y),
        Pixel::new(color[0], color[1], color[2]),
        8,
        8,
        HorizontalAlignment::Left,
        VerticalAlignment::Top,
    )
    .draw(&mut frame);

    assert_eq!(frame.get_pixel(0, 0), Some(Pixel::new(0, 0, 255)));
}
