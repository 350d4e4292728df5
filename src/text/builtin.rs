//! Built-in fixed-size bitmap face used when no scalable font can be loaded.
//!
//! Glyphs are classic 5x7 column bitmaps (bit 0 = top row) for printable ASCII,
//! drawn on a 6-cell advance and magnified by [`BUILTIN_PIXEL_SCALE`].

use image::{Rgba, RgbaImage};

use super::{TextBBox, TextFace};
use crate::canvas::blend_pixel;

pub const BUILTIN_PIXEL_SCALE: i32 = 2;
const GLYPH_COLS: i32 = 5;
const GLYPH_ROWS: i32 = 7;
const ADVANCE_CELLS: i32 = 6;
const FIRST: u32 = 0x20;

// Hollow box for anything outside the table.
const MISSING: [u8; 5] = [0x7F, 0x41, 0x41, 0x41, 0x7F];

#[rustfmt::skip]
const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // \
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x08, 0x04, 0x08, 0x10, 0x08], // ~
];

fn glyph(ch: char) -> &'static [u8; 5] {
    let code = ch as u32;
    if (FIRST..FIRST + GLYPHS.len() as u32).contains(&code) {
        &GLYPHS[(code - FIRST) as usize]
    } else {
        &MISSING
    }
}

/// Lit cells of `text` in unscaled cell coordinates, in pen order.
fn lit_cells(text: &str) -> impl Iterator<Item = (i32, i32)> + '_ {
    text.chars().enumerate().flat_map(|(i, ch)| {
        let pen = i as i32 * ADVANCE_CELLS;
        let cols = glyph(ch);
        (0..GLYPH_COLS).flat_map(move |cx| {
            let bits = cols[cx as usize];
            (0..GLYPH_ROWS).filter(move |cy| bits & (1u8 << *cy) != 0).map(move |cy| (pen + cx, cy))
        })
    })
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinFace;

impl BuiltinFace {
    pub fn new() -> Self {
        BuiltinFace
    }
}

impl TextFace for BuiltinFace {
    fn describe(&self) -> String {
        format!("builtin 5x7 bitmap (x{BUILTIN_PIXEL_SCALE})")
    }

    fn bbox(&self, text: &str) -> TextBBox {
        let s = BUILTIN_PIXEL_SCALE;
        lit_cells(text).fold(TextBBox::default(), |acc, (cx, cy)| {
            acc.union(TextBBox { left: cx * s, top: cy * s, right: (cx + 1) * s, bottom: (cy + 1) * s })
        })
    }

    fn draw(&self, canvas: &mut RgbaImage, origin: (i32, i32), text: &str, color: Rgba<u8>) {
        let s = BUILTIN_PIXEL_SCALE;
        for (cx, cy) in lit_cells(text) {
            for dy in 0..s {
                for dx in 0..s {
                    blend_pixel(canvas, origin.0 + cx * s + dx, origin.1 + cy * s + dy, color, 1.0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::new_canvas;

    #[test]
    fn table_covers_printable_ascii() {
        assert_eq!(GLYPHS.len() as u32, 0x7F - FIRST);
        assert_eq!(glyph('A'), &GLYPHS[('A' as u32 - FIRST) as usize]);
        assert_eq!(glyph('\u{e9}'), &MISSING);
        assert_eq!(glyph('\n'), &MISSING);
    }

    #[test]
    fn bbox_of_capitals() {
        let face = BuiltinFace::new();
        // 'A' occupies columns 0..5 and rows 0..7.
        let a = face.bbox("A");
        assert_eq!(a, TextBBox { left: 0, top: 0, right: 10, bottom: 14 });
        // "AK": K spans the full 5 columns of the second cell (pen 6).
        let ak = face.bbox("AK");
        assert_eq!(ak.width(), (6 + 5) * BUILTIN_PIXEL_SCALE);
        assert_eq!(ak.height(), 7 * BUILTIN_PIXEL_SCALE);
    }

    #[test]
    fn bbox_of_lowercase_starts_below_ascender() {
        let face = BuiltinFace::new();
        let b = face.bbox("a");
        assert_eq!(b.top, 2 * BUILTIN_PIXEL_SCALE);
        assert_eq!(b.bottom, 7 * BUILTIN_PIXEL_SCALE);
    }

    #[test]
    fn blank_text_has_empty_bbox() {
        let face = BuiltinFace::new();
        assert!(face.bbox("").is_empty());
        assert!(face.bbox("   ").is_empty());
        // Blanks still advance the pen.
        assert_eq!(face.bbox(" i").left, ADVANCE_CELLS * BUILTIN_PIXEL_SCALE + face.bbox("i").left);
    }

    #[test]
    fn drawn_ink_matches_bbox() {
        let face = BuiltinFace::new();
        let mut c = new_canvas(80, 40, [0, 0, 0]);
        let origin = (7, 5);
        face.draw(&mut c, origin, "Hi!", Rgba([255, 255, 255, 255]));
        let mut ink = TextBBox::default();
        for (x, y, p) in c.enumerate_pixels() {
            if p.0[0] > 0 {
                let (x, y) = (x as i32 - origin.0, y as i32 - origin.1);
                ink = ink.union(TextBBox { left: x, top: y, right: x + 1, bottom: y + 1 });
            }
        }
        assert_eq!(ink, face.bbox("Hi!"));
    }
}
