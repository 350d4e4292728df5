//! Text measurement and rendering.
//!
//! Every face (scalable font or the built-in bitmap fallback) answers the same two
//! questions through [`TextFace`]: how big is this string, and draw it here. Layout code
//! only ever talks to the trait, so it is identical whichever face won font resolution.
//!
//! Coordinates follow one convention throughout: a string drawn at origin `(x, y)` has
//! its first pen position at `x` and its ascender line at `y`. [`TextBBox`] is reported
//! relative to that origin, so `top` is usually a few pixels below zero-ink.

pub mod builtin;
pub mod font;
pub mod layout;
pub mod scalable;

use image::{Rgba, RgbaImage};

pub use builtin::BuiltinFace;
pub use font::{face_or_fallback, resolve_font_path, FontError};
pub use layout::{layout_block, place_line, BlockLayout, PlacedLine, TargetRect, TextBlock};
pub use scalable::ScalableFace;

/// DejaVu Sans Bold shipped under `assets/fonts/` for tests that need real outlines.
#[cfg(test)]
pub(crate) const BUNDLED_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/DejaVuSans-Bold.ttf");

/// Ink bounds of a rendered string relative to its draw origin (right/bottom exclusive).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Union that treats a zero-area box as empty.
    pub fn union(self, other: TextBBox) -> TextBBox {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        TextBBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

pub trait TextFace {
    /// Short human-readable identity for logs.
    fn describe(&self) -> String;
    /// Measure `text` as a single line.
    fn bbox(&self, text: &str) -> TextBBox;
    /// Draw `text` as a single line with the origin convention described above.
    fn draw(&self, canvas: &mut RgbaImage, origin: (i32, i32), text: &str, color: Rgba<u8>);
}
