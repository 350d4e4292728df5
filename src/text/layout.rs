//! Multiline block layout: measure every line, stack them with fixed spacing, and
//! center the block inside a target rectangle.
//!
//! All arithmetic is integer pixels with floor division, so an odd remainder always
//! lands on the bottom/right side.

use image::{Rgba, RgbaImage};

use super::TextFace;

/// Ordered lines of a paragraph. An empty string is one empty line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBlock {
    lines: Vec<String>,
}

impl TextBlock {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(|l| l.trim_end_matches('\r').to_string()).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl TargetRect {
    /// The whole canvas.
    pub fn full(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width: width as i32, height: height as i32 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedLine {
    pub text: String,
    /// Draw origin (pen start, ascender line).
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockLayout {
    pub lines: Vec<PlacedLine>,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    /// Vertical cursor after the last line (its height plus one spacing below it).
    pub cursor: i32,
}

impl BlockLayout {
    pub fn draw(&self, face: &dyn TextFace, canvas: &mut RgbaImage, color: Rgba<u8>) {
        for line in &self.lines {
            face.draw(canvas, (line.x, line.y), &line.text, color);
        }
    }
}

/// Center `text` horizontally inside `target` with its origin at row `y`.
pub fn place_line(face: &dyn TextFace, text: &str, target: TargetRect, y: i32) -> PlacedLine {
    let bbox = face.bbox(text);
    let (width, height) = (bbox.width().max(0), bbox.height().max(0));
    PlacedLine {
        text: text.to_string(),
        x: target.x + (target.width - width).div_euclid(2),
        y,
        width,
        height,
    }
}

/// Lay out `block` centered in `target`, `spacing` pixels between lines, then nudged
/// vertically by `shift`. Lines are re-measured on every call.
pub fn layout_block(
    face: &dyn TextFace,
    block: &TextBlock,
    target: TargetRect,
    spacing: i32,
    shift: i32,
) -> BlockLayout {
    let measured: Vec<PlacedLine> = block.lines().iter().map(|l| place_line(face, l, target, 0)).collect();
    let width = measured.iter().map(|l| l.width).max().unwrap_or(0);
    let gaps = measured.len().saturating_sub(1) as i32;
    let height = measured.iter().map(|l| l.height).sum::<i32>() + spacing * gaps;
    let top = target.y + (target.height - height).div_euclid(2) + shift;

    let mut cursor = top;
    let lines = measured
        .into_iter()
        .map(|mut line| {
            line.y = cursor;
            cursor += line.height + spacing;
            line
        })
        .collect();
    BlockLayout { lines, top, width, height, cursor }
}
