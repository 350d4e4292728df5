//! Canvas allocation and per-pixel compositing helpers shared by the shape,
//! text and glow passes.

use image::{Rgba, RgbaImage};

use crate::config::Rgb;

pub fn opaque(c: Rgb) -> Rgba<u8> {
    Rgba([c[0], c[1], c[2], 255])
}

pub fn with_alpha(c: Rgb, a: u8) -> Rgba<u8> {
    Rgba([c[0], c[1], c[2], a])
}

/// Allocate a `width x height` canvas filled with an opaque background.
pub fn new_canvas(width: u32, height: u32, background: Rgb) -> RgbaImage {
    tracing::debug!(width, height, "allocating canvas");
    RgbaImage::from_pixel(width, height, opaque(background))
}

/// Source-over blend of `src` scaled by `coverage` (0..=1) into `dst`.
pub fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let a = (src.0[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if a <= 0.0 {
        return;
    }
    let dst_a = dst.0[3] as f32 / 255.0;
    let out_a = a + dst_a * (1.0 - a);
    for i in 0..3 {
        let s = src.0[i] as f32;
        let d = dst.0[i] as f32;
        let v = if out_a > 0.0 { (s * a + d * dst_a * (1.0 - a)) / out_a } else { 0.0 };
        dst.0[i] = v.round().clamp(0.0, 255.0) as u8;
    }
    dst.0[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

/// Blend a single pixel at signed coordinates; out-of-bounds writes are dropped.
pub fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, src: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }
    blend_over(canvas.get_pixel_mut(x as u32, y as u32), src, coverage);
}
