//! Decorative primitives: the favicon glow disc and the thumbnail's fading frame.

use image::RgbaImage;
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_hollow_rect_mut},
    rect::Rect,
};

use crate::canvas::{blend_over, opaque, with_alpha};
use crate::config::Rgb;

pub fn fill_circle(canvas: &mut RgbaImage, center: (i32, i32), radius: i32, color: Rgb) {
    if radius < 0 {
        return;
    }
    draw_filled_circle_mut(canvas, center, radius, opaque(color));
}

/// Parameters for [`glow_border`].
#[derive(Clone, Copy, Debug)]
pub struct GlowBorder {
    /// Distance of the innermost ring from every canvas edge.
    pub inset: i32,
    pub rings: u32,
    pub alpha: u8,
    /// Alpha lost per ring moving outward.
    pub alpha_step: u8,
}

impl GlowBorder {
    pub fn ring_alpha(&self, ring: u32) -> u8 {
        let lost = ring.saturating_mul(self.alpha_step as u32);
        (self.alpha as u32).saturating_sub(lost) as u8
    }
}

/// Nested outlined rectangles growing outward from `inset`, each fainter than the last.
/// Ring `i` spans `(inset - i, inset - i)` to `(w - inset + i, h - inset + i)` inclusive.
pub fn glow_border(canvas: &mut RgbaImage, color: Rgb, border: &GlowBorder) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    // Rings never overlap, so one layer can hold all of them before compositing.
    let mut layer = RgbaImage::new(canvas.width(), canvas.height());
    for i in 0..border.rings as i32 {
        let alpha = border.ring_alpha(i as u32);
        if alpha == 0 {
            continue;
        }
        let (left, top) = (border.inset - i, border.inset - i);
        let (right, bottom) = (w - border.inset + i, h - border.inset + i);
        if right < left || bottom < top {
            continue;
        }
        let rect = Rect::at(left, top).of_size((right - left + 1) as u32, (bottom - top + 1) as u32);
        draw_hollow_rect_mut(&mut layer, rect, with_alpha(color, alpha));
    }
    composite(canvas, &layer);
}

fn composite(canvas: &mut RgbaImage, layer: &RgbaImage) {
    for (dst, src) in canvas.pixels_mut().zip(layer.pixels()) {
        if src.0[3] > 0 {
            blend_over(dst, *src, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::new_canvas;
    use image::Rgba;

    const BG: Rgb = [36, 36, 36];
    const ACCENT: Rgb = [0, 255, 164];

    fn pixel(canvas: &RgbaImage, x: u32, y: u32) -> Rgba<u8> {
        *canvas.get_pixel(x, y)
    }

    #[test]
    fn circle_covers_center_not_corners() {
        let mut c = new_canvas(64, 64, BG);
        fill_circle(&mut c, (32, 32), 28, ACCENT);
        assert_eq!(pixel(&c, 32, 32), opaque(ACCENT));
        assert_eq!(pixel(&c, 32, 5), opaque(ACCENT));
        assert_eq!(pixel(&c, 0, 0), opaque(BG));
        assert_eq!(pixel(&c, 63, 63), opaque(BG));
        assert_eq!(pixel(&c, 32, 2), opaque(BG));
    }

    #[test]
    fn ring_alpha_fades_to_zero() {
        let border = GlowBorder { inset: 16, rings: 10, alpha: 128, alpha_step: 16 };
        let alphas: Vec<u8> = (0..10).map(|i| border.ring_alpha(i)).collect();
        assert_eq!(alphas, vec![128, 112, 96, 80, 64, 48, 32, 16, 0, 0]);
    }

    #[test]
    fn border_rings_get_fainter_outward() {
        let mut c = new_canvas(200, 100, BG);
        let border = GlowBorder { inset: 16, rings: 8, alpha: 128, alpha_step: 16 };
        glow_border(&mut c, ACCENT, &border);
        // Walk the top edge from the innermost ring (y=16) outward (y=9).
        let greens: Vec<u8> = (9..=16).rev().map(|y| pixel(&c, 100, y).0[1]).collect();
        for pair in greens.windows(2) {
            assert!(pair[0] > pair[1], "expected fading rings, got {greens:?}");
        }
        // Interior and the area beyond the last ring are untouched.
        assert_eq!(pixel(&c, 100, 50), opaque(BG));
        assert_eq!(pixel(&c, 100, 8), opaque(BG));
        // Bottom-right corner of the innermost ring sits at (w - inset, h - inset).
        assert_ne!(pixel(&c, 184, 84), opaque(BG));
        assert!(c.pixels().all(|p| p.0[3] == 255), "canvas stays opaque");
    }
}
