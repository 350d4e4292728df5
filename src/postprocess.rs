// Glow post-process: gaussian blur of a copy, mixed back under the sharp original.
// Callers redraw crisp text afterwards so the halo surrounds sharp glyphs.

use image::{imageops, Rgba, RgbaImage};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPass {
    pub sigma: f32,
    /// Weight of the sharp original; the blurred copy gets `1 - blend_ratio`.
    pub blend_ratio: f32,
}

impl GlowPass {
    pub fn apply(&self, canvas: &RgbaImage) -> RgbaImage {
        debug!(sigma = self.sigma, ratio = self.blend_ratio, "glow pass");
        let blurred = if self.sigma > 0.0 { imageops::blur(canvas, self.sigma) } else { canvas.clone() };
        mix(&blurred, canvas, self.blend_ratio)
    }
}

/// `a * (1 - t) + b * t` per channel; images must share dimensions.
pub fn mix(a: &RgbaImage, b: &RgbaImage, t: f32) -> RgbaImage {
    debug_assert_eq!(a.dimensions(), b.dimensions());
    let t = t.clamp(0.0, 1.0);
    let mut out = RgbaImage::new(a.width(), a.height());
    for ((o, pa), pb) in out.pixels_mut().zip(a.pixels()).zip(b.pixels()) {
        let mut c = [0u8; 4];
        for i in 0..4 {
            let v = pa.0[i] as f32 * (1.0 - t) + pb.0[i] as f32 * t;
            c[i] = v.round().clamp(0.0, 255.0) as u8;
        }
        *o = Rgba(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::new_canvas;

    #[test]
    fn mix_weights_second_image_by_ratio() {
        let a = new_canvas(2, 2, [0, 0, 0]);
        let b = new_canvas(2, 2, [200, 100, 50]);
        let m = mix(&a, &b, 0.7);
        assert_eq!(*m.get_pixel(1, 1), Rgba([140, 70, 35, 255]));
        assert_eq!(mix(&a, &b, 0.0), a);
        assert_eq!(mix(&a, &b, 2.0), b, "ratio is clamped");
    }

    #[test]
    fn flat_canvas_is_unchanged() {
        let c = new_canvas(32, 16, [36, 36, 36]);
        let pass = GlowPass { sigma: 4.0, blend_ratio: 0.7 };
        let out = pass.apply(&c);
        for (p, q) in out.pixels().zip(c.pixels()) {
            for i in 0..4 {
                assert!(p.0[i].abs_diff(q.0[i]) <= 1, "{p:?} vs {q:?}");
            }
        }
    }

    #[test]
    fn glow_spreads_light_into_neighbours() {
        let mut c = new_canvas(41, 41, [0, 0, 0]);
        for y in 18..23 {
            for x in 18..23 {
                c.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        let pass = GlowPass { sigma: 4.0, blend_ratio: 0.7 };
        let out = pass.apply(&c);
        // Halo appears outside the square, and the square itself dims a little.
        assert!(out.get_pixel(26, 20).0[0] > 0);
        assert!(out.get_pixel(20, 20).0[0] < 255);
        assert!(out.get_pixel(20, 20).0[0] >= (255.0 * 0.7) as u8);
        // Deterministic.
        assert_eq!(pass.apply(&c), out);
    }

    #[test]
    fn zero_sigma_is_identity() {
        let mut c = new_canvas(8, 8, [10, 20, 30]);
        c.put_pixel(3, 3, Rgba([255, 0, 0, 255]));
        let pass = GlowPass { sigma: 0.0, blend_ratio: 0.7 };
        assert_eq!(pass.apply(&c), c);
    }
}
