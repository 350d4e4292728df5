//! Outline font face backed by `ab_glyph`.

use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use super::{FontError, TextBBox, TextFace};
use crate::canvas::blend_pixel;

pub struct ScalableFace {
    font: FontVec,
    scale: PxScale,
    px_per_em: f32,
    source: String,
}

/// `ab_glyph` scales by ascent-to-descent height; convert from a pixels-per-em size.
fn em_scale(font: &FontVec, px_per_em: f32) -> PxScale {
    let units_per_em = font.units_per_em().unwrap_or(1000.0);
    PxScale::from(px_per_em * font.height_unscaled() / units_per_em)
}

impl ScalableFace {
    pub fn from_bytes(data: Vec<u8>, px_per_em: f32, source: impl Into<String>) -> Result<Self, FontError> {
        let source = source.into();
        let font = FontVec::try_from_vec(data).map_err(|e| FontError::Invalid {
            source_name: source.clone(),
            reason: e.to_string(),
        })?;
        let scale = em_scale(&font, px_per_em);
        Ok(Self { font, scale, px_per_em, source })
    }

    /// Glyphs positioned on a single line with the ascender at y = 0.
    fn layout(&self, text: &str) -> Vec<Glyph> {
        let scaled = self.font.as_scaled(self.scale);
        let ascent = scaled.ascent();
        let mut caret = 0.0f32;
        let mut prev = None;
        let mut glyphs = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            glyphs.push(id.with_scale_and_position(self.scale, point(caret, ascent)));
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
        glyphs
    }
}

impl TextFace for ScalableFace {
    fn describe(&self) -> String {
        format!("{} @ {}px", self.source, self.px_per_em)
    }

    fn bbox(&self, text: &str) -> TextBBox {
        self.layout(text)
            .into_iter()
            .filter_map(|g| self.font.outline_glyph(g))
            .fold(TextBBox::default(), |acc, outlined| {
                let b = outlined.px_bounds();
                acc.union(TextBBox {
                    left: b.min.x.floor() as i32,
                    top: b.min.y.floor() as i32,
                    right: b.max.x.ceil() as i32,
                    bottom: b.max.y.ceil() as i32,
                })
            })
    }

    fn draw(&self, canvas: &mut RgbaImage, origin: (i32, i32), text: &str, color: Rgba<u8>) {
        for outlined in self.layout(text).into_iter().filter_map(|g| self.font.outline_glyph(g)) {
            let b = outlined.px_bounds();
            let (bx, by) = (origin.0 + b.min.x.floor() as i32, origin.1 + b.min.y.floor() as i32);
            outlined.draw(|x, y, coverage| {
                blend_pixel(canvas, bx + x as i32, by + y as i32, color, coverage);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::new_canvas;
    use crate::text::BUNDLED_FONT;

    fn bundled(px: f32) -> ScalableFace {
        let data = std::fs::read(BUNDLED_FONT).unwrap();
        ScalableFace::from_bytes(data, px, BUNDLED_FONT).unwrap()
    }

    fn ink_bounds(c: &RgbaImage, origin: (i32, i32)) -> TextBBox {
        let mut ink = TextBBox::default();
        for (x, y, p) in c.enumerate_pixels() {
            if p.0[0] > 0 {
                let (x, y) = (x as i32 - origin.0, y as i32 - origin.1);
                ink = ink.union(TextBBox { left: x, top: y, right: x + 1, bottom: y + 1 });
            }
        }
        ink
    }

    #[test]
    fn caps_sit_below_the_ascender_origin() {
        let face = bundled(32.0);
        let b = face.bbox("AK");
        assert!((0..=1).contains(&b.left), "{b:?}");
        // Ascender is above cap height, so capitals start a few pixels below the origin.
        assert!((3..=9).contains(&b.top), "{b:?}");
        assert!((20..=27).contains(&b.height()), "{b:?}");
        assert!((40..=60).contains(&b.width()), "{b:?}");
    }

    #[test]
    fn size_is_pixels_per_em() {
        // DejaVu Sans Bold cap height is 0.729 em.
        let h = bundled(100.0).bbox("H").height();
        assert!((71..=76).contains(&h), "cap height {h}");
        let half = bundled(50.0).bbox("H").height();
        assert!((h / 2 - 2..=h / 2 + 2).contains(&half), "{half} vs {h}");
    }

    #[test]
    fn drawn_ink_stays_inside_bbox() {
        let face = bundled(32.0);
        let mut c = new_canvas(120, 60, [0, 0, 0]);
        let origin = (9, 11);
        face.draw(&mut c, origin, "AKg", Rgba([255, 255, 255, 255]));
        let (ink, b) = (ink_bounds(&c, origin), face.bbox("AKg"));
        assert!(!ink.is_empty());
        assert!(ink.left >= b.left && ink.top >= b.top, "{ink:?} outside {b:?}");
        assert!(ink.right <= b.right && ink.bottom <= b.bottom, "{ink:?} outside {b:?}");
        // Pixel-rounded bounds may include one uninked edge row or column.
        assert!(b.width() - ink.width() <= 2 && b.height() - ink.height() <= 2, "{ink:?} vs {b:?}");
    }

    #[test]
    fn blank_text_measures_empty() {
        let face = bundled(48.0);
        assert!(face.bbox("").is_empty());
        assert!(face.bbox("   ").is_empty());
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = ScalableFace::from_bytes(vec![0u8; 32], 12.0, "junk.ttf").err().expect("must fail");
        match err {
            FontError::Invalid { source_name, .. } => assert_eq!(source_name, "junk.ttf"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
