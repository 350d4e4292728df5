//! Open Graph thumbnail: fading accent frame, centered title block with a caption under
//! it, softened by the glow pass and re-sharpened by drawing the text a second time.

use std::path::Path;

use anyhow::{bail, Result};
use image::RgbaImage;
use tracing::debug;

use crate::canvas::{new_canvas, opaque};
use crate::config::BrandConfig;
use crate::encode::write_png;
use crate::postprocess::GlowPass;
use crate::shapes::{glow_border, GlowBorder};
use crate::text::{face_or_fallback, layout_block, place_line, TargetRect, TextBlock, TextFace};

/// Lay out and draw title + caption. Measures from scratch on every call.
fn draw_text_layer(canvas: &mut RgbaImage, cfg: &BrandConfig, title_face: &dyn TextFace, caption_face: &dyn TextFace) {
    let th = &cfg.thumbnail;
    let target = TargetRect::full(canvas.width(), canvas.height());
    let title = layout_block(title_face, &TextBlock::new(&th.title), target, th.line_spacing, th.title_shift);
    title.draw(title_face, canvas, opaque(cfg.palette.accent));

    let caption = place_line(caption_face, &th.caption, target, title.cursor + th.caption_gap);
    caption_face.draw(canvas, (caption.x, caption.y), &caption.text, opaque(cfg.palette.text));
    debug!(title_top = title.top, title_height = title.height, caption_y = caption.y, "thumbnail text layer");
}

pub fn render_thumbnail(cfg: &BrandConfig) -> Result<RgbaImage> {
    let th = &cfg.thumbnail;
    if th.width == 0 || th.height == 0 {
        bail!("thumbnail dimensions must be > 0 (got {}x{})", th.width, th.height);
    }
    let mut canvas = new_canvas(th.width, th.height, cfg.palette.background);
    let border = GlowBorder {
        inset: th.border_inset,
        rings: th.border_rings,
        alpha: th.border_alpha,
        alpha_step: th.border_alpha_step,
    };
    glow_border(&mut canvas, cfg.palette.accent, &border);

    let title_face = face_or_fallback(&cfg.font, th.title_px);
    let caption_face = face_or_fallback(&cfg.font, th.caption_px);
    draw_text_layer(&mut canvas, cfg, &*title_face, &*caption_face);

    let pass = GlowPass { sigma: th.blur_sigma, blend_ratio: th.blend_ratio };
    let mut canvas = pass.apply(&canvas);
    draw_text_layer(&mut canvas, cfg, &*title_face, &*caption_face);
    Ok(canvas)
}

pub fn generate_thumbnail(cfg: &BrandConfig, path: &Path) -> Result<()> {
    let canvas = render_thumbnail(cfg)?;
    write_png(&canvas, path)
}
