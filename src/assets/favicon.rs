//! Favicon: accent glow disc with the initials knocked out in the background colour,
//! packed as a multi-resolution icon.

use std::path::Path;

use anyhow::{bail, Context, Result};
use image::RgbaImage;
use tracing::debug;

use crate::canvas::{new_canvas, opaque};
use crate::config::BrandConfig;
use crate::encode::{icon_frames, write_icon};
use crate::shapes::fill_circle;
use crate::text::{face_or_fallback, layout_block, TargetRect, TextBlock};

pub fn render_favicon(cfg: &BrandConfig) -> Result<RgbaImage> {
    let fav = &cfg.favicon;
    let pal = &cfg.palette;
    if fav.size == 0 {
        bail!("favicon size must be > 0");
    }
    let mut canvas = new_canvas(fav.size, fav.size, pal.background);

    let center = i32::try_from(fav.size / 2).context("favicon size out of range")?;
    let radius = center.saturating_sub(i32::try_from(fav.glow_inset).unwrap_or(i32::MAX));
    fill_circle(&mut canvas, (center, center), radius, pal.accent);

    let face = face_or_fallback(&cfg.font, fav.font_px);
    let layout = layout_block(&*face, &TextBlock::new(&fav.initials), TargetRect::full(fav.size, fav.size), 0, 0);
    debug!(face = %face.describe(), top = layout.top, width = layout.width, height = layout.height, "favicon initials");
    layout.draw(&*face, &mut canvas, opaque(pal.background));
    Ok(canvas)
}

pub fn generate_favicon(cfg: &BrandConfig, path: &Path) -> Result<()> {
    let canvas = render_favicon(cfg)?;
    let frames = icon_frames(&canvas, &cfg.favicon.icon_sizes)?;
    write_icon(&frames, path)
}
