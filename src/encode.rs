//! Asset encoders: multi-resolution ICO container and single-resolution PNG.
//!
//! Both writers overwrite whatever exists at the destination and assume the parent
//! directory is already there.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{bail, Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{imageops, imageops::FilterType, DynamicImage, ImageFormat, RgbaImage};
use tracing::info;

/// ICO directory entries store dimensions in a byte (0 meaning 256).
pub const MAX_ICON_SIZE: u32 = 256;

/// Lanczos-resampled square copies of `source`, one per entry in `sizes`.
pub fn icon_frames(source: &RgbaImage, sizes: &[u32]) -> Result<Vec<RgbaImage>> {
    let (w, h) = source.dimensions();
    if w != h {
        bail!("icon source must be square, got {w}x{h}");
    }
    if sizes.is_empty() {
        bail!("no icon sizes requested");
    }
    sizes
        .iter()
        .map(|&s| {
            if s == 0 || s > MAX_ICON_SIZE {
                bail!("icon size {s} outside 1..={MAX_ICON_SIZE}");
            }
            Ok(if s == w { source.clone() } else { imageops::resize(source, s, s, FilterType::Lanczos3) })
        })
        .collect()
}

/// Pack every frame (PNG-compressed) into one icon container.
pub fn write_icon(frames: &[RgbaImage], path: &Path) -> Result<()> {
    let mut dir = IconDir::new(ResourceType::Icon);
    for frame in frames {
        let image = IconImage::from_rgba_data(frame.width(), frame.height(), frame.as_raw().clone());
        let entry = IconDirEntry::encode_as_png(&image)
            .with_context(|| format!("encode {}x{} icon entry", frame.width(), frame.height()))?;
        dir.add_entry(entry);
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    dir.write(&mut out).with_context(|| format!("write icon {}", path.display()))?;
    out.flush()?;
    info!(path = %path.display(), entries = frames.len(), "icon written");
    Ok(())
}

/// Drop alpha and write an RGB PNG.
pub fn write_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let rgb = DynamicImage::ImageRgba8(canvas.clone()).into_rgb8();
    rgb.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write png {}", path.display()))?;
    info!(path = %path.display(), width = rgb.width(), height = rgb.height(), "png written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::new_canvas;

    #[test]
    fn frames_are_square_and_ordered() {
        let src = new_canvas(64, 64, [0, 255, 164]);
        let frames = icon_frames(&src, &[64, 32, 16]).unwrap();
        let dims: Vec<(u32, u32)> = frames.iter().map(|f| f.dimensions()).collect();
        assert_eq!(dims, vec![(64, 64), (32, 32), (16, 16)]);
        // Flat colour survives resampling.
        let (p, q) = (frames[2].get_pixel(8, 8), src.get_pixel(0, 0));
        assert!(p.0.iter().zip(q.0.iter()).all(|(a, b)| a.abs_diff(*b) <= 1), "{p:?} vs {q:?}");
    }

    #[test]
    fn minimum_source_size_resizes() {
        let src = new_canvas(16, 16, [1, 2, 3]);
        let frames = icon_frames(&src, &[16, 8, 1]).unwrap();
        assert_eq!(frames[2].dimensions(), (1, 1));
    }

    #[test]
    fn rejects_bad_requests() {
        let src = new_canvas(64, 32, [0, 0, 0]);
        assert!(icon_frames(&src, &[32]).is_err());
        let sq = new_canvas(64, 64, [0, 0, 0]);
        assert!(icon_frames(&sq, &[]).is_err());
        assert!(icon_frames(&sq, &[0]).is_err());
        assert!(icon_frames(&sq, &[512]).is_err());
    }

    #[test]
    fn icon_round_trips_entry_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favicon.ico");
        let src = new_canvas(64, 64, [36, 36, 36]);
        write_icon(&icon_frames(&src, &[64, 32, 16]).unwrap(), &path).unwrap();
        let icon = IconDir::read(File::open(&path).unwrap()).unwrap();
        let sizes: Vec<(u32, u32)> = icon.entries().iter().map(|e| (e.width(), e.height())).collect();
        assert_eq!(sizes, vec![(64, 64), (32, 32), (16, 16)]);
    }

    #[test]
    fn png_is_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thumb.png");
        write_png(&new_canvas(30, 20, [36, 36, 36]), &path).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgb8);
        assert_eq!((img.width(), img.height()), (30, 20));
    }
}
