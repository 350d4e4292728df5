// Brand asset configuration (pure data; RON on disk).
// Defaults reproduce the stock brand exactly, so running without a file is the normal path.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub type Rgb = [u8; 3];
pub type Rgba = [u8; 4];

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Created (idempotently) before any asset is written.
    pub dir: PathBuf,
    pub favicon_file: String,
    pub thumbnail_file: String,
}
impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public"),
            favicon_file: "favicon.ico".into(),
            thumbnail_file: "og-thumbnail.png".into(),
        }
    }
}
impl OutputConfig {
    pub fn favicon_path(&self) -> PathBuf {
        self.dir.join(&self.favicon_file)
    }
    pub fn thumbnail_path(&self) -> PathBuf {
        self.dir.join(&self.thumbnail_file)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub accent: Rgb,
    pub text: Rgb,
    /// Carried for brand completeness; no routine currently draws with it.
    pub shadow: Rgba,
}
impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [36, 36, 36],
            accent: [0, 255, 164],
            text: [255, 255, 255],
            shadow: [0, 0, 0, 128],
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    /// File name searched in font directories, or a direct path.
    pub preferred: String,
    /// Extra directories searched before the platform defaults.
    pub search_dirs: Vec<PathBuf>,
}
impl Default for FontConfig {
    fn default() -> Self {
        Self {
            preferred: "DejaVuSans-Bold.ttf".into(),
            search_dirs: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FaviconConfig {
    pub size: u32,
    pub initials: String,
    /// Gap between the glow disc and the canvas edge.
    pub glow_inset: u32,
    pub font_px: f32,
    /// Resolutions embedded in the icon container, largest first.
    pub icon_sizes: Vec<u32>,
}
impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            size: 64,
            initials: "AK".into(),
            glow_inset: 4,
            font_px: 32.0,
            icon_sizes: vec![64, 32, 16],
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ThumbnailConfig {
    pub width: u32,
    pub height: u32,
    /// Lines separated by `\n`.
    pub title: String,
    pub title_px: f32,
    pub line_spacing: i32,
    /// Vertical nudge applied to the centered title block (negative = up).
    pub title_shift: i32,
    pub caption: String,
    pub caption_px: f32,
    /// Distance from the layout cursor (after the last title line) to the caption.
    pub caption_gap: i32,
    pub border_inset: i32,
    pub border_rings: u32,
    pub border_alpha: u8,
    pub border_alpha_step: u8,
    pub blur_sigma: f32,
    /// Weight of the sharp original when mixing with the blurred copy.
    pub blend_ratio: f32,
}
impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            title: "Aneesh\nKrishna".into(),
            title_px: 180.0,
            line_spacing: 20,
            title_shift: -40,
            caption: "Software Engineer | Blockchain | Games".into(),
            caption_px: 48.0,
            caption_gap: 40,
            border_inset: 16,
            border_rings: 8,
            border_alpha: 128,
            border_alpha_step: 16,
            blur_sigma: 4.0,
            blend_ratio: 0.7,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct BrandConfig {
    pub output: OutputConfig,
    pub palette: Palette,
    pub font: FontConfig,
    pub favicon: FaviconConfig,
    pub thumbnail: ThumbnailConfig,
}

impl BrandConfig {
    /// Load from a single RON file (errors contain human-readable context).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load file; on failure returns default config plus error string.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Produce validation warnings (non-fatal) for suspicious values.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        let fav = &self.favicon;
        if fav.size == 0 {
            w.push("favicon.size must be > 0".into());
        }
        if fav.icon_sizes.is_empty() {
            w.push("favicon.icon_sizes is empty; icon container would have no entries".into());
        }
        if let Some(max) = fav.icon_sizes.iter().copied().max() {
            if max > fav.size {
                w.push(format!(
                    "favicon.icon_sizes contains {max} but favicon.size is {}; entry will be upscaled",
                    fav.size
                ));
            }
            if max > 256 {
                w.push(format!("favicon.icon_sizes contains {max}; ICO entries are limited to 256"));
            }
        }
        if fav.icon_sizes.contains(&0) {
            w.push("favicon.icon_sizes contains 0".into());
        }
        if fav.glow_inset.saturating_mul(2) >= fav.size {
            w.push(format!(
                "favicon.glow_inset {} leaves no room for the glow disc at size {}",
                fav.glow_inset, fav.size
            ));
        }
        if fav.font_px <= 0.0 {
            w.push(format!("favicon.font_px {} must be > 0", fav.font_px));
        }

        let th = &self.thumbnail;
        if th.width == 0 || th.height == 0 {
            w.push("thumbnail dimensions must be > 0".into());
        }
        if (th.width as u64) * (th.height as u64) > 10_000_000 {
            w.push(format!("very large thumbnail area: {}x{}", th.width, th.height));
        }
        if th.title.trim().is_empty() {
            w.push("thumbnail.title is empty".into());
        }
        if th.title_px <= 0.0 || th.caption_px <= 0.0 {
            w.push(format!(
                "thumbnail font sizes must be > 0 (title_px={}, caption_px={})",
                th.title_px, th.caption_px
            ));
        }
        if !(0.0..=1.0).contains(&th.blend_ratio) {
            w.push(format!(
                "thumbnail.blend_ratio {} outside [0,1]; will be clamped",
                th.blend_ratio
            ));
        }
        if th.blur_sigma < 0.0 {
            w.push(format!("thumbnail.blur_sigma {} negative; blur skipped", th.blur_sigma));
        }
        if th.border_inset < 0 {
            w.push(format!("thumbnail.border_inset {} negative", th.border_inset));
        }

        if self.output.favicon_file.is_empty() || self.output.thumbnail_file.is_empty() {
            w.push("output file names must not be empty".into());
        }
        w
    }
}
