//! The two brand assets and the driver that produces them in sequence.

pub mod favicon;
pub mod thumbnail;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::BrandConfig;

pub use favicon::{generate_favicon, render_favicon};
pub use thumbnail::{generate_thumbnail, render_thumbnail};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum AssetKind {
    Favicon,
    Thumbnail,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::Favicon, AssetKind::Thumbnail];

    pub fn path(&self, cfg: &BrandConfig) -> PathBuf {
        match self {
            AssetKind::Favicon => cfg.output.favicon_path(),
            AssetKind::Thumbnail => cfg.output.thumbnail_path(),
        }
    }

    /// Success line printed once the asset is on disk.
    pub fn confirmation(&self, path: &std::path::Path) -> String {
        match self {
            AssetKind::Favicon => format!("Favicon saved to {}", path.display()),
            AssetKind::Thumbnail => format!("Open Graph thumbnail saved to {}", path.display()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Validate (warnings only) and create the output directory. Idempotent.
pub fn prepare_output(cfg: &BrandConfig) -> Result<()> {
    for w in cfg.validate() {
        warn!("config: {w}");
    }
    fs::create_dir_all(&cfg.output.dir)
        .with_context(|| format!("create output dir {}", cfg.output.dir.display()))
}

/// Generate one asset into its configured path, overwriting any previous file.
pub fn generate(cfg: &BrandConfig, kind: AssetKind) -> Result<GeneratedAsset> {
    let path = kind.path(cfg);
    let written = match kind {
        AssetKind::Favicon => generate_favicon(cfg, &path),
        AssetKind::Thumbnail => generate_thumbnail(cfg, &path),
    };
    written.with_context(|| format!("generate {kind:?}"))?;
    let bytes = fs::metadata(&path)
        .with_context(|| format!("stat {}", path.display()))?
        .len();
    info!(?kind, path = %path.display(), bytes, "asset generated");
    Ok(GeneratedAsset { kind, path, bytes })
}

/// Asset kinds selected by an optional `--only` filter, in generation order.
pub fn selected(only: Option<AssetKind>) -> Vec<AssetKind> {
    match only {
        Some(k) => vec![k],
        None => AssetKind::ALL.to_vec(),
    }
}

/// Prepare the output directory, then generate each requested asset in order.
/// `None` means every asset.
pub fn generate_all(cfg: &BrandConfig, only: Option<AssetKind>) -> Result<Vec<GeneratedAsset>> {
    prepare_output(cfg)?;
    selected(only).into_iter().map(|kind| generate(cfg, kind)).collect()
}
