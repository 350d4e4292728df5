//! Font resolution: find the preferred font on disk, or fall back to the built-in face.

use std::{fs, path::{Path, PathBuf}};

use fontdb::{Database, Source};
use thiserror::Error;
use tracing::debug;

use super::{BuiltinFace, ScalableFace, TextFace};
use crate::config::FontConfig;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("font {name:?} not found among {indexed} indexed faces")]
    NotFound { name: String, indexed: usize },
    #[error("read font {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("decode font {source_name}: {reason}")]
    Invalid { source_name: String, reason: String },
}

/// Lowest path (for determinism) of an indexed face whose file name matches, ignoring case.
fn find_face_file(db: &Database, file_name: &str) -> Option<PathBuf> {
    db.faces()
        .filter_map(|face| match &face.source {
            Source::File(path) | Source::SharedFile(path, _) => Some(path),
            Source::Binary(_) => None,
        })
        .filter(|path| {
            path.file_name()
                .is_some_and(|n| n.to_string_lossy().eq_ignore_ascii_case(file_name))
        })
        .min()
        .cloned()
}

/// Resolve `name` to a font file: a direct path wins, otherwise the file name is matched
/// (case-insensitively) against fonts under `extra_dirs`, then the system fonts.
pub fn resolve_font_path(name: &str, extra_dirs: &[PathBuf]) -> Result<PathBuf, FontError> {
    let not_found = |indexed| FontError::NotFound { name: name.to_string(), indexed };
    if name.trim().is_empty() {
        return Err(not_found(0));
    }
    let direct = Path::new(name);
    if direct.is_file() {
        return Ok(direct.to_path_buf());
    }
    let Some(file_name) = direct.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return Err(not_found(0));
    };

    let mut db = Database::new();
    for dir in extra_dirs {
        db.load_fonts_dir(dir);
    }
    if let Some(path) = find_face_file(&db, &file_name) {
        return Ok(path);
    }
    db.load_system_fonts();
    debug!(faces = db.len(), "system fonts indexed");
    find_face_file(&db, &file_name).ok_or_else(|| not_found(db.len()))
}

/// Load the preferred scalable face at `px_per_em`.
pub fn load_face(cfg: &FontConfig, px_per_em: f32) -> Result<ScalableFace, FontError> {
    if !(px_per_em > 0.0 && px_per_em.is_finite()) {
        return Err(FontError::Invalid {
            source_name: cfg.preferred.clone(),
            reason: format!("unusable size {px_per_em}px"),
        });
    }
    let path = resolve_font_path(&cfg.preferred, &cfg.search_dirs)?;
    let data = fs::read(&path).map_err(|source| FontError::Read { path: path.clone(), source })?;
    ScalableFace::from_bytes(data, px_per_em, path.display().to_string())
}

/// Preferred face if it loads, otherwise the built-in bitmap face. Never fails.
pub fn face_or_fallback(cfg: &FontConfig, px_per_em: f32) -> Box<dyn TextFace> {
    match load_face(cfg, px_per_em) {
        Ok(face) => {
            debug!(face = %face.describe(), "using scalable face");
            Box::new(face)
        }
        Err(e) => {
            debug!(error = %e, "preferred font unavailable; using builtin face");
            Box::new(BuiltinFace::new())
        }
    }
}
