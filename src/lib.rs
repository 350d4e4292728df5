pub mod assets;
pub mod canvas;
pub mod config;
pub mod encode;
pub mod postprocess;
pub mod shapes;
pub mod text;

// Curated re-exports
pub use assets::{generate_all, AssetKind, GeneratedAsset};
pub use config::BrandConfig;
