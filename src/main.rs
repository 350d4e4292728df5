//! Brand asset generator.
//!
//! With no arguments: creates `public/` and writes `public/favicon.ico` and
//! `public/og-thumbnail.png` with the stock brand settings.
//!
//! Example with overrides:
//!   cargo run -- --config brand.ron --out-dir dist --only thumbnail -v

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use brand_assets::assets::{generate, prepare_output, selected};
use brand_assets::{AssetKind, BrandConfig};
use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate favicon + Open Graph thumbnail", long_about = None)]
struct Cli {
    /// RON config; omitted fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output directory (overrides config).
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Preferred font file name or path (overrides config).
    #[arg(long)]
    font: Option<String>,
    /// Generate a single asset.
    #[arg(long, value_enum)]
    only: Option<AssetKind>,
    /// -v info, -vv debug
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut cfg = match &cli.config {
        Some(path) => BrandConfig::load_from_file(path).map_err(|e| anyhow!("{}: {e}", path.display()))?,
        None => BrandConfig::default(),
    };
    if let Some(dir) = cli.out_dir {
        cfg.output.dir = dir;
    }
    if let Some(font) = cli.font {
        cfg.font.preferred = font;
    }

    prepare_output(&cfg)?;
    for kind in selected(cli.only) {
        let asset = generate(&cfg, kind)?;
        println!("{}", asset.kind.confirmation(&asset.path));
    }
    Ok(())
}
