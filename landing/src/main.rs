//! Static-site generator for the OctoRouter marketing page.
//!
//! Renders the home page for the selected presentation variant and
//! writes `index.html` plus `site.json` (the navigation manifest the
//! hosting shell consumes) into the output directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use octorouter_landing::{nav_config, render_home, Variant};

#[derive(Parser, Debug)]
#[command(name = "octorouter-landing")]
#[command(about = "Generate the static OctoRouter marketing site")]
#[command(version)]
struct Args {
    /// Output directory for the generated site
    #[arg(long, default_value = "dist")]
    out: PathBuf,

    /// Presentation variant to render
    #[arg(long, value_enum, default_value = "extended")]
    variant: VariantArg,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    /// Launch revision: image logo, shorter page
    Compact,
    /// Current revision: monogram brand, full section set
    Extended,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Compact => Variant::Compact,
            VariantArg::Extended => Variant::Extended,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let variant = Variant::from(args.variant);
    info!(?variant, out = %args.out.display(), "generating site");

    let html = render_home(variant);
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output directory {}", args.out.display()))?;

    let index = args.out.join("index.html");
    std::fs::write(&index, &html)
        .with_context(|| format!("write {}", index.display()))?;
    info!(bytes = html.len(), "wrote {}", index.display());

    let nav = nav_config(variant);
    let manifest =
        serde_json::to_string_pretty(&nav).context("serialize navigation manifest")?;
    let site = args.out.join("site.json");
    std::fs::write(&site, manifest)
        .with_context(|| format!("write {}", site.display()))?;
    info!("wrote {}", site.display());

    Ok(())
}
