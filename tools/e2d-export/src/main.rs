//! e2d-export - e2d asset export tool
//!
//! Converts model files (glTF/GLB/OBJ) into `.e2d_shape` binaries, one per
//! mesh, written alongside the source file.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use e2d_export::{export_scene, import_scene, ExportOptions};

#[derive(Parser)]
#[command(name = "e2d-export")]
#[command(about = "e2d shape export tool")]
#[command(version)]
struct Cli {
    /// Input model file (glTF/GLB/OBJ)
    input: PathBuf,

    /// Log per-step timings
    #[arg(short, long)]
    timers: bool,

    /// Log per-shape size breakdowns
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let opts = ExportOptions {
        timers: cli.timers,
        verbose: cli.verbose,
    };

    let total = Instant::now();

    let import_start = Instant::now();
    let scene = import_scene(&cli.input)?;
    if opts.timers {
        tracing::info!("imported {:?} in {:?}", cli.input, import_start.elapsed());
    }
    tracing::info!("{:?}: {} meshes", cli.input, scene.meshes.len());

    export_scene(&scene, &cli.input, &opts)
        .with_context(|| format!("failed to export {:?}", cli.input))?;

    if opts.timers {
        tracing::info!("total {:?}", total.elapsed());
    }
    tracing::info!("Done!");

    Ok(())
}
