//! imgscale - apply pixel filters and upscalers to raw BGR rasters

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "imgscale")]
#[command(author, version, about = "Pixel filters and pixel-art upscalers for raw BGR rasters")]
#[command(long_about = "
Applies color channel views and pixel-art upscalers to headerless 24-bit
rasters (B, G, R per pixel, rows padded to a stride).

Examples:
  imgscale list                                   # Show all filters
  imgscale apply in.bgr -o out.bgr -W 320 -H 240 -f \"Scale 2x\"
  imgscale apply in.bgr -o red.bgr -W 320 -H 240 -f red --out-stride 960
  imgscale info in.bgr -W 320 -H 240              # Size and mean Y/U/V
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available filters
    #[command(visible_alias = "ls")]
    List,

    /// Apply a filter to a raster
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Display raster dimensions and mean Y/U/V
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

/// Geometry of a headerless input raster.
#[derive(Args)]
struct RasterArgs {
    /// Width in pixels
    #[arg(short = 'W', long)]
    width: u32,

    /// Height in pixels
    #[arg(short = 'H', long)]
    height: u32,

    /// Row stride in bytes (default: width * 3 rounded up to 4)
    #[arg(long)]
    stride: Option<usize>,
}

impl RasterArgs {
    fn stride(&self) -> usize {
        self.stride
            .unwrap_or_else(|| imgscale_io::aligned_stride(self.width, imgscale_io::raster::DEFAULT_ALIGNMENT))
    }
}

/// Arguments for the `apply` command.
#[derive(Args)]
struct ApplyArgs {
    /// Input raster
    input: PathBuf,

    /// Output raster
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    raster: RasterArgs,

    /// Filter name (case-insensitive, see `imgscale list`)
    #[arg(short, long)]
    filter: String,

    /// Output row stride in bytes (default: 4-byte aligned)
    #[arg(long)]
    out_stride: Option<usize>,
}

/// Arguments for the `info` command.
#[derive(Args)]
struct InfoArgs {
    /// Input raster
    input: PathBuf,

    #[command(flatten)]
    raster: RasterArgs,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::List => commands::list::run(cli.verbose),
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
