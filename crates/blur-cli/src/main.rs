//! blurx - box blur command-line tool
//!
//! Blurs PNG images with the sliding-window box blur and inspects the
//! strength mapping and blur paths used by `blur-layout`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "blurx")]
#[command(author, version, about = "Sliding-window box blur for PNG images")]
#[command(long_about = "
Blurs PNG images with a two-pass sliding-window box blur.

Examples:
  blurx blur photo.png -o soft.png                 # default strength (50)
  blurx blur photo.png -o soft.png --strength 80
  blurx blur photo.png -o soft.png --radius 4 --sequential
  blurx blur photo.png -o soft.png --config layer.yaml
  blurx radius 10 50 100                           # strength -> radius
  blurx paths --api-level 33                       # available blur paths
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Blur a PNG image
    #[command(visible_alias = "b")]
    Blur(BlurArgs),

    /// Print the kernel radius for blur strengths
    #[command(visible_alias = "r")]
    Radius(RadiusArgs),

    /// List blur paths for a platform API level
    Paths(PathsArgs),
}

#[derive(Args)]
struct BlurArgs {
    /// Input PNG
    input: PathBuf,

    /// Output PNG
    #[arg(short, long)]
    output: PathBuf,

    /// Blur strength (mapped to a radius)
    #[arg(short, long, conflicts_with = "radius", allow_negative_numbers = true)]
    strength: Option<f32>,

    /// Kernel radius (0-25), bypasses the strength mapping
    #[arg(short, long)]
    radius: Option<usize>,

    /// Use the single-threaded kernel
    #[arg(long)]
    sequential: bool,

    /// Layer configuration (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct RadiusArgs {
    /// Blur strengths
    #[arg(required = true, allow_negative_numbers = true)]
    strength: Vec<f32>,

    /// Layer configuration (YAML) supplying scale and radius cap
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct PathsArgs {
    /// Platform API level
    #[arg(short, long, default_value = "0")]
    api_level: u32,

    /// Layer configuration (YAML) supplying the path preference
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Installs the global subscriber. The returned guard flushes the log file
/// on drop and must live until exit.
fn init_tracing(verbose: u8, log: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose, cli.log.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Blur(args) => commands::blur::run(args, cli.verbose),
        Commands::Radius(args) => commands::radius::run(args),
        Commands::Paths(args) => commands::paths::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blur() {
        let cli = Cli::try_parse_from([
            "blurx", "-vv", "blur", "in.png", "-o", "out.png", "--strength", "80",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Blur(args) => {
                assert_eq!(args.strength, Some(80.0));
                assert_eq!(args.radius, None);
                assert!(!args.sequential);
            }
            _ => panic!("expected blur"),
        }
    }

    #[test]
    fn test_strength_conflicts_with_radius() {
        let res = Cli::try_parse_from([
            "blurx", "blur", "in.png", "-o", "out.png", "--strength", "8", "--radius", "2",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_radius_negative() {
        let cli = Cli::try_parse_from(["blurx", "radius", "-4", "50"]).unwrap();
        match cli.command {
            Commands::Radius(args) => assert_eq!(args.strength, vec![-4.0, 50.0]),
            _ => panic!("expected radius"),
        }
    }

    #[test]
    fn test_parse_paths_global_threads() {
        let cli = Cli::try_parse_from(["blurx", "paths", "--api-level", "33", "-j", "4"]).unwrap();
        assert_eq!(cli.threads, 4);
        match cli.command {
            Commands::Paths(args) => assert_eq!(args.api_level, 33),
            _ => panic!("expected paths"),
        }
    }
}
