//! wavmark - LSB text watermarks for WAV audio
//!
//! A CLI front end for the wavmark library: reads a WAV file, runs one
//! embed/extract/info operation, and writes or prints the result.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CommandExecutor, EmbedCommand, ExtractCommand, InfoCommand};
use wavmark::config::DEFAULT_LOG_LEVEL;
use wavmark::{ConfigError, ErrorKind, WatermarkConfig, WatermarkError};

/// wavmark - hide short text in 16-bit PCM WAV files
///
/// Each character takes 8 samples (one bit in each sample's lowest bit).
/// Self-describing mode adds a 16-sample length header; externally-keyed
/// mode does not, so the character count must be passed to `extract`.
#[derive(Parser)]
#[command(name = "wavmark")]
#[command(version)]
#[command(about = "Hide and recover short text watermarks in 16-bit PCM WAV files")]
#[command(long_about = None)]
struct Cli {
    /// Path to config file (default: ~/.wavmark/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed text into a WAV file
    Embed(EmbedCommand),

    /// Extract text from a watermarked WAV file
    Extract(ExtractCommand),

    /// Show format details and watermark capacity of a WAV file
    Info(InfoCommand),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    init_tracing(cli.verbose, &config.log_level);

    match &cli.command {
        Commands::Embed(cmd) => cmd.execute(&config),
        Commands::Extract(cmd) => cmd.execute(&config),
        Commands::Info(cmd) => cmd.execute(&config),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<WatermarkConfig> {
    let loaded = match path {
        Some(p) => WatermarkConfig::load_from(p),
        // No home directory is not fatal without an explicit --config
        None => match WatermarkConfig::load() {
            Err(ConfigError::NoConfigDir) => Ok(WatermarkConfig::default()),
            other => other,
        },
    };
    loaded.context("Failed to load configuration")
}

/// `RUST_LOG` wins, then `--verbose`, then the configured level.
fn init_tracing(verbose: bool, configured: &str) {
    let fallback = if verbose { "debug" } else { configured };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn report(error: &anyhow::Error) {
    eprintln!("Error: {:#}", error);
    if let Some(e) = error.downcast_ref::<WatermarkError>() {
        eprintln!("  {}", hint(e.kind()));
    }
}

fn hint(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Format => "The file must be an uncompressed 16-bit PCM WAV.",
        ErrorKind::Capacity => {
            "Use a shorter message or a longer file (`wavmark info` shows the capacity)."
        }
        ErrorKind::TruncatedData => {
            "No self-describing watermark found. If it was embedded externally-keyed, \
             pass --mode externally-keyed --length <characters>."
        }
        ErrorKind::InvalidArgument => {
            "Check the message characters, --mode, and --length (a non-negative whole number)."
        }
    }
}
