//! Embed command - hide text in a WAV file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use wavmark::{Mode, Payload, WatermarkConfig};

use super::{load_carrier, CommandExecutor};

/// Embed text into a WAV file.
///
/// Only bit 0 of the first samples changes; header and length stay the same.
/// In externally-keyed mode, remember the printed character count: it is
/// needed to extract the text again.
#[derive(Args, Debug)]
pub struct EmbedCommand {
    /// Input WAV file (16-bit PCM)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output path for the watermarked WAV file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Text to embed (characters U+0000 to U+00FF only)
    #[arg(short, long)]
    pub message: String,

    /// Embedding mode: self-describing or externally-keyed
    /// Defaults to the configured mode (self-describing unless changed)
    #[arg(long)]
    pub mode: Option<Mode>,
}

impl CommandExecutor for EmbedCommand {
    fn execute(&self, config: &WatermarkConfig) -> Result<()> {
        let mode = self.mode.unwrap_or(config.default_mode);
        let payload = Payload::from_text(&self.message)?;

        let carrier = load_carrier(&self.input)?;
        let marked = carrier.embed(&payload, mode)?;
        let bytes = marked.to_wav_bytes()?;

        std::fs::write(&self.output, &bytes)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        info!(
            mode = %mode,
            characters = payload.len(),
            capacity = carrier.capacity(mode),
            output = %self.output.display(),
            "watermark embedded"
        );

        println!("Watermark embedded: {}", self.output.display());
        println!("  Mode: {}", mode);
        println!("  Characters: {}", payload.len());
        if mode == Mode::ExternallyKeyed {
            println!();
            println!("Keep the character count. Extract with:");
            println!(
                "  wavmark extract -i {} --mode {} --length {}",
                self.output.display(),
                mode,
                payload.len()
            );
        }

        Ok(())
    }
}
