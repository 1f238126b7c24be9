//! Extract command - recover text from a watermarked WAV file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use wavmark::{parse_character_count, Mode, WatermarkConfig};

use super::{load_carrier, CommandExecutor};

/// Extract text from a watermarked WAV file.
///
/// NOTE: audio without a watermark is not detected. It yields garbage text
/// or a length error.
#[derive(Args, Debug)]
pub struct ExtractCommand {
    /// Watermarked WAV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Mode used at embedding: self-describing or externally-keyed
    /// Defaults to externally-keyed when --length is given, else the configured mode
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Character count (externally-keyed mode only)
    #[arg(short, long, allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Write the recovered bytes to this file instead of printing them
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExtractCommand {
    fn resolve_mode(&self, config: &WatermarkConfig) -> Mode {
        match (self.mode, &self.length) {
            (Some(mode), _) => mode,
            (None, Some(_)) => Mode::ExternallyKeyed,
            (None, None) => config.default_mode,
        }
    }
}

impl CommandExecutor for ExtractCommand {
    fn execute(&self, config: &WatermarkConfig) -> Result<()> {
        let mode = self.resolve_mode(config);
        let length = self
            .length
            .as_deref()
            .map(parse_character_count)
            .transpose()?;

        let carrier = load_carrier(&self.input)?;
        let payload = carrier.extract(mode, length)?;

        info!(mode = %mode, characters = payload.len(), "watermark extracted");

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, payload.as_bytes())
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            println!("Watermark written to: {}", output_path.display());
            println!("  Characters: {}", payload.len());
        } else {
            println!("{}", payload);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(mode: Option<Mode>, length: Option<&str>) -> ExtractCommand {
        ExtractCommand {
            input: PathBuf::from("in.wav"),
            mode,
            length: length.map(str::to_string),
            output: None,
        }
    }

    #[test]
    fn test_length_implies_keyed_mode() {
        let config = WatermarkConfig::default();
        assert_eq!(command(None, Some("4")).resolve_mode(&config), Mode::ExternallyKeyed);
        assert_eq!(command(None, None).resolve_mode(&config), Mode::SelfDescribing);
    }

    #[test]
    fn test_explicit_mode_wins() {
        let config = WatermarkConfig {
            default_mode: Mode::ExternallyKeyed,
            ..WatermarkConfig::default()
        };
        assert_eq!(
            command(Some(Mode::SelfDescribing), Some("4")).resolve_mode(&config),
            Mode::SelfDescribing
        );
        assert_eq!(command(None, None).resolve_mode(&config), Mode::ExternallyKeyed);
    }
}
