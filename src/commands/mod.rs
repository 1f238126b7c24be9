//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod embed;
mod extract;
mod info;

pub use embed::EmbedCommand;
pub use extract::ExtractCommand;
pub use info::InfoCommand;

use std::path::Path;

use anyhow::{Context, Result};

use wavmark::{WatermarkConfig, WavCarrier};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments and the loaded config.
    fn execute(&self, config: &WatermarkConfig) -> Result<()>;
}

/// Reads a whole WAV file and decodes it.
fn load_carrier(path: &Path) -> Result<WavCarrier> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let carrier = WavCarrier::from_bytes(&bytes)
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    let header = carrier.header();
    tracing::debug!(
        path = %path.display(),
        channels = header.channels,
        sample_rate = header.sample_rate,
        frames = header.frame_count,
        "decoded WAV"
    );

    Ok(carrier)
}
