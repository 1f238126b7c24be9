//! Info command - show WAV format and watermark capacity.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use wavmark::{Mode, WatermarkConfig};

use super::{load_carrier, CommandExecutor};

/// Show format details and watermark capacity of a WAV file.
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// WAV file to inspect
    #[arg(short, long)]
    pub input: PathBuf,
}

impl CommandExecutor for InfoCommand {
    fn execute(&self, _config: &WatermarkConfig) -> Result<()> {
        let carrier = load_carrier(&self.input)?;
        let header = carrier.header();

        println!("File: {}", self.input.display());
        println!("  Channels: {}", header.channels);
        println!("  Sample rate: {} Hz", header.sample_rate);
        println!("  Bit depth: {}", header.bits_per_sample);
        println!("  Frames: {}", header.frame_count);
        println!("  Samples: {}", carrier.sample_count());
        println!("  Duration: {:.2}s", carrier.duration_secs());
        println!();
        println!("Capacity (characters):");
        for mode in [Mode::SelfDescribing, Mode::ExternallyKeyed] {
            println!("  {}: {}", mode, carrier.capacity(mode));
        }

        Ok(())
    }
}
