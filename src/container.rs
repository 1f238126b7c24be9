//! WAV container adapter.
//!
//! Converts between RIFF/WAVE bytes and a ([`WavHeader`], `Vec<i16>`) pair.
//! Only 16-bit signed integer PCM is accepted. Samples stay interleaved in
//! file order.

use std::io::{Cursor, Read};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{Result, WatermarkError};

/// The only bit depth the codec works with.
pub const SUPPORTED_BITS_PER_SAMPLE: u16 = 16;

/// Format metadata of a PCM WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WavHeader {
    /// Interleaved channel count.
    pub channels: u16,
    /// Frames per second.
    pub sample_rate: u32,
    /// Bits per sample (always 16 after a successful decode).
    pub bits_per_sample: u16,
    /// Number of frames (one sample per channel each).
    pub frame_count: u32,
}

impl WavHeader {
    /// Creates a 16-bit header.
    pub fn new(channels: u16, sample_rate: u32, frame_count: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: SUPPORTED_BITS_PER_SAMPLE,
            frame_count,
        }
    }

    /// Total number of samples across all channels.
    pub fn sample_count(&self) -> usize {
        self.frame_count as usize * self.channels as usize
    }

    /// Returns the duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        f64::from(self.frame_count) / f64::from(self.sample_rate)
    }

    fn spec(&self) -> WavSpec {
        WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
            sample_format: SampleFormat::Int,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.channels == 0 {
            return Err(WatermarkError::Format("header has zero channels".to_string()));
        }
        if self.bits_per_sample != SUPPORTED_BITS_PER_SAMPLE {
            return Err(WatermarkError::Format(format!(
                "only 16-bit PCM is supported, header says {} bits",
                self.bits_per_sample
            )));
        }
        Ok(())
    }
}

/// Parses WAV bytes into a header and its samples.
///
/// # Errors
/// [`WatermarkError::Format`] if the bytes are not a WAV file, the samples
/// are not 16-bit signed integers, or the data chunk is shorter than its
/// declared length.
pub fn decode(bytes: &[u8]) -> Result<(WavHeader, Vec<i16>)> {
    let reader = WavReader::new(Cursor::new(bytes)).map_err(format_error)?;
    read(reader)
}

/// Serializes a header and samples into WAV bytes.
///
/// The channel count, sample rate and bit depth are written as given;
/// samples are packed as little-endian `i16`.
///
/// # Errors
/// [`WatermarkError::Format`] if the header is not 16-bit with at least one
/// channel, or `samples.len()` differs from `frame_count * channels`.
pub fn encode(header: &WavHeader, samples: &[i16]) -> Result<Vec<u8>> {
    header.validate()?;
    check_sample_count(header, samples.len())?;

    let mut bytes = Vec::new();
    {
        let cursor = Cursor::new(&mut bytes);
        let mut writer = WavWriter::new(cursor, header.spec()).map_err(format_error)?;

        for &sample in samples {
            writer.write_sample(sample).map_err(format_error)?;
        }

        writer.finalize().map_err(format_error)?;
    }
    Ok(bytes)
}

fn read<R: Read>(reader: WavReader<R>) -> Result<(WavHeader, Vec<i16>)> {
    let spec = reader.spec();

    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != SUPPORTED_BITS_PER_SAMPLE {
        return Err(WatermarkError::Format(format!(
            "only 16-bit integer PCM is supported, got {} bits {:?}",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let header = WavHeader {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        frame_count: reader.duration(),
    };
    header.validate()?;

    let samples: Vec<i16> = reader
        .into_samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| WatermarkError::Format(format!("sample data does not match header: {}", e)))?;

    check_sample_count(&header, samples.len())?;

    Ok((header, samples))
}

fn check_sample_count(header: &WavHeader, actual: usize) -> Result<()> {
    let expected = header.sample_count();
    if actual != expected {
        return Err(WatermarkError::Format(format!(
            "header declares {} frames x {} channels = {} samples, found {}",
            header.frame_count, header.channels, expected, actual
        )));
    }
    Ok(())
}

fn format_error(e: hound::Error) -> WatermarkError {
    WatermarkError::Format(e.to_string())
}
