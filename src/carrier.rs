//! WAV carriers and the byte-level watermarking entry points.

use crate::codec::{self, Mode, Payload};
use crate::container::{self, WavHeader};
use crate::error::{Result, WatermarkError};

/// A decoded 16-bit PCM WAV file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavCarrier {
    header: WavHeader,
    samples: Vec<i16>,
}

impl WavCarrier {
    /// Creates a carrier from a header and matching samples.
    ///
    /// Fails with [`WatermarkError::Format`] if the sample count is not
    /// `frame_count * channels`.
    pub fn new(header: WavHeader, samples: Vec<i16>) -> Result<Self> {
        if samples.len() != header.sample_count() {
            return Err(WatermarkError::Format(format!(
                "header expects {} samples, got {}",
                header.sample_count(),
                samples.len()
            )));
        }
        Ok(Self { header, samples })
    }

    /// Parses WAV bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (header, samples) = container::decode(bytes)?;
        Ok(Self { header, samples })
    }

    /// Serializes the carrier back to WAV bytes.
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>> {
        container::encode(&self.header, &self.samples)
    }

    /// Returns the number of characters that can be hidden with `mode`.
    pub fn capacity(&self, mode: Mode) -> usize {
        codec::capacity(self.samples.len(), mode)
    }

    /// Returns the duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.header.duration_secs()
    }

    /// Returns a new carrier with `payload` embedded.
    pub fn embed(&self, payload: &Payload, mode: Mode) -> Result<Self> {
        Ok(Self {
            header: self.header,
            samples: codec::embed(&self.samples, payload, mode)?,
        })
    }

    /// Extracts a payload. See [`codec::extract()`] for `external_length`.
    pub fn extract(&self, mode: Mode, external_length: Option<usize>) -> Result<Payload> {
        codec::extract(&self.samples, mode, external_length)
    }

    /// Returns the container header.
    pub fn header(&self) -> &WavHeader {
        &self.header
    }

    /// Returns the interleaved samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Returns the number of samples.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Splits the carrier into header and samples.
    pub fn into_parts(self) -> (WavHeader, Vec<i16>) {
        (self.header, self.samples)
    }
}

/// Embeds `text` into WAV bytes with the given mode and returns new WAV bytes.
pub fn embed_wav(input: &[u8], text: &str, mode: Mode) -> Result<Vec<u8>> {
    let payload = Payload::from_text(text)?;
    WavCarrier::from_bytes(input)?
        .embed(&payload, mode)?
        .to_wav_bytes()
}

/// Extracts text from WAV bytes. See [`codec::extract()`] for `external_length`.
pub fn extract_wav(input: &[u8], mode: Mode, external_length: Option<usize>) -> Result<String> {
    let carrier = WavCarrier::from_bytes(input)?;
    Ok(carrier.extract(mode, external_length)?.to_text())
}

/// Embeds `text` preceded by its 16-bit bit length.
pub fn embed_self_describing(input: &[u8], text: &str) -> Result<Vec<u8>> {
    embed_wav(input, text, Mode::SelfDescribing)
}

/// Embeds `text` without a length header.
///
/// The caller must keep the character count of `text` for extraction.
pub fn embed_externally_keyed(input: &[u8], text: &str) -> Result<Vec<u8>> {
    embed_wav(input, text, Mode::ExternallyKeyed)
}

/// Extracts text written by [`embed_self_describing`].
pub fn extract_self_describing(input: &[u8]) -> Result<String> {
    extract_wav(input, Mode::SelfDescribing, None)
}

/// Extracts `character_count` characters written by [`embed_externally_keyed`].
pub fn extract_externally_keyed(input: &[u8], character_count: usize) -> Result<String> {
    extract_wav(input, Mode::ExternallyKeyed, Some(character_count))
}

/// Creates a mono 44.1 kHz test carrier holding a 440 Hz tone.
#[cfg(test)]
fn create_test_carrier(sample_count: usize) -> WavCarrier {
    let samples: Vec<i16> = (0..sample_count)
        .map(|i| {
            let t = i as f64 / 44100.0;
            (f64::sin(2.0 * std::f64::consts::PI * 440.0 * t) * 16000.0) as i16
        })
        .collect();

    WavCarrier {
        header: WavHeader::new(1, 44100, sample_count as u32),
        samples,
    }
}
