//! Writing a payload into sample LSBs.

use super::bitstream::{to_bits, with_lsb};
use super::mode::Mode;
use super::payload::Payload;
use crate::error::{Result, WatermarkError};

/// Embeds `payload` into a copy of `samples`.
///
/// The bitstream occupies samples `0..n` (one bit per sample); every other
/// sample and every bit above bit 0 is left untouched. Nothing is allocated
/// if the payload does not fit.
///
/// # Errors
/// - [`WatermarkError::LengthFieldOverflow`] if `mode` is self-describing
///   and the payload exceeds 65535 bits.
/// - [`WatermarkError::Capacity`] if the bitstream is longer than `samples`.
pub fn embed(samples: &[i16], payload: &Payload, mode: Mode) -> Result<Vec<i16>> {
    let bits = checked_bits(samples.len(), payload, mode)?;
    let mut watermarked = samples.to_vec();
    write_bits(&mut watermarked, &bits);
    Ok(watermarked)
}

/// Embeds `payload` directly into `samples`.
///
/// On error the slice is left exactly as it was.
pub fn embed_in_place(samples: &mut [i16], payload: &Payload, mode: Mode) -> Result<()> {
    let bits = checked_bits(samples.len(), payload, mode)?;
    write_bits(samples, &bits);
    Ok(())
}

fn checked_bits(available: usize, payload: &Payload, mode: Mode) -> Result<Vec<bool>> {
    let bits = to_bits(payload, mode)?;
    if bits.len() > available {
        return Err(WatermarkError::Capacity {
            required: bits.len(),
            available,
        });
    }
    Ok(bits)
}

fn write_bits(samples: &mut [i16], bits: &[bool]) {
    for (sample, &bit) in samples.iter_mut().zip(bits) {
        *sample = with_lsb(*sample, bit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::bitstream::lsb;

    fn lsbs(samples: &[i16]) -> String {
        samples.iter().map(|&s| if lsb(s) { '1' } else { '0' }).collect()
    }

    #[test]
    fn test_hi_into_silence() {
        let samples = vec![0i16; 10_000];
        let payload = Payload::from_text("HI").unwrap();

        let out = embed(&samples, &payload, Mode::SelfDescribing).unwrap();

        assert_eq!(out.len(), samples.len());
        assert_eq!(lsbs(&out[..16]), "0000000000010000");
        assert_eq!(lsbs(&out[16..32]), "0100100001001001");
        assert!(out[32..].iter().all(|&s| s == 0));
    }

    #[test]
    fn test_only_bit_zero_changes() {
        let samples: Vec<i16> = (0..200).map(|i| (i as i16 - 100) * 257).collect();
        let payload = Payload::from_text("\u{ff}\u{0}x").unwrap();

        let out = embed(&samples, &payload, Mode::SelfDescribing).unwrap();

        for (before, after) in samples.iter().zip(&out) {
            assert_eq!(before & !1, after & !1);
        }
        assert_eq!(&out[40..], &samples[40..]);
    }

    #[test]
    fn test_capacity_rejected_before_mutation() {
        let mut samples: Vec<i16> = (1..=20).collect();
        let original = samples.clone();
        let payload = Payload::from_text("abc").unwrap();

        let err = embed_in_place(&mut samples, &payload, Mode::ExternallyKeyed).unwrap_err();

        assert_eq!(err, WatermarkError::Capacity { required: 24, available: 20 });
        assert_eq!(samples, original);
    }

    #[test]
    fn test_exact_fit_and_one_over() {
        let payload = Payload::from_text("ab").unwrap();

        assert!(embed(&[0; 32], &payload, Mode::SelfDescribing).is_ok());
        assert!(matches!(
            embed(&[0; 31], &payload, Mode::SelfDescribing),
            Err(WatermarkError::Capacity { required: 32, available: 31 })
        ));

        assert!(embed(&[0; 16], &payload, Mode::ExternallyKeyed).is_ok());
        assert!(matches!(
            embed(&[0; 15], &payload, Mode::ExternallyKeyed),
            Err(WatermarkError::Capacity { required: 16, available: 15 })
        ));
    }

    #[test]
    fn test_idempotent() {
        let samples: Vec<i16> = (0..100).map(|i| i * 3 - 150).collect();
        let payload = Payload::from_text("mark").unwrap();

        let once = embed(&samples, &payload, Mode::ExternallyKeyed).unwrap();
        let twice = embed(&once, &payload, Mode::ExternallyKeyed).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_in_place_matches_copy() {
        let samples: Vec<i16> = (0..64i32).map(|i| (i * 511 - 16000) as i16).collect();
        let payload = Payload::from_text("ok").unwrap();

        let copied = embed(&samples, &payload, Mode::SelfDescribing).unwrap();
        let mut in_place = samples.clone();
        embed_in_place(&mut in_place, &payload, Mode::SelfDescribing).unwrap();

        assert_eq!(copied, in_place);
    }

    #[test]
    fn test_empty_payload_self_describing_writes_zero_header() {
        let samples = vec![-1i16; 20];
        let out = embed(&samples, &Payload::default(), Mode::SelfDescribing).unwrap();
        assert_eq!(lsbs(&out[..16]), "0000000000000000");
        assert_eq!(&out[16..], &samples[16..]);
    }
}
