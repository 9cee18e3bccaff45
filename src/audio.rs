use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::error::{Result, ToneError};

/// Reads an 8-bit mono WAV back into its unsigned sample bytes.
/// Returns `(sample_rate, samples)`.
pub fn load_wav_u8(path: &Path) -> Result<(u32, Vec<u8>)> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1 || spec.bits_per_sample != 8 || spec.sample_format != SampleFormat::Int {
        return Err(ToneError::UnsupportedFormat {
            channels: spec.channels,
            bits: spec.bits_per_sample,
        });
    }

    let mut samples = Vec::with_capacity(reader.len() as usize);
    for sample in reader.samples::<i8>() {
        samples.push((sample? as i16 + 128) as u8);
    }

    Ok((spec.sample_rate, samples))
}
