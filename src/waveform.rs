use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ToneError};

/// Byte written for a `-` sample.
pub const FULL_VOLUME: u8 = 128;
/// Byte written for a `_` sample.
pub const SILENCE: u8 = 0;

/// One cycle of a two-level waveform, one byte per source sample.
pub type Waveform = Vec<u8>;

fn sample_level(ch: char) -> Option<u8> {
    match ch {
        '-' => Some(FULL_VOLUME),
        '_' => Some(SILENCE),
        _ => None,
    }
}

/// Parses a waveform table. The first line is a header and is skipped; every
/// following line is one waveform. Characters other than `-` and `_` are ignored.
pub fn parse_waveform_table(raw: &str) -> Result<Vec<Waveform>> {
    let waveforms = raw
        .lines()
        .skip(1)
        .enumerate()
        .map(|(row, line)| {
            let waveform: Waveform = line.chars().filter_map(sample_level).collect();
            if waveform.is_empty() {
                Err(ToneError::EmptyWaveform { index: row + 1 })
            } else {
                Ok(waveform)
            }
        })
        .collect::<Result<Vec<Waveform>>>()?;

    if waveforms.is_empty() {
        return Err(ToneError::NoWaveforms);
    }
    Ok(waveforms)
}

pub fn load_waveform_table(path: &Path) -> Result<Vec<Waveform>> {
    let raw = fs::read_to_string(path).map_err(|e| ToneError::io(path, e))?;
    let waveforms = parse_waveform_table(&raw)?;
    debug!(path = %path.display(), count = waveforms.len(), "loaded waveform table");
    Ok(waveforms)
}
