use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToneError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// Row `index` (1-based, header excluded) has no `-` or `_` characters.
    #[error("waveform row {index} is empty")]
    EmptyWaveform { index: usize },

    #[error("waveform table has no waveform rows")]
    NoWaveforms,

    #[error("unknown render mode {0:?} (expected resample, raw or hybrid)")]
    UnknownMode(String),

    #[error("invalid sample rate {0} Hz")]
    InvalidSampleRate(u32),

    #[error("expected 8-bit mono WAV, got {channels} channel(s) at {bits} bits")]
    UnsupportedFormat { channels: u16, bits: u16 },
}

impl ToneError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ToneError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToneError>;
