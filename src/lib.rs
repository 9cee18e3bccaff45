//! Turns an ASCII waveform table into a bank of 8-bit mono WAV tones.

pub mod audio;
pub mod error;
pub mod resample;
pub mod tone;
pub mod wav_writer;
pub mod waveform;

pub use error::ToneError;
pub use wav_writer::{generate_tone_wavs, GenerateConfig, RenderMode};
pub use waveform::{load_waveform_table, parse_waveform_table, Waveform};
