use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::{debug, info};

use crate::error::{Result, ToneError};
use crate::resample::{repeat_waveform, resample_waveform};
use crate::tone::{approx_freq, tone_period_ticks, BASE_CLOCK_HZ, TONE_COUNT};
use crate::waveform::{load_waveform_table, Waveform};

const OUTPUT_SAMPLE_RATE: u32 = 44100;
// Picked by ear; fewer passes click on loop in some players.
const NUM_REPEATS: usize = 3;

/// How each (tone, waveform) pair is turned into samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Resample to a fixed 44.1 kHz output.
    #[default]
    Resample,
    /// Write the raw cycle, played back at the tone's approximate frequency.
    Raw,
    /// Resample, but to the tone's approximate frequency.
    Hybrid,
}

impl FromStr for RenderMode {
    type Err = ToneError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "resample" => Ok(RenderMode::Resample),
            "raw" => Ok(RenderMode::Raw),
            "hybrid" => Ok(RenderMode::Hybrid),
            _ => Err(ToneError::UnknownMode(raw.to_string())),
        }
    }
}

impl RenderMode {
    /// Sample rate written to the WAV header for a tone index.
    pub fn sample_rate(self, tone_index: usize) -> u32 {
        match self {
            RenderMode::Resample => OUTPUT_SAMPLE_RATE,
            RenderMode::Raw | RenderMode::Hybrid => approx_freq(tone_index),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GenerateConfig {
    pub input_path: PathBuf,
    pub out_dir: PathBuf,
    pub mode: RenderMode,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            input_path: PathBuf::from("waveforms.txt"),
            out_dir: PathBuf::from("."),
            mode: RenderMode::default(),
        }
    }
}

/// `<approx_freq>hz_waveform<index>.wav`
pub fn output_file_name(tone_index: usize, waveform_index: usize) -> String {
    format!("{}hz_waveform{}.wav", approx_freq(tone_index), waveform_index)
}

/// Samples for one (tone, waveform) pair.
pub fn render_tone(waveform: &[u8], tone_index: usize, mode: RenderMode) -> Vec<u8> {
    match mode {
        RenderMode::Raw => repeat_waveform(waveform, NUM_REPEATS),
        RenderMode::Resample | RenderMode::Hybrid => {
            resample_waveform(
                waveform,
                tone_period_ticks(tone_index),
                BASE_CLOCK_HZ,
                mode.sample_rate(tone_index),
                NUM_REPEATS,
            )
        }
    }
}

/// Writes unsigned 8-bit PCM bytes as a mono WAV file.
pub fn write_wav_u8(path: &Path, sample_rate: u32, samples: &[u8]) -> Result<()> {
    if sample_rate == 0 {
        return Err(ToneError::InvalidSampleRate(sample_rate));
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 8,
        sample_format: SampleFormat::Int,
    };

    let file = File::create(path).map_err(|e| ToneError::io(path, e))?;
    let mut writer = WavWriter::new(BufWriter::new(file), spec)?;
    for &byte in samples {
        // hound stores 8-bit samples offset by 128.
        writer.write_sample((byte as i16 - 128) as i8)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Loads the waveform table and writes every (tone, waveform) pair to
/// `config.out_dir`. Stops at the first failure; files already written stay.
/// Returns the paths written, tone-major.
pub fn generate_tone_wavs<F>(config: &GenerateConfig, mut progress: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(f32),
{
    let waveforms = load_waveform_table(&config.input_path)?;
    write_tone_wavs(&waveforms, &config.out_dir, config.mode, &mut progress)
}

fn write_tone_wavs<F>(
    waveforms: &[Waveform],
    out_dir: &Path,
    mode: RenderMode,
    progress: &mut F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(f32),
{
    fs::create_dir_all(out_dir).map_err(|e| ToneError::io(out_dir, e))?;

    let total = TONE_COUNT * waveforms.len();
    info!(
        waveforms = waveforms.len(),
        files = total,
        ?mode,
        out_dir = %out_dir.display(),
        "generating tone bank"
    );

    let mut written = Vec::with_capacity(total);
    for tone_index in 0..TONE_COUNT {
        let sample_rate = mode.sample_rate(tone_index);
        for (waveform_index, waveform) in waveforms.iter().enumerate() {
            let samples = render_tone(waveform, tone_index, mode);
            let path = out_dir.join(output_file_name(tone_index, waveform_index));
            write_wav_u8(&path, sample_rate, &samples)?;
            debug!(path = %path.display(), samples = samples.len(), sample_rate, "wrote tone");

            written.push(path);
            progress(written.len() as f32 / total as f32);
        }
    }

    info!(files = written.len(), "tone bank complete");
    Ok(written)
}
