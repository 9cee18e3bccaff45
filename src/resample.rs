//! Maps one waveform cycle onto an output sample rate.
//!
//! Resampling is nearest-neighbor with phase accumulation: output sample `k`
//! sits at `t = k / sample_rate`, and picks source sample
//! `floor(t / period) mod len`. No interpolation or anti-aliasing is applied,
//! the source is already a two-level signal.
//!
//! A source sample lasts `period_ticks / clock_hz` seconds, so every position
//! is a ratio of integers and is floored exactly in `u64`.

/// Number of output samples for `repeats` passes over a waveform of `len`
/// source samples, each lasting `period_ticks` cycles of `clock_hz`.
pub fn output_sample_count(
    len: usize,
    period_ticks: u32,
    clock_hz: u32,
    sample_rate: u32,
    repeats: usize,
) -> usize {
    let per_pass = len as u64 * period_ticks as u64 * sample_rate as u64 / clock_hz as u64;
    repeats * per_pass as usize
}

/// Resamples `waveform` so each source sample lasts `period_ticks / clock_hz`
/// seconds when played back at `sample_rate`.
///
/// An empty waveform yields an empty output.
pub fn resample_waveform(
    waveform: &[u8],
    period_ticks: u32,
    clock_hz: u32,
    sample_rate: u32,
    repeats: usize,
) -> Vec<u8> {
    let len = waveform.len();
    let count = output_sample_count(len, period_ticks, clock_hz, sample_rate, repeats);
    let samples_per_period = period_ticks as u64 * sample_rate as u64;

    (0..count as u64)
        .map(|k| {
            let phase = k * clock_hz as u64 / samples_per_period;
            waveform[(phase % len as u64) as usize]
        })
        .collect()
}

/// Repeats `waveform` verbatim, one output sample per source sample.
pub fn repeat_waveform(waveform: &[u8], repeats: usize) -> Vec<u8> {
    waveform.repeat(repeats)
}
