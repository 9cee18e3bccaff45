/// Number of tone indices generated per waveform.
pub const TONE_COUNT: usize = 32;

/// Clock the tone divider counts against.
pub const BASE_CLOCK_HZ: u32 = 30000;

/// Approximate pitch for a tone index. Only used for naming and for the
/// per-tone output rate; the real divider pitch differs slightly.
pub fn approx_freq(index: usize) -> u32 {
    BASE_CLOCK_HZ / tone_period_ticks(index)
}

/// Duration of one source sample at this tone index, in base clock ticks.
pub fn tone_period_ticks(index: usize) -> u32 {
    index as u32 + 1
}
