use std::fs;
use std::path::Path;

use tia_tone_wavs::audio::load_wav_u8;
use tia_tone_wavs::resample::output_sample_count;
use tia_tone_wavs::tone::{approx_freq, tone_period_ticks, BASE_CLOCK_HZ, TONE_COUNT};
use tia_tone_wavs::wav_writer::output_file_name;
use tia_tone_wavs::{generate_tone_wavs, GenerateConfig, RenderMode, ToneError};

const TABLE: &str = "AUDC waveforms: - full, _ silent\n--__\n-\n-_-__-___\n";

fn config_in(dir: &Path, out: &str, mode: RenderMode) -> GenerateConfig {
    let input_path = dir.join("waveforms.txt");
    fs::write(&input_path, TABLE).unwrap();
    GenerateConfig {
        input_path,
        out_dir: dir.join(out),
        mode,
    }
}

#[test]
fn resample_batch_writes_every_pair() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), "out", RenderMode::Resample);

    let written = generate_tone_wavs(&config, |_| {}).unwrap();
    assert_eq!(written.len(), TONE_COUNT * 3);

    let lens = [4usize, 1, 9];
    for tone in 0..TONE_COUNT {
        for (wf, len) in lens.iter().enumerate() {
            let path = config.out_dir.join(output_file_name(tone, wf));
            let (rate, samples) = load_wav_u8(&path).unwrap();
            assert_eq!(rate, 44100);

            let ticks = tone_period_ticks(tone);
            let expected = output_sample_count(*len, ticks, BASE_CLOCK_HZ, 44100, 3);
            assert_eq!(samples.len(), expected, "{}", path.display());
            assert!(samples.iter().all(|s| *s == 0 || *s == 128));
            if *len == 1 {
                assert!(samples.iter().all(|s| *s == 128));
            }
        }
    }
}

#[test]
fn highest_tone_of_first_waveform() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), "out", RenderMode::Resample);
    generate_tone_wavs(&config, |_| {}).unwrap();

    let (_, samples) = load_wav_u8(&config.out_dir.join("30000hz_waveform0.wav")).unwrap();
    assert_eq!(
        samples,
        vec![128, 128, 128, 0, 0, 0, 128, 128, 128, 0, 0, 0, 128, 128, 128]
    );
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = config_in(dir.path(), "a", RenderMode::Resample);
    let second = config_in(dir.path(), "b", RenderMode::Resample);

    let a = generate_tone_wavs(&first, |_| {}).unwrap();
    let b = generate_tone_wavs(&second, |_| {}).unwrap();
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa.file_name(), pb.file_name());
        assert_eq!(fs::read(pa).unwrap(), fs::read(pb).unwrap());
    }
}

#[test]
fn raw_mode_uses_per_tone_rate() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), "raw", RenderMode::Raw);
    generate_tone_wavs(&config, |_| {}).unwrap();

    for tone in [0, 7, 31] {
        let (rate, samples) = load_wav_u8(&config.out_dir.join(output_file_name(tone, 2))).unwrap();
        assert_eq!(rate, approx_freq(tone));
        assert_eq!(samples.len(), 27);
    }
}

#[test]
fn empty_row_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("waveforms.txt");
    fs::write(&input_path, "header\n--__\n\n").unwrap();
    let config = GenerateConfig {
        input_path,
        out_dir: dir.path().join("out"),
        mode: RenderMode::Resample,
    };

    let err = generate_tone_wavs(&config, |_| {}).unwrap_err();
    assert!(matches!(err, ToneError::EmptyWaveform { index: 2 }));
    assert!(!config.out_dir.exists());
}

#[test]
fn hybrid_batch_at_highest_tone_repeats_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), "hybrid", RenderMode::Hybrid);
    generate_tone_wavs(&config, |_| {}).unwrap();

    let (rate, samples) = load_wav_u8(&config.out_dir.join("30000hz_waveform2.wav")).unwrap();
    assert_eq!(rate, 30000);
    assert_eq!(samples, [128u8, 0, 128, 0, 0, 128, 0, 0, 0].repeat(3));
}

#[test]
fn unwritable_destination_aborts_batch() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), "out", RenderMode::Resample);
    let blocked = config.out_dir.join("30000hz_waveform0.wav");
    fs::create_dir_all(&blocked).unwrap();

    let err = generate_tone_wavs(&config, |_| {}).unwrap_err();
    match err {
        ToneError::Io { path, .. } => assert_eq!(path, blocked),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!config.out_dir.join("30000hz_waveform1.wav").exists());
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerateConfig {
        input_path: dir.path().join("nope.txt"),
        out_dir: dir.path().join("out"),
        mode: RenderMode::Resample,
    };

    let err = generate_tone_wavs(&config, |_| {}).unwrap_err();
    assert!(matches!(err, ToneError::Io { .. }));
}
