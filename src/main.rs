use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use tia_tone_wavs::{generate_tone_wavs, GenerateConfig, RenderMode};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }

    let mut config = GenerateConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                config.input_path = args
                    .get(i)
                    .map(PathBuf::from)
                    .ok_or_else(|| anyhow!("missing input path"))?;
            }
            "--out-dir" => {
                i += 1;
                config.out_dir = args
                    .get(i)
                    .map(PathBuf::from)
                    .ok_or_else(|| anyhow!("missing output directory"))?;
            }
            "--mode" => {
                i += 1;
                let raw = args.get(i).ok_or_else(|| anyhow!("missing mode"))?;
                config.mode = raw
                    .parse::<RenderMode>()
                    .with_context(|| format!("parsing --mode {}", raw))?;
            }
            other => {
                return Err(anyhow!("unknown arg: {}", other));
            }
        }
        i += 1;
    }

    let written = generate_tone_wavs(&config, |_| {})
        .with_context(|| format!("generating tones from {}", config.input_path.display()))?;
    println!("Wrote {} files to {}", written.len(), config.out_dir.display());
    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: tia-tone-wavs [--input waveforms.txt] [--out-dir .] \
         [--mode resample|raw|hybrid]"
    );
}
