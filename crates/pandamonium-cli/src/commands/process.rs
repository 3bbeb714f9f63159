//! File-based processing command.

use super::common::{ParamOverrides, load_preset, peak, rms};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use pandamonium_core::{AtomicParams, ParamSnapshot, linear_to_db};
use pandamonium_io::{DEFAULT_BLOCK_SIZE, ProcessingEngine, WavSpec, read_wav, write_wav};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Preset name or TOML file; parameter flags override its values
    #[arg(short, long)]
    preset: Option<String>,

    #[command(flatten)]
    params: ParamOverrides,

    /// Processing block size
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// Output channel count (defaults to the input's); extra channels are silent
    #[arg(long)]
    output_channels: Option<usize>,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !matches!(args.bit_depth, 16 | 24 | 32) {
        anyhow::bail!("Unsupported bit depth {} (expected 16, 24 or 32)", args.bit_depth);
    }
    if args.block_size == 0 {
        anyhow::bail!("Block size must be at least 1");
    }
    if args.output_channels == Some(0) {
        anyhow::bail!("Output channel count must be at least 1");
    }

    let base = match &args.preset {
        Some(name) => {
            let preset = load_preset(name)?;
            println!("Loading preset: {}", preset.name);
            preset.to_snapshot()
        }
        None => ParamSnapshot::default(),
    };
    let params = args.params.apply(base)?;

    println!("Reading {}...", args.input.display());
    let (mut buffer, spec) = read_wav(&args.input)?;
    let frames = buffer.frames();
    println!(
        "  {} frames, {} channel(s), {} Hz, {:.2}s",
        frames,
        buffer.num_channels(),
        spec.sample_rate,
        frames as f32 / spec.sample_rate as f32
    );

    let input_rms = rms(buffer.iter());
    let input_peak = peak(buffer.iter());

    let mut engine = ProcessingEngine::new(Arc::new(AtomicParams::new(params)))
        .with_block_size(args.block_size);
    if let Some(channels) = args.output_channels {
        engine = engine.with_output_channels(channels);
    }

    println!(
        "Processing: gain {:.1} dB, fuzz {:.1}, volume {:.1} dB, mode {}",
        params.gain_db, params.fuzz, params.volume_db, params.mode
    );
    tracing::debug!(?params, block_size = engine.block_size(), "engine configured");

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    engine.process_with(&mut buffer, |done| pb.set_position(done as u64));

    pb.finish_with_message("done");

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(input_rms),
        linear_to_db(input_peak)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(buffer.iter())),
        linear_to_db(peak(buffer.iter()))
    );

    let out_spec = WavSpec {
        bits_per_sample: args.bit_depth,
        ..spec
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &buffer, out_spec)?;

    println!("Done!");
    Ok(())
}
