use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use owo_colors::{OwoColorize, Stream};

use convsweep::config::SweepConfig;
use convsweep::progress::{BarReporter, Reporter, Silent};
use convsweep::{extract, invoke, sweep};

#[derive(Parser)]
#[command(
    name = "convsweep",
    version,
    about = "Block-size sweep harness for latency-reporting convolution binaries"
)]
struct Cli {
    /// TOML config file; CLI flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the benchmarked executable
    #[arg(long)]
    exe: Option<PathBuf>,

    /// Input audio file (passed through as -i)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Impulse-response file (passed through as -r)
    #[arg(short = 'r', long)]
    impulse_response: Option<PathBuf>,

    /// Where the benchmarked program writes its audio output (-o)
    #[arg(long)]
    wav_out: Option<PathBuf>,

    /// Destination CSV for the result table
    #[arg(long)]
    results: Option<PathBuf>,

    /// Trials per configuration point
    #[arg(short = 'n', long)]
    repetitions: Option<u32>,

    /// Gain passed through as -g
    #[arg(short, long)]
    gain: Option<f64>,

    /// Smallest block size, as a power-of-two exponent
    #[arg(long)]
    min_block_shift: Option<u32>,

    /// Largest block size, as a power-of-two exponent (inclusive)
    #[arg(long)]
    max_block_shift: Option<u32>,

    /// Block size for the fixed time-mode row
    #[arg(long)]
    time_block: Option<u32>,

    /// Suppress per-trial progress bars
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Result<(SweepConfig, bool)> {
        let mut cfg = match &self.config {
            Some(path) => SweepConfig::load(path)?,
            None => SweepConfig::default(),
        };

        if let Some(exe) = self.exe {
            cfg.exe = exe;
        }
        if let Some(input) = self.input {
            cfg.input = input;
        }
        if let Some(ir) = self.impulse_response {
            cfg.impulse_response = ir;
        }
        if let Some(wav_out) = self.wav_out {
            cfg.wav_out = wav_out;
        }
        if let Some(results) = self.results {
            cfg.results = results;
        }
        if let Some(repetitions) = self.repetitions {
            cfg.repetitions = repetitions;
        }
        if let Some(gain) = self.gain {
            cfg.gain = gain;
        }
        if let Some(min) = self.min_block_shift {
            cfg.min_block_shift = min;
        }
        if let Some(max) = self.max_block_shift {
            cfg.max_block_shift = max;
        }
        if let Some(time_block) = self.time_block {
            cfg.time_block = time_block;
        }

        cfg.validate()?;
        Ok((cfg, self.quiet))
    }
}

fn run() -> Result<()> {
    let (cfg, quiet) = Cli::parse().into_config()?;

    let mut reporter: Box<dyn Reporter> = if quiet {
        Box::new(Silent)
    } else {
        Box::new(BarReporter::new())
    };

    let results = cfg.results.clone();
    let rows = sweep::run_sweep(
        &cfg,
        invoke::capture_stdout,
        extract::trailing_nanos,
        reporter.as_mut(),
    )?;

    println!(
        "{} rows written to {}",
        rows,
        results
            .display()
            .if_supports_color(Stream::Stdout, |path| path.bold())
    );

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
