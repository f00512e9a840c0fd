//! multihead - terminal host for the dual-playhead step sequencer
//!
//! Run with: cargo run -- [--bpm-a <bpm>] [--bpm-b <bpm>] [--verbose]
//!
//! CV comes out of the first two channels of the default output device,
//! 10 V = digital full scale. Use a DC-coupled interface to patch it into
//! real hardware.

mod app;
mod ui;

use std::fs::File;

use app::Multihead;
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};

/// Command-line options; anything left `None` keeps the builder default.
#[derive(Debug, Default)]
struct Args {
    bpm_a: Option<f64>,
    bpm_b: Option<f64>,
    verbose: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> EyreResult<Args> {
    let mut parsed = Args::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--bpm-a" => parsed.bpm_a = Some(parse_bpm(&arg, iter.next())?),
            "--bpm-b" => parsed.bpm_b = Some(parse_bpm(&arg, iter.next())?),
            "--verbose" | "-v" => parsed.verbose = true,
            other => return Err(eyre!("unknown argument: {other}")),
        }
    }

    Ok(parsed)
}

fn parse_bpm(flag: &str, value: Option<String>) -> EyreResult<f64> {
    let value = value.ok_or_else(|| eyre!("{flag} needs a value"))?;
    let bpm: f64 = value
        .parse()
        .wrap_err_with(|| format!("{flag}: not a number: {value}"))?;

    if bpm.is_nan() || bpm <= 0.0 {
        return Err(eyre!("{flag}: tempo must be positive, got {bpm}"));
    }
    Ok(bpm)
}

/// Log to a file: the terminal belongs to the UI.
fn init_logging(verbose: bool) -> EyreResult<()> {
    use simplelog::{Config, LevelFilter, WriteLogger};

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let path = std::env::temp_dir().join("multihead.log");
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), file).wrap_err("failed to initialize logger")?;

    log::info!("multihead starting (log level: {:?})", level);
    Ok(())
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;

    let args = parse_args(std::env::args().skip(1))?;
    init_logging(args.verbose)?;

    let mut app = Multihead::new();
    if let Some(bpm) = args.bpm_a {
        app = app.clock_bpm(0, bpm);
    }
    if let Some(bpm) = args.bpm_b {
        app = app.clock_bpm(1, bpm);
    }

    app.run()
}
