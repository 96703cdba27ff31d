//! cutout: make the near-white background of an image transparent.
//!
//! With no arguments, rewrites `public/zen-circle.png` in place.

use anyhow::Result;
use clap::Parser;
use cutout_cli::output::{format_count, format_percent, format_size, Status};
use cutout_image::remove_white_background;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

/// Replace near-white pixels with full transparency and save as PNG
#[derive(Parser)]
#[command(name = "cutout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image to process [default: public/zen-circle.png]
    input: Option<PathBuf>,

    /// Where to write the PNG (defaults to overwriting the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Channels must all be above this value to count as background [default: 220]
    #[arg(short, long)]
    threshold: Option<u8>,

    /// Path to a TOML config file
    #[arg(short, long, env = "CUTOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "cutout=debug,cutout_image=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    if let Some(ref path) = config.path {
        tracing::debug!(path = %path.display(), "Loaded config");
    }

    let invocation = config.resolve(cli.input, cli.output, cli.threshold);
    tracing::debug!(
        input = %invocation.input.display(),
        output = %invocation.output.display(),
        threshold = invocation.options.threshold,
        "Resolved invocation"
    );

    let report = remove_white_background(&invocation.input, &invocation.output, &invocation.options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        Status::success(&format!(
            "Saved transparent image to {}",
            report.output.display()
        ));
        Status::info(&format!(
            "{}x{}, {} cleared ({}), {}",
            report.width,
            report.height,
            format_count(report.cleared_pixels, "pixel", "pixels"),
            format_percent(report.cleared_ratio()),
            format_size(report.output_bytes),
        ));
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
