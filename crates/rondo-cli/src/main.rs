use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
    str::FromStr,
};

use anyhow::{Context, Result};
use clap::Parser;
use rondo_core::{DetectionFrame, DrillSettings};
use rondo_tracker::{DrillTracker, MarkerSource};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;

#[derive(Debug, Parser)]
#[command(name = "rondo-cli")]
struct Args {
    /// Recorded detection frames, one JSON object per line.
    #[clap(long, short)]
    input: PathBuf,

    #[clap(long, short = 'f', default_value = "rondo-settings.json")]
    settings_file: PathBuf,

    #[clap(long, default_value = "info")]
    log_level: String,

    #[clap(long, default_value = "auto")]
    log_file: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up log file
    let log_file_path = if args.log_file != "auto" {
        let path = PathBuf::from(args.log_file.clone());
        if path.exists() {
            eprintln!("Log file already exists: {}", path.display());
            std::process::exit(1);
        }
        path
    } else {
        let time = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
        let filename = format!("rondo-{time}.log");
        let path = dirs::data_local_dir()
            .map(|p| p.join("rondo").join(&filename))
            .unwrap_or_else(|| PathBuf::from(&filename));
        let dir = path.parent().unwrap();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
        path
    };

    // Create log file appender
    let appender = tracing_appender::rolling::never(
        log_file_path.parent().unwrap(),
        log_file_path.file_name().unwrap(),
    );
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);

    // Set up tracing
    let log_level = match tracing::Level::from_str(&args.log_level) {
        Ok(level) => level,
        Err(_) => {
            eprintln!("Invalid log level: {}", args.log_level);
            std::process::exit(1);
        }
    };
    let stdout_layer = fmt::Subscriber::builder()
        .with_max_level(log_level)
        .without_time()
        .finish();
    let logfile_layer = fmt::Layer::default()
        .json()
        .with_ansi(false)
        .with_writer(non_blocking_appender);
    tracing::subscriber::set_global_default(stdout_layer.with(logfile_layer))
        .expect("Unable to set global tracing subscriber");

    tracing::info!("Saving logs to {}", log_file_path.display());

    let settings = DrillSettings::load_or_insert(&args.settings_file);
    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open input file: {}", args.input.display()))?;

    let mut tracker = DrillTracker::new(&settings);
    let mut last = tracker.summary();
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line.context("Failed to read input line")?;
        if line.trim().is_empty() {
            continue;
        }
        let frame: DetectionFrame = match serde_json::from_str(&line) {
            Ok(frame) => frame,
            Err(err) => {
                tracing::warn!("Skipping malformed frame on line {}: {}", line_no + 1, err);
                continue;
            }
        };

        let report = tracker.update(&frame);
        if report.marker_source == MarkerSource::Default {
            tracing::debug!("Frame {} is using the default markers", report.frame_index);
        }
        if report.hits > last.hits {
            tracing::info!("Hit on frame {} ({} total)", report.frame_index, report.hits);
        }
        if report.misses > last.misses {
            tracing::info!(
                "Miss on frame {} ({} total)",
                report.frame_index,
                report.misses
            );
        }
        last = tracker.summary();
    }

    let summary = tracker.summary();
    tracing::info!("Processed {} frames", summary.frames_processed);
    println!("Ball hits: {}", summary.hits);
    println!("Ball misses: {}", summary.misses);

    Ok(())
}
