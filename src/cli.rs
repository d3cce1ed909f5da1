//! Command-line interface components.

use crate::config::LoggingConfig;
use crate::constants::{LOG_FILE_PREFIX, LOG_FILE_TIMESTAMP_FORMAT};
use crate::models::StationUptime;
use crate::parser::parse_file;
use crate::uptime::UptimeCalculator;
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};

const PROGRAM_NAME: &str = "station-uptime";

#[derive(Parser, Debug, Clone)]
#[command(name = PROGRAM_NAME)]
#[command(about = "Compute per-station charger uptime from an availability report file")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Input file with [Stations] and [Charger Availability Reports] sections
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub input: PathBuf,
}

impl Args {
    /// Build from the process arguments, program name excluded
    ///
    /// Exactly one argument is accepted. It is always taken as the input
    /// path, even when it looks like a flag (`-in.txt`, `--help`, `--`).
    pub fn from_raw<I, T>(raw: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = raw.into_iter().map(Into::into).collect();
        let [input] = raw.as_slice() else {
            return Err(Self::command().error(
                ErrorKind::WrongNumberOfValues,
                format!("expected exactly one input path, got {} arguments", raw.len()),
            ));
        };

        // Everything after `--` is positional
        Self::try_parse_from([
            OsString::from(PROGRAM_NAME),
            OsString::from("--"),
            input.clone(),
        ])
    }
}

/// Parse the input file and compute uptime for every station
pub fn run(args: &Args) -> Result<Vec<StationUptime>> {
    debug!("Arguments: {:?}", args);

    let parsed = parse_file(&args.input)
        .with_context(|| format!("Failed to parse input file {}", args.input.display()))?;

    let uptimes = UptimeCalculator::new(&parsed.model)
        .compute_all()
        .context("Failed to compute station uptime")?;

    info!("Report ready: {} stations", uptimes.len());
    Ok(uptimes)
}

/// Set up structured logging
///
/// `RUST_LOG` overrides the default level. Diagnostics never go to
/// stdout. If the log file cannot be created, logging falls back to stderr.
pub fn setup_logging(config: &LoggingConfig) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let log_file = config.log_dir.as_deref().map(open_log_file);

    match log_file {
        Some(Ok((file, path))) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_level(true)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
            debug!("Logging to {}", path.display());
        }
        fallback => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_level(true)
                        .with_timer(fmt::time::uptime())
                        .with_writer(std::io::stderr),
                )
                .init();
            if let Some(Err(error)) = fallback {
                warn!("Could not open log file, logging to stderr: {:#}", error);
            }
        }
    }

    debug!("Logging initialized");
}

/// Create `<dir>/station-uptime_<timestamp>.log`, creating `dir` if needed
fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(log_file_name(chrono::Local::now()));
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Ok((file, path))
}

fn log_file_name<Tz>(now: chrono::DateTime<Tz>) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}_{}.log",
        LOG_FILE_PREFIX,
        now.format(LOG_FILE_TIMESTAMP_FORMAT)
    )
}
