//! Station Uptime Library
//!
//! Computes, for every charging station in an input file, the percentage of
//! its reporting window during which at least one of its chargers was
//! reported up.
//!
//! This library provides tools for:
//! - Reading input files into clean, non-blank lines
//! - Validating the `[Stations]` / `[Charger Availability Reports]` grammar
//!   and building the station/charger relation model
//! - Merging availability intervals with exact arbitrary-precision arithmetic
//! - Rendering the ascending `<stationId> <percentage>` report
//!
//! ```no_run
//! use station_uptime::{UptimeCalculator, parse_file};
//! use std::path::Path;
//!
//! let parsed = parse_file(Path::new("input.txt"))?;
//! for uptime in UptimeCalculator::new(&parsed.model).compute_all()? {
//!     println!("{}", uptime);
//! }
//! # Ok::<(), station_uptime::UptimeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod report;
pub mod source;
pub mod uptime;

// Re-export commonly used types
pub use error::{Result, UptimeError};
pub use models::{ChargerId, Interval, RelationModel, StationId, StationUptime};
pub use parser::{ParseResult, ParseStats, parse_file, parse_lines};
pub use uptime::UptimeCalculator;
