//! Application constants for the station uptime reporter
//!
//! Section headers, numeric bounds, and output literals shared between the
//! parser, the calculator and the report sink.

// =============================================================================
// Input File Format
// =============================================================================

/// Header that must open the input file
pub const STATIONS_HEADER: &str = "[Stations]";

/// Header separating station declarations from availability reports
pub const REPORTS_HEADER: &str = "[Charger Availability Reports]";

/// Number of whitespace-separated tokens on a report line
pub const REPORT_LINE_TOKENS: usize = 4;

/// Minimum tokens on a station line (station id plus one charger id)
pub const MIN_STATION_LINE_TOKENS: usize = 2;

/// Largest accepted station or charger identifier (2^32 - 1)
pub const MAX_IDENTIFIER: i64 = u32::MAX as i64;

/// Availability flag literals (compared after lowercasing)
pub mod availability {
    pub const UP: &str = "true";
    pub const DOWN: &str = "false";
}

// =============================================================================
// Uptime Calculation
// =============================================================================

/// Scale applied to the available/span ratio
pub const PERCENT_SCALE: u32 = 100;

/// Upper bound of a reported percentage
pub const MAX_PERCENTAGE: u8 = 100;

// =============================================================================
// Output and Logging
// =============================================================================

/// Sole stdout line emitted when the run fails for any reason
pub const FAILURE_MARKER: &str = "ERROR";

/// Log filter target for this crate
pub const LOG_TARGET: &str = "station_uptime";

/// Level applied to [`LOG_TARGET`] when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable naming a directory for the log file
pub const LOG_DIR_ENV: &str = "STATION_UPTIME_LOG_DIR";

/// Log file name prefix
pub const LOG_FILE_PREFIX: &str = "station-uptime";

/// chrono format for the log file timestamp
pub const LOG_FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
