//! Logging configuration derived from the environment.
//!
//! The command line carries only the input path, so diagnostics are tuned
//! through `RUST_LOG` (level) and `STATION_UPTIME_LOG_DIR` (log file).

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_DIR_ENV, LOG_TARGET};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Where to log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Directory for a timestamped log file; stderr when `None`
    pub log_dir: Option<PathBuf>,
}

impl LoggingConfig {
    /// Read the log directory from `STATION_UPTIME_LOG_DIR`
    pub fn from_env() -> Self {
        Self::from_log_dir_var(env::var_os(LOG_DIR_ENV))
    }

    fn from_log_dir_var(value: Option<OsString>) -> Self {
        match value.filter(|dir| !dir.is_empty()) {
            Some(dir) => Self::default().with_log_dir(dir),
            None => Self::default(),
        }
    }

    /// Send diagnostics to a log file in `dir`
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        format!("{}={}", LOG_TARGET, DEFAULT_LOG_LEVEL)
    }
}
