//! Error handling for station uptime reporting.
//!
//! Every format violation in the input maps to one variant here. All of them
//! are fatal for the run; the binary collapses any of them into the single
//! `ERROR` output line.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Input file section, used to locate header and line errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Stations,
    Reports,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Stations => f.write_str(crate::constants::STATIONS_HEADER),
            Section::Reports => f.write_str(crate::constants::REPORTS_HEADER),
        }
    }
}

/// Kind of identifier that must be unique
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Station,
    Charger,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdKind::Station => f.write_str("station"),
            IdKind::Charger => f.write_str("charger"),
        }
    }
}

/// Numeric field being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StationId,
    ChargerId,
    StartTime,
    EndTime,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::StationId => "Station ID",
            Field::ChargerId => "Charger ID",
            Field::StartTime => "Start time",
            Field::EndTime => "End time",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum UptimeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input contains no non-blank lines")]
    EmptyInput,

    #[error("Missing {section} header")]
    MissingHeader { section: Section },

    #[error("Malformed line {line} in {section}: found {tokens} token(s)")]
    MalformedLine {
        section: Section,
        line: usize,
        tokens: usize,
    },

    #[error("Duplicate {kind} ID {id} at line {line}")]
    DuplicateId { kind: IdKind, id: u32, line: usize },

    #[error("Report at line {line} references undeclared charger {charger_id}")]
    UnknownReference { charger_id: u32, line: usize },

    #[error("Invalid interval at line {line}: start {start} is not before end {end}")]
    InvalidInterval {
        start: String,
        end: String,
        line: usize,
    },

    #[error("Invalid availability flag '{token}' at line {line}")]
    InvalidBoolean { token: String, line: usize },

    #[error("{field} '{token}' out of range at line {line}")]
    NumericRange {
        field: Field,
        token: String,
        line: usize,
    },

    #[error("{field} '{token}' is not a valid number at line {line}")]
    NumericFormat {
        field: Field,
        token: String,
        line: usize,
    },

    #[error("Station not found: {station_id}")]
    StationNotFound { station_id: u32 },
}

impl UptimeError {
    /// Create a malformed line error
    pub fn malformed_line(section: Section, line: usize, tokens: usize) -> Self {
        Self::MalformedLine {
            section,
            line,
            tokens,
        }
    }

    /// Create a numeric range error
    pub fn numeric_range(field: Field, token: impl Into<String>, line: usize) -> Self {
        Self::NumericRange {
            field,
            token: token.into(),
            line,
        }
    }

    /// Create a numeric format error
    pub fn numeric_format(field: Field, token: impl Into<String>, line: usize) -> Self {
        Self::NumericFormat {
            field,
            token: token.into(),
            line,
        }
    }

    /// Create an invalid interval error from the raw start/end tokens
    pub fn invalid_interval(start: impl Into<String>, end: impl Into<String>, line: usize) -> Self {
        Self::InvalidInterval {
            start: start.into(),
            end: end.into(),
            line,
        }
    }

    /// Physical input line the error points at, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedLine { line, .. }
            | Self::DuplicateId { line, .. }
            | Self::UnknownReference { line, .. }
            | Self::InvalidInterval { line, .. }
            | Self::InvalidBoolean { line, .. }
            | Self::NumericRange { line, .. }
            | Self::NumericFormat { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, UptimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_display_uses_header_literal() {
        assert_eq!(Section::Stations.to_string(), "[Stations]");
        assert_eq!(
            Section::Reports.to_string(),
            "[Charger Availability Reports]"
        );
    }

    #[test]
    fn test_error_messages_carry_context() {
        let error = UptimeError::numeric_range(Field::ChargerId, "4294967296", 3);
        assert_eq!(
            error.to_string(),
            "Charger ID '4294967296' out of range at line 3"
        );

        let error = UptimeError::DuplicateId {
            kind: IdKind::Station,
            id: 7,
            line: 4,
        };
        assert_eq!(error.to_string(), "Duplicate station ID 7 at line 4");
    }

    #[test]
    fn test_line_accessor() {
        assert_eq!(UptimeError::invalid_interval("20", "10", 9).line(), Some(9));
        assert_eq!(UptimeError::EmptyInput.line(), None);
        assert_eq!(
            UptimeError::MissingHeader {
                section: Section::Reports
            }
            .line(),
            None
        );
    }
}
