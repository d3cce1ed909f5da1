//! Shared fixtures for parser tests

use crate::source::{SourceLine, clean_lines_from_str};


/// Stations and reports from the reference report scenario
pub const REFERENCE_INPUT: &str = "\
[Stations]
0 1001 1002
1 1003
2 1004
[Charger Availability Reports]
1001 0 50000 true
1001 50000 100000 true
1002 50000 100000 true
1003 25000 75000 false
1004 0 50000 true
1004 100000 200000 true
";

/// Clean line sequence for an inline input
pub fn lines(input: &str) -> Vec<SourceLine> {
    clean_lines_from_str(input)
}

/// A valid stations section followed by the given report lines
pub fn with_reports(reports: &str) -> Vec<SourceLine> {
    lines(&format!(
        "[Stations]\n0 1001 1002\n1 1003\n[Charger Availability Reports]\n{}",
        reports
    ))
}
