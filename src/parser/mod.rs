//! Input validation and structuring
//!
//! Consumes the clean line sequence of an input file, enforces the grammar
//! and identifier invariants, and builds the [`RelationModel`]. The first
//! violated rule aborts the parse; no partially built model escapes.
//!
//! Grammar (after blank lines are dropped):
//!
//! ```text
//! [Stations]
//! <stationId> <chargerId> [<chargerId> ...]
//! [Charger Availability Reports]
//! <chargerId> <start> <end> <true|false>
//! ```

pub mod fields;

#[cfg(test)]
pub mod tests;

use crate::constants::{
    MIN_STATION_LINE_TOKENS, REPORT_LINE_TOKENS, REPORTS_HEADER, STATIONS_HEADER,
};
use crate::error::{Field, IdKind, Result, Section, UptimeError};
use crate::models::{ChargerId, Interval, RelationModel};
use crate::source::{SourceLine, read_clean_lines};
use fields::{parse_availability, parse_identifier, parse_timestamp};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, trace};

/// Parsing result with the relation model and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub model: RelationModel,
    pub stats: ParseStats,
}

/// Counts gathered while parsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Non-blank lines consumed, headers included
    pub lines: usize,
    pub stations: usize,
    pub chargers: usize,
    pub reports: usize,
    pub up_reports: usize,
}

/// Read and parse an input file
pub fn parse_file(path: &Path) -> Result<ParseResult> {
    let lines = read_clean_lines(path)?;
    let result = parse_lines(&lines)?;

    info!(
        "Parsed {}: {} stations, {} chargers, {} reports ({} up)",
        path.display(),
        result.stats.stations,
        result.stats.chargers,
        result.stats.reports,
        result.stats.up_reports
    );

    Ok(result)
}

/// Parse a clean line sequence into a relation model
pub fn parse_lines(lines: &[SourceLine]) -> Result<ParseResult> {
    let (header, rest) = lines.split_first().ok_or(UptimeError::EmptyInput)?;
    if header.text != STATIONS_HEADER {
        return Err(UptimeError::MissingHeader {
            section: Section::Stations,
        });
    }

    let mut context = ParseContext::default();
    let mut remaining = rest.iter();

    loop {
        match remaining.next() {
            None => {
                return Err(UptimeError::MissingHeader {
                    section: Section::Reports,
                });
            }
            Some(line) if line.text == REPORTS_HEADER => break,
            Some(line) => context.station_line(line)?,
        }
    }
    debug!(
        "Stations section complete: {} stations",
        context.model.station_count()
    );

    for line in remaining {
        context.report_line(line)?;
    }
    debug!("Reports section complete: {} reports", context.stats.reports);

    context.stats.lines = lines.len();
    Ok(context.finish())
}

/// Validation state owned by a single parse call
#[derive(Debug, Default)]
struct ParseContext {
    model: RelationModel,
    known_chargers: HashSet<ChargerId>,
    stats: ParseStats,
}

impl ParseContext {
    /// `<stationId> <chargerId>+`
    fn station_line(&mut self, line: &SourceLine) -> Result<()> {
        let tokens = line.tokens();
        if tokens.len() < MIN_STATION_LINE_TOKENS {
            return Err(UptimeError::malformed_line(
                Section::Stations,
                line.number,
                tokens.len(),
            ));
        }

        let station_id = parse_identifier(tokens[0], Field::StationId, line.number)?;
        if self.model.contains_station(station_id) {
            return Err(UptimeError::DuplicateId {
                kind: IdKind::Station,
                id: station_id,
                line: line.number,
            });
        }

        let mut chargers = Vec::with_capacity(tokens.len() - 1);
        for token in &tokens[1..] {
            let charger_id = parse_identifier(token, Field::ChargerId, line.number)?;
            if !self.known_chargers.insert(charger_id) {
                return Err(UptimeError::DuplicateId {
                    kind: IdKind::Charger,
                    id: charger_id,
                    line: line.number,
                });
            }
            chargers.push(charger_id);
        }

        trace!("Station {} declares chargers {:?}", station_id, chargers);
        self.stats.stations += 1;
        self.stats.chargers += chargers.len();
        self.model.insert_station(station_id, chargers);
        Ok(())
    }

    /// `<chargerId> <start> <end> <true|false>`
    fn report_line(&mut self, line: &SourceLine) -> Result<()> {
        let tokens = line.tokens();
        if tokens.len() != REPORT_LINE_TOKENS {
            return Err(UptimeError::malformed_line(
                Section::Reports,
                line.number,
                tokens.len(),
            ));
        }
        let (charger, start, end, flag) = (tokens[0], tokens[1], tokens[2], tokens[3]);

        let charger_id = parse_identifier(charger, Field::ChargerId, line.number)?;
        if !self.known_chargers.contains(&charger_id) {
            return Err(UptimeError::UnknownReference {
                charger_id,
                line: line.number,
            });
        }

        let start_time = parse_timestamp(start, Field::StartTime, line.number)?;
        let end_time = parse_timestamp(end, Field::EndTime, line.number)?;
        let interval = Interval::new(start_time, end_time)
            .ok_or_else(|| UptimeError::invalid_interval(start, end, line.number))?;

        let up = parse_availability(flag, line.number)?;

        trace!(
            "Charger {} reported {} over {}",
            charger_id,
            if up { "up" } else { "down" },
            interval
        );
        self.stats.reports += 1;
        if up {
            self.stats.up_reports += 1;
        }
        self.model.add_report(charger_id, interval, up);
        Ok(())
    }

    fn finish(self) -> ParseResult {
        ParseResult {
            model: self.model,
            stats: self.stats,
        }
    }
}
