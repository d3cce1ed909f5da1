//! Core data structures for station uptime reporting.
//!
//! Defines identifiers, availability intervals, the station/charger relation
//! model built by the parser, and the per-station result record.

use num_bigint::BigUint;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Station identifier (unsigned, 32-bit)
pub type StationId = u32;

/// Charger identifier (unsigned, 32-bit, unique across all stations)
pub type ChargerId = u32;

/// Time range `[start, end)` with `start < end`
///
/// Endpoints are arbitrary-precision so timestamps beyond 64 bits are kept
/// exactly. Ordering is by `(start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    start: BigUint,
    end: BigUint,
}

impl Interval {
    /// Create an interval, returning `None` unless `start < end`
    pub fn new(start: BigUint, end: BigUint) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> &BigUint {
        &self.start
    }

    pub fn end(&self) -> &BigUint {
        &self.end
    }

    /// Length of the interval (`end - start`)
    pub fn length(&self) -> BigUint {
        &self.end - &self.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Stations, their chargers, and each charger's availability reports
///
/// Built in a single pass by the parser and read-only afterwards. Stations
/// are kept in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationModel {
    stations: BTreeMap<StationId, Vec<ChargerId>>,
    all_reports: HashMap<ChargerId, Vec<Interval>>,
    up_reports: HashMap<ChargerId, Vec<Interval>>,
}

impl RelationModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station with its chargers, replacing any previous entry
    pub fn insert_station(&mut self, station_id: StationId, chargers: Vec<ChargerId>) {
        self.stations.insert(station_id, chargers);
    }

    /// Record one availability report for a charger
    ///
    /// Every report lands in the charger's all-reports list; reports flagged
    /// up are additionally kept in its up-reports list. No deduplication.
    pub fn add_report(&mut self, charger_id: ChargerId, interval: Interval, up: bool) {
        if up {
            self.up_reports
                .entry(charger_id)
                .or_default()
                .push(interval.clone());
        }
        self.all_reports.entry(charger_id).or_default().push(interval);
    }

    pub fn contains_station(&self, station_id: StationId) -> bool {
        self.stations.contains_key(&station_id)
    }

    /// Station ids in ascending order
    pub fn station_ids(&self) -> impl Iterator<Item = StationId> + '_ {
        self.stations.keys().copied()
    }

    /// Chargers declared for a station, in declaration order
    pub fn chargers_of(&self, station_id: StationId) -> Option<&[ChargerId]> {
        self.stations.get(&station_id).map(Vec::as_slice)
    }

    /// All reports for a charger (empty if it never reported)
    pub fn all_reports(&self, charger_id: ChargerId) -> &[Interval] {
        self.all_reports
            .get(&charger_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Reports flagged up for a charger (empty if none)
    pub fn up_reports(&self, charger_id: ChargerId) -> &[Interval] {
        self.up_reports
            .get(&charger_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn charger_count(&self) -> usize {
        self.stations.values().map(Vec::len).sum()
    }

    pub fn report_count(&self) -> usize {
        self.all_reports.values().map(Vec::len).sum()
    }

    pub fn up_report_count(&self) -> usize {
        self.up_reports.values().map(Vec::len).sum()
    }
}

/// Uptime result for one station
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StationUptime {
    pub station_id: StationId,
    /// Percentage in `[0, 100]`
    pub percentage: u8,
}

impl fmt::Display for StationUptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.station_id, self.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: u64, end: u64) -> Interval {
        Interval::new(BigUint::from(start), BigUint::from(end)).unwrap()
    }

    #[test]
    fn test_interval_requires_start_before_end() {
        assert!(Interval::new(BigUint::from(10u32), BigUint::from(10u32)).is_none());
        assert!(Interval::new(BigUint::from(20u32), BigUint::from(10u32)).is_none());
        assert_eq!(iv(10, 25).length(), BigUint::from(15u32));
    }

    #[test]
    fn test_interval_ordering_by_start_then_end() {
        let mut intervals = vec![iv(5, 9), iv(0, 20), iv(5, 6), iv(0, 10)];
        intervals.sort();
        assert_eq!(intervals, vec![iv(0, 10), iv(0, 20), iv(5, 6), iv(5, 9)]);
    }

    #[test]
    fn test_add_report_splits_up_and_all() {
        let mut model = RelationModel::new();
        model.insert_station(0, vec![1001, 1002]);
        model.add_report(1001, iv(0, 50), true);
        model.add_report(1001, iv(50, 100), false);
        model.add_report(1001, iv(0, 50), true);

        assert_eq!(model.all_reports(1001).len(), 3);
        assert_eq!(model.up_reports(1001).len(), 2);
        assert!(model.all_reports(1002).is_empty());
        assert!(model.up_reports(1002).is_empty());
        assert_eq!(model.report_count(), 3);
        assert_eq!(model.up_report_count(), 2);
    }

    #[test]
    fn test_station_ids_ascending() {
        let mut model = RelationModel::new();
        model.insert_station(20, vec![3]);
        model.insert_station(2, vec![1]);
        model.insert_station(10, vec![2, 4]);

        assert_eq!(model.station_ids().collect::<Vec<_>>(), vec![2, 10, 20]);
        assert_eq!(model.charger_count(), 4);
        assert_eq!(model.chargers_of(10), Some(&[2, 4][..]));
        assert_eq!(model.chargers_of(99), None);
    }

    #[test]
    fn test_station_uptime_display() {
        let uptime = StationUptime {
            station_id: 2,
            percentage: 75,
        };
        assert_eq!(uptime.to_string(), "2 75");
    }
}
