//! Station uptime calculation
//!
//! For each station, the uptime is the merged length of its chargers' "up"
//! reports as a percentage of the station's reporting span, the envelope
//! from the earliest report start to the latest report end across all of its
//! chargers. Gaps inside that envelope count as not-up time.

pub mod merge;

use crate::error::{Result, UptimeError};
use crate::models::{Interval, RelationModel, StationId, StationUptime};
use merge::{merged_length, reporting_span, uptime_percentage};
use num_bigint::BigUint;
use tracing::{debug, info};

/// Computes per-station uptime over a parsed relation model
#[derive(Debug, Clone, Copy)]
pub struct UptimeCalculator<'a> {
    model: &'a RelationModel,
}

impl<'a> UptimeCalculator<'a> {
    pub fn new(model: &'a RelationModel) -> Self {
        Self { model }
    }

    /// Uptime percentage of one station, in `[0, 100]`
    ///
    /// Stations without chargers, or whose chargers never reported, get 0.
    pub fn compute_uptime(&self, station_id: StationId) -> Result<u8> {
        let chargers = self
            .model
            .chargers_of(station_id)
            .ok_or(UptimeError::StationNotFound { station_id })?;

        let mut all: Vec<&Interval> = Vec::new();
        let mut up: Vec<&Interval> = Vec::new();
        for &charger_id in chargers {
            all.extend(self.model.all_reports(charger_id));
            up.extend(self.model.up_reports(charger_id));
        }

        if all.is_empty() {
            debug!("Station {} has no reports", station_id);
            return Ok(0);
        }

        let span = reporting_span(all.iter().copied());
        let available: BigUint = merged_length(up);
        let percentage = uptime_percentage(&available, &span);

        debug!(
            "Station {}: available {} of span {} -> {}%",
            station_id, available, span, percentage
        );
        Ok(percentage)
    }

    /// Uptime of every declared station, ascending by station id
    pub fn compute_all(&self) -> Result<Vec<StationUptime>> {
        let uptimes = self
            .model
            .station_ids()
            .map(|station_id| {
                self.compute_uptime(station_id)
                    .map(|percentage| StationUptime {
                        station_id,
                        percentage,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Computed uptime for {} stations", uptimes.len());
        Ok(uptimes)
    }
}
