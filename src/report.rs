//! Report output
//!
//! Renders `<stationId> <percentage>` lines in ascending station order, or
//! the single failure marker. The whole report is rendered before anything
//! is written so a failing run never leaves partial lines behind.

use crate::constants::FAILURE_MARKER;
use crate::models::StationUptime;
use std::io::{self, Write};

/// Render report lines, one per station, newline-terminated
pub fn render_report(uptimes: &[StationUptime]) -> String {
    let mut sorted = uptimes.to_vec();
    sorted.sort_unstable_by_key(|uptime| uptime.station_id);

    sorted
        .iter()
        .map(|uptime| format!("{}\n", uptime))
        .collect()
}

/// Write the full report in one call
pub fn write_report<W: Write>(writer: &mut W, uptimes: &[StationUptime]) -> io::Result<()> {
    writer.write_all(render_report(uptimes).as_bytes())?;
    writer.flush()
}

/// Write the failure marker line
pub fn write_failure<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", FAILURE_MARKER)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uptime(station_id: u32, percentage: u8) -> StationUptime {
        StationUptime {
            station_id,
            percentage,
        }
    }

    #[test]
    fn test_render_report_ascending() {
        let rendered = render_report(&[uptime(2, 75), uptime(0, 100), uptime(1, 0)]);
        assert_eq!(rendered, "0 100\n1 0\n2 75\n");
    }

    #[test]
    fn test_render_report_empty() {
        assert_eq!(render_report(&[]), "");
    }

    #[test]
    fn test_large_station_ids_sort_numerically() {
        let rendered = render_report(&[uptime(10, 1), uptime(9, 2), uptime(u32::MAX, 3)]);
        assert_eq!(rendered, "9 2\n10 1\n4294967295 3\n");
    }

    #[test]
    fn test_write_report_and_failure() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &[uptime(99, 33)]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "99 33\n");

        let mut buffer = Vec::new();
        write_failure(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "ERROR\n");
    }
}
