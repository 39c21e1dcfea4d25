//! Time dimension derivation from epoch-millisecond timestamps

use crate::error::{CoreError, CoreResult};
use crate::rows::TimeRow;
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Convert epoch milliseconds to a UTC timestamp
pub fn to_datetime(ts_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ts_ms)
}

/// Derive the time dimension row for an event timestamp.
///
/// `start_time` keeps the raw millisecond value as text so it joins with
/// `songplays.start_time`. Weekday is numbered Monday=0 through Sunday=6.
pub fn time_row(ts_ms: i64, line: usize) -> CoreResult<TimeRow> {
    let at = to_datetime(ts_ms).ok_or(CoreError::InvalidTimestamp { line, ts: ts_ms })?;
    Ok(TimeRow {
        start_time: ts_ms.to_string(),
        hour: at.hour(),
        day: at.ordinal(),
        week: at.iso_week().week(),
        month: at.month(),
        year: at.year(),
        weekday: at.weekday().num_days_from_monday(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_row_parts() {
        // 2018-11-02 01:25:34.796 UTC, a Friday
        let row = time_row(1541121934796, 1).unwrap();
        assert_eq!(row.start_time, "1541121934796");
        assert_eq!(row.hour, 1);
        assert_eq!(row.day, 306);
        assert_eq!(row.week, 44);
        assert_eq!(row.month, 11);
        assert_eq!(row.year, 2018);
        assert_eq!(row.weekday, 4);
    }

    #[test]
    fn test_iso_week_crosses_year_boundary() {
        // 2018-12-31 12:00:00 UTC is a Monday in ISO week 1 of 2019
        let row = time_row(1546257600000, 1).unwrap();
        assert_eq!(row.day, 365);
        assert_eq!(row.week, 1);
        assert_eq!(row.year, 2018);
        assert_eq!(row.weekday, 0);
    }

    #[test]
    fn test_epoch_zero() {
        let row = time_row(0, 1).unwrap();
        assert_eq!(row.year, 1970);
        assert_eq!(row.day, 1);
        assert_eq!(row.hour, 0);
        // 1970-01-01 was a Thursday
        assert_eq!(row.weekday, 3);
    }

    #[test]
    fn test_out_of_range_timestamp() {
        let err = time_row(i64::MAX, 7).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTimestamp { line: 7, .. }));
    }
}
