use super::TransformError;
use crate::warehouse::TimeRow;
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Decompose an epoch-millisecond timestamp into its time dimension row.
///
/// Calendar math is fixed to UTC so the decomposition is reproducible across
/// environments. `week` is the ISO week number; `weekday` is Monday = 0.
pub fn decompose_timestamp(epoch_ms: i64) -> Result<TimeRow, TransformError> {
    let dt: DateTime<Utc> = DateTime::from_timestamp_millis(epoch_ms)
        .ok_or(TransformError::UnrepresentableTimestamp(epoch_ms))?;

    Ok(TimeRow {
        start_time: epoch_ms,
        hour: dt.hour(),
        day: dt.day(),
        week: dt.iso_week().week(),
        month: dt.month(),
        year: dt.year(),
        weekday: dt.weekday().num_days_from_monday(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_fixed_timestamp() {
        // 2018-11-11T02:33:56.796Z, a Sunday in ISO week 45
        let row = decompose_timestamp(1541903636796).unwrap();
        assert_eq!(row.start_time, 1541903636796);
        assert_eq!(row.hour, 2);
        assert_eq!(row.day, 11);
        assert_eq!(row.week, 45);
        assert_eq!(row.month, 11);
        assert_eq!(row.year, 2018);
        assert_eq!(row.weekday, 6);
    }

    #[test]
    fn decomposes_epoch_origin() {
        // 1970-01-01T00:00:00Z, a Thursday in ISO week 1
        let row = decompose_timestamp(0).unwrap();
        assert_eq!(row.hour, 0);
        assert_eq!(row.day, 1);
        assert_eq!(row.week, 1);
        assert_eq!(row.month, 1);
        assert_eq!(row.year, 1970);
        assert_eq!(row.weekday, 3);
    }

    #[test]
    fn iso_week_at_year_boundary() {
        // 2019-01-01T00:00:00Z is a Tuesday in ISO week 1
        let row = decompose_timestamp(1546300800000).unwrap();
        assert_eq!(row.year, 2019);
        assert_eq!(row.week, 1);
        assert_eq!(row.weekday, 1);
    }

    #[test]
    fn is_deterministic() {
        let a = decompose_timestamp(1541106106796).unwrap();
        let b = decompose_timestamp(1541106106796).unwrap();
        assert_eq!(a, b);
    }
}
