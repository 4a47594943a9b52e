//! Wall-clock time arithmetic on minutes-of-day.
//!
//! Catalog and proposal events carry `"HH:MM"` wall-clock strings. All
//! scoring arithmetic happens on integer minutes since midnight; a day end of
//! `"24:00"` (1440 minutes) is legal, which is why these helpers parse by
//! hand instead of going through a calendar type.

use thiserror::Error;

/// Minutes in one day; also the fold applied to cross-midnight interval ends.
pub const MINUTES_PER_DAY: i32 = 1440;

/// Error raised when a wall-clock string is not a valid `"HH:MM"` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    /// The string did not contain exactly two `:`-separated fields.
    #[error("invalid wall-clock time '{0}': expected 'HH:MM'")]
    FieldCount(String),
    /// A field was present but not an integer.
    #[error("invalid wall-clock time '{0}': non-numeric field")]
    NonNumeric(String),
}

/// Parse an `"HH:MM"` string into minutes since midnight.
///
/// # Examples
///
/// ```
/// use schedgrade::models::time::to_minutes;
///
/// assert_eq!(to_minutes("09:30").unwrap(), 570);
/// assert_eq!(to_minutes("24:00").unwrap(), 1440);
/// assert!(to_minutes("9h30").is_err());
/// ```
pub fn to_minutes(t: &str) -> Result<i32, TimeFormatError> {
    let mut fields = t.split(':');
    let (Some(hours), Some(minutes), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(TimeFormatError::FieldCount(t.to_string()));
    };
    let hours: i32 = hours
        .trim()
        .parse()
        .map_err(|_| TimeFormatError::NonNumeric(t.to_string()))?;
    let minutes: i32 = minutes
        .trim()
        .parse()
        .map_err(|_| TimeFormatError::NonNumeric(t.to_string()))?;
    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as a zero-padded `"HH:MM"` string.
///
/// Used for diagnostics and feedback text only; scoring never round-trips
/// through this.
pub fn format_minutes(x: i32) -> String {
    format!("{:02}:{:02}", x / 60, x % 60)
}

/// Duration in minutes between two wall-clock strings.
///
/// With `allow_cross_midnight` the end is folded past midnight when it sorts
/// before the start, so `23:30 -> 00:30` is 60 minutes. Without it, negative
/// spans clamp to 0.
pub fn duration(start: &str, end: &str, allow_cross_midnight: bool) -> Result<i32, TimeFormatError> {
    let start_min = to_minutes(start)?;
    let end_min = to_minutes(end)?;
    if allow_cross_midnight && end_min < start_min {
        Ok(end_min + MINUTES_PER_DAY - start_min)
    } else {
        Ok((end_min - start_min).max(0))
    }
}

/// Fold a wrapped interval end past midnight so comparisons stay monotonic.
pub fn fold_end(start_min: i32, end_min: i32, allow_cross_midnight: bool) -> i32 {
    if allow_cross_midnight && end_min < start_min {
        end_min + MINUTES_PER_DAY
    } else {
        end_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_minutes_basic() {
        assert_eq!(to_minutes("00:00").unwrap(), 0);
        assert_eq!(to_minutes("01:00").unwrap(), 60);
        assert_eq!(to_minutes("13:45").unwrap(), 825);
        assert_eq!(to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_to_minutes_end_of_day() {
        // "24:00" is the default day_end and must parse.
        assert_eq!(to_minutes("24:00").unwrap(), MINUTES_PER_DAY);
    }

    #[test]
    fn test_to_minutes_rejects_wrong_field_count() {
        assert_eq!(
            to_minutes("12"),
            Err(TimeFormatError::FieldCount("12".to_string()))
        );
        assert_eq!(
            to_minutes("12:00:00"),
            Err(TimeFormatError::FieldCount("12:00:00".to_string()))
        );
    }

    #[test]
    fn test_to_minutes_rejects_non_numeric() {
        assert_eq!(
            to_minutes("ab:cd"),
            Err(TimeFormatError::NonNumeric("ab:cd".to_string()))
        );
        assert_eq!(
            to_minutes("12:xx"),
            Err(TimeFormatError::NonNumeric("12:xx".to_string()))
        );
    }

    #[test]
    fn test_format_minutes_zero_padded() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(570), "09:30");
        assert_eq!(format_minutes(1439), "23:59");
        assert_eq!(format_minutes(MINUTES_PER_DAY), "24:00");
    }

    #[test]
    fn test_duration_same_day() {
        assert_eq!(duration("01:00", "02:30", false).unwrap(), 90);
        assert_eq!(duration("01:00", "02:30", true).unwrap(), 90);
    }

    #[test]
    fn test_duration_cross_midnight_enabled() {
        assert_eq!(duration("23:30", "00:30", true).unwrap(), 60);
    }

    #[test]
    fn test_duration_cross_midnight_disabled_clamps() {
        assert_eq!(duration("23:30", "00:30", false).unwrap(), 0);
        assert_eq!(duration("10:00", "09:00", false).unwrap(), 0);
    }

    #[test]
    fn test_fold_end_only_when_wrapped() {
        assert_eq!(fold_end(1410, 30, true), 30 + MINUTES_PER_DAY);
        assert_eq!(fold_end(1410, 30, false), 30);
        assert_eq!(fold_end(60, 120, true), 120);
    }

    proptest! {
        #[test]
        fn prop_format_parse_roundtrip(m in 0i32..=1440) {
            prop_assert_eq!(to_minutes(&format_minutes(m)).unwrap(), m);
        }

        #[test]
        fn prop_duration_never_negative(s in 0i32..1440, e in 0i32..1440, wrap: bool) {
            let d = duration(&format_minutes(s), &format_minutes(e), wrap).unwrap();
            prop_assert!(d >= 0);
        }

        #[test]
        fn prop_cross_midnight_duration_under_a_day(s in 0i32..1440, e in 0i32..1440) {
            let d = duration(&format_minutes(s), &format_minutes(e), true).unwrap();
            prop_assert!(d < MINUTES_PER_DAY);
        }
    }
}
