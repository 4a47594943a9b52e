//! Weighted interval scheduling over the catalog.
//!
//! The optimizer answers one question: what is the best minute total any
//! non-overlapping schedule drawn from the catalog could achieve? The reward
//! layer divides achieved minutes by this optimum, so it doubles as the
//! normalization denominator.

use std::collections::HashSet;

use crate::models::config::RealismConfig;
use crate::models::event::Catalog;
use crate::models::time::{to_minutes, TimeFormatError};

struct WisItem {
    start: i32,
    end: i32,
    weight: f64,
}

/// Best achievable weighted-minute total over the catalog.
///
/// Events named in `priority_names` count double; every other event's weight
/// is its duration. Events with nonpositive duration are skipped, and when
/// day bounds are enforced (and cross-midnight folding is off) events outside
/// the day window are excluded from consideration entirely.
///
/// The result is floored at 1.0 so it is always safe as a division
/// denominator, even for an empty or fully out-of-bounds catalog.
pub fn wis_optimum(
    catalog: &Catalog,
    priority_names: &[String],
    realism: &RealismConfig,
) -> Result<f64, TimeFormatError> {
    let day_start = to_minutes(&realism.day_start)?;
    let day_end = to_minutes(&realism.day_end)?;
    let priority: HashSet<&str> = priority_names.iter().map(String::as_str).collect();

    let mut items = Vec::with_capacity(catalog.len());
    for event in catalog.events() {
        let start = to_minutes(&event.start)?;
        let mut end = to_minutes(&event.end)?;
        if realism.allow_cross_midnight && end < start {
            end += crate::models::time::MINUTES_PER_DAY;
        }

        let dur = end - start;
        if dur <= 0 {
            continue;
        }
        if realism.enforce_day_bounds
            && !realism.allow_cross_midnight
            && (start < day_start || end > day_end)
        {
            continue;
        }

        let multiplier = if priority.contains(event.name.as_str()) {
            2.0
        } else {
            1.0
        };
        items.push(WisItem {
            start,
            end,
            weight: multiplier * dur as f64,
        });
    }

    if items.is_empty() {
        return Ok(1.0);
    }

    items.sort_by_key(|item| item.end);
    let ends: Vec<i32> = items.iter().map(|item| item.end).collect();

    // m[j] = best total over the first j items (by end time).
    let mut m = vec![0.0f64; items.len() + 1];
    for (j, item) in items.iter().enumerate() {
        let take = item.weight
            + match rightmost_compatible(&ends, item.start) {
                Some(p) => m[p + 1],
                None => 0.0,
            };
        m[j + 1] = m[j].max(take);
    }

    Ok(m[items.len()].max(1.0))
}

/// Index of the last item whose end fits at or before `start`, if any.
///
/// `ends` is sorted ascending; intervals are half-open, so an item ending
/// exactly at `start` is compatible.
fn rightmost_compatible(ends: &[i32], start: i32) -> Option<usize> {
    let mut lo = 0usize;
    let mut hi = ends.len();
    while lo < hi {
        let mid = (lo + hi) / 2;
        if ends[mid] <= start {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::CatalogEvent;

    fn catalog(entries: &[(&str, &str, &str)]) -> Catalog {
        entries
            .iter()
            .map(|&(n, s, e)| CatalogEvent::new(n, s, e))
            .collect()
    }

    #[test]
    fn test_empty_catalog_floors_at_one() {
        let optimum = wis_optimum(&Catalog::default(), &[], &RealismConfig::default()).unwrap();
        assert_eq!(optimum, 1.0);
    }

    #[test]
    fn test_single_event() {
        let catalog = catalog(&[("A", "09:00", "10:30")]);
        let optimum = wis_optimum(&catalog, &[], &RealismConfig::default()).unwrap();
        assert_eq!(optimum, 90.0);
    }

    #[test]
    fn test_picks_pair_over_large_single() {
        // A (120 min) overlaps both B and C (90 min each); B and C together
        // beat A.
        let catalog = catalog(&[
            ("A", "09:00", "11:00"),
            ("B", "08:00", "09:30"),
            ("C", "09:30", "11:00"),
        ]);
        let optimum = wis_optimum(&catalog, &[], &RealismConfig::default()).unwrap();
        assert_eq!(optimum, 180.0);
    }

    #[test]
    fn test_disjoint_catalog_sums_all_durations() {
        let catalog = catalog(&[("A", "01:00", "02:00"), ("B", "02:00", "04:00")]);
        let optimum = wis_optimum(&catalog, &[], &RealismConfig::default()).unwrap();
        assert_eq!(optimum, 180.0);
    }

    #[test]
    fn test_priority_event_dominates_overlapping_rival() {
        // A alone is worth 2 * 120; taking B instead would only yield 120.
        let catalog = catalog(&[("A", "01:00", "03:00"), ("B", "02:00", "04:00")]);
        let optimum =
            wis_optimum(&catalog, &["A".to_string()], &RealismConfig::default()).unwrap();
        assert_eq!(optimum, 240.0);
    }

    #[test]
    fn test_touching_events_are_compatible() {
        let catalog = catalog(&[("A", "09:00", "10:00"), ("B", "10:00", "11:00")]);
        let optimum = wis_optimum(&catalog, &[], &RealismConfig::default()).unwrap();
        assert_eq!(optimum, 120.0);
    }

    #[test]
    fn test_priority_doubles_weight() {
        // Plain weights: A=60, B=90, so B wins. Doubling A flips the choice.
        let catalog = catalog(&[("A", "09:00", "10:00"), ("B", "09:30", "11:00")]);
        let plain = wis_optimum(&catalog, &[], &RealismConfig::default()).unwrap();
        assert_eq!(plain, 90.0);

        let boosted =
            wis_optimum(&catalog, &["A".to_string()], &RealismConfig::default()).unwrap();
        assert_eq!(boosted, 120.0);
    }

    #[test]
    fn test_skips_nonpositive_durations() {
        let catalog = catalog(&[("Zero", "10:00", "10:00"), ("Real", "11:00", "12:00")]);
        let optimum = wis_optimum(&catalog, &[], &RealismConfig::default()).unwrap();
        assert_eq!(optimum, 60.0);
    }

    #[test]
    fn test_bounds_exclude_events_when_enforced() {
        let realism = RealismConfig {
            day_start: "08:00".to_string(),
            day_end: "18:00".to_string(),
            ..RealismConfig::default()
        };
        let catalog = catalog(&[("Early", "05:00", "07:00"), ("Ok", "09:00", "10:00")]);
        let optimum = wis_optimum(&catalog, &[], &realism).unwrap();
        assert_eq!(optimum, 60.0);
    }

    #[test]
    fn test_bounds_ignored_when_not_enforced() {
        let realism = RealismConfig {
            enforce_day_bounds: false,
            day_start: "08:00".to_string(),
            day_end: "18:00".to_string(),
            ..RealismConfig::default()
        };
        let catalog = catalog(&[("Early", "05:00", "07:00"), ("Ok", "09:00", "10:00")]);
        let optimum = wis_optimum(&catalog, &[], &realism).unwrap();
        assert_eq!(optimum, 180.0);
    }

    #[test]
    fn test_cross_midnight_event_folds() {
        let realism = RealismConfig {
            allow_cross_midnight: true,
            ..RealismConfig::default()
        };
        let catalog = catalog(&[("Night", "23:00", "01:00")]);
        let optimum = wis_optimum(&catalog, &[], &realism).unwrap();
        assert_eq!(optimum, 120.0);
    }

    #[test]
    fn test_all_overlapping_picks_best() {
        let catalog = catalog(&[
            ("A", "09:00", "10:00"),
            ("B", "09:15", "10:15"),
            ("C", "09:00", "11:00"),
        ]);
        let optimum = wis_optimum(&catalog, &[], &RealismConfig::default()).unwrap();
        assert_eq!(optimum, 120.0);
    }

    #[test]
    fn test_chain_accumulates() {
        let catalog = catalog(&[
            ("A", "08:00", "09:00"),
            ("B", "09:00", "10:00"),
            ("C", "10:00", "11:00"),
            ("D", "11:00", "12:00"),
        ]);
        let optimum = wis_optimum(&catalog, &[], &RealismConfig::default()).unwrap();
        assert_eq!(optimum, 240.0);
    }

    #[test]
    fn test_malformed_catalog_time_propagates() {
        let catalog = catalog(&[("Broken", "morning", "10:00")]);
        let result = wis_optimum(&catalog, &[], &RealismConfig::default());
        assert!(matches!(result, Err(TimeFormatError::FieldCount(_))));
    }
}
