//! Domain model for catalogs, proposals, and minute intervals.
//!
//! A `Catalog` is the immutable ground truth for one scheduling instance: the
//! set of events a proposal is allowed to pick from. A proposal is whatever a
//! model produced, so `ProposalEvent` may carry unknown names, malformed
//! times, or duplicates; the validator and scorer classify those, the model
//! layer does not reject them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::time::fold_end;

/// A ground-truth schedulable event: name plus `"HH:MM"` start and end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEvent {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl CatalogEvent {
    pub fn new(name: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}

impl From<(String, String, String)> for CatalogEvent {
    fn from((name, start, end): (String, String, String)) -> Self {
        Self { name, start, end }
    }
}

/// The fixed catalog of candidate events for one scheduling instance.
///
/// Lookup by name is O(1) through an internal index. Duplicate names in the
/// input are resolved last-write-wins; catalogs with duplicate names are
/// undefined behavior upstream and the engine does not try to repair them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    events: Vec<CatalogEvent>,
    index: HashMap<String, (String, String)>,
}

impl Catalog {
    pub fn new(events: Vec<CatalogEvent>) -> Self {
        let mut index = HashMap::with_capacity(events.len());
        for event in &events {
            index.insert(event.name.clone(), (event.start.clone(), event.end.clone()));
        }
        Self { events, index }
    }

    /// Catalog times for a name, or `None` for an unknown event.
    pub fn times(&self, name: &str) -> Option<(&str, &str)> {
        self.index
            .get(name)
            .map(|(start, end)| (start.as_str(), end.as_str()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The events in catalog order (duplicates included, as supplied).
    pub fn events(&self) -> &[CatalogEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<CatalogEvent> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEvent>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One pick in a proposed schedule, exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalEvent {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl ProposalEvent {
    pub fn new(name: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A half-open `[start, end)` interval in minutes since midnight.
///
/// Cross-midnight spans are folded at construction (`end += 1440`) so that
/// interval comparisons stay monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Build an interval from raw minute values, folding the end past
    /// midnight when cross-midnight scheduling is allowed and the end sorts
    /// before the start.
    pub fn folded(start_min: i32, end_min: i32, allow_cross_midnight: bool) -> Self {
        Self {
            start: start_min,
            end: fold_end(start_min, end_min, allow_cross_midnight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEvent::new("Standup", "09:00", "09:15"),
            CatalogEvent::new("Review", "10:00", "11:00"),
        ])
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = sample_catalog();
        assert!(catalog.contains("Standup"));
        assert_eq!(catalog.times("Review"), Some(("10:00", "11:00")));
        assert_eq!(catalog.times("Lunch"), None);
    }

    #[test]
    fn test_catalog_duplicate_names_last_write_wins() {
        let catalog = Catalog::new(vec![
            CatalogEvent::new("A", "01:00", "02:00"),
            CatalogEvent::new("A", "03:00", "04:00"),
        ]);
        assert_eq!(catalog.times("A"), Some(("03:00", "04:00")));
        // The raw event list still carries both entries.
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_catalog_from_iterator() {
        let catalog: Catalog = sample_catalog().events().iter().cloned().collect();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.times("anything"), None);
    }

    #[test]
    fn test_interval_folded_wraps_end() {
        let wrapped = Interval::folded(1410, 30, true);
        assert_eq!(wrapped, Interval::new(1410, 1470));

        let unwrapped = Interval::folded(1410, 30, false);
        assert_eq!(unwrapped, Interval::new(1410, 30));
    }
}
