//! Proposal validation against a catalog plus realism rules.
//!
//! Each proposed event is classified into at most one violation bucket, in a
//! fixed order: unknown name, time mismatch, duplicate, nonpositive duration,
//! out of day bounds. The first failing check wins and later checks are
//! skipped for that event, so a hallucinated event is never also reported as
//! a duplicate. Events that survive every check contribute an interval to the
//! overlap and spacing scans.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::algorithms::overlap::{count_min_gap_violations, find_overlaps};
use crate::models::config::RealismConfig;
use crate::models::event::{Catalog, Interval, ProposalEvent};
use crate::models::time::{duration, to_minutes, TimeFormatError};

/// Summary text for a proposal with no violations of any kind.
pub const NO_ISSUES_SUMMARY: &str = "No issues found.";

/// Everything the validator found wrong with one proposal, plus the events
/// that passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Names not present in the catalog.
    pub not_in_catalog: Vec<String>,
    /// Known names whose proposed times differ from the catalog's.
    pub time_mismatches: Vec<String>,
    /// Names already seen earlier in the proposal.
    pub duplicates: Vec<String>,
    /// Events whose duration is zero or negative.
    pub nonpositive: Vec<String>,
    /// Events outside the configured day window.
    pub out_of_bounds: Vec<String>,
    /// Adjacent-pair overlaps among the accepted intervals, in start order.
    pub overlaps: Vec<(usize, usize)>,
    /// Adjacent gaps tighter than the configured minimum.
    pub min_gap_violations: usize,
    /// The events that passed every per-event check, in proposal order.
    pub normalized: Vec<ProposalEvent>,
    /// Human-readable issue summary.
    pub summary: String,
}

impl ConflictReport {
    /// True when no check found anything to report.
    pub fn is_clean(&self) -> bool {
        self.not_in_catalog.is_empty()
            && self.time_mismatches.is_empty()
            && self.duplicates.is_empty()
            && self.nonpositive.is_empty()
            && self.out_of_bounds.is_empty()
            && self.overlaps.is_empty()
            && self.min_gap_violations == 0
    }
}

/// Validate a proposal against the catalog and realism rules.
///
/// With `strict_times` set, a known event must quote the catalog's start and
/// end strings verbatim; without it the catalog's own times are scored and
/// whatever the proposal wrote is ignored. Malformed `"HH:MM"` strings abort
/// the whole validation with a [`TimeFormatError`].
///
/// Day-bounds classification here is keyed off `allow_cross_midnight` alone:
/// a folded event can never fit inside a single day window, so the check is
/// skipped entirely when folding is on.
pub fn check_conflicts(
    proposal: &[ProposalEvent],
    catalog: &Catalog,
    strict_times: bool,
    realism: &RealismConfig,
) -> Result<ConflictReport, TimeFormatError> {
    let day_start = to_minutes(&realism.day_start)?;
    let day_end = to_minutes(&realism.day_end)?;

    let mut not_in_catalog = Vec::new();
    let mut time_mismatches = Vec::new();
    let mut duplicates = Vec::new();
    let mut nonpositive = Vec::new();
    let mut out_of_bounds = Vec::new();
    let mut normalized = Vec::new();
    let mut intervals = Vec::new();
    let mut seen = HashSet::new();

    for event in proposal {
        let Some((cat_start, cat_end)) = catalog.times(&event.name) else {
            not_in_catalog.push(event.name.clone());
            continue;
        };

        // Strict mode normalizes to the catalog's times (string-equal at this
        // point anyway); lenient mode takes the proposal at its word.
        let (start, end) = if strict_times {
            if event.start != cat_start || event.end != cat_end {
                time_mismatches.push(event.name.clone());
                continue;
            }
            (cat_start, cat_end)
        } else {
            (event.start.as_str(), event.end.as_str())
        };

        if !seen.insert(event.name.clone()) {
            duplicates.push(event.name.clone());
            continue;
        }

        if duration(start, end, realism.allow_cross_midnight)? <= 0 {
            nonpositive.push(event.name.clone());
            continue;
        }

        let start_min = to_minutes(start)?;
        let end_min = to_minutes(end)?;
        if !realism.allow_cross_midnight && (start_min < day_start || end_min > day_end) {
            out_of_bounds.push(event.name.clone());
            continue;
        }

        normalized.push(ProposalEvent::new(&event.name, start, end));
        intervals.push(Interval::folded(
            start_min,
            end_min,
            realism.allow_cross_midnight,
        ));
    }

    let overlaps = find_overlaps(&intervals);
    let min_gap_violations = if realism.min_gap_minutes > 0 {
        count_min_gap_violations(&intervals, realism.min_gap_minutes)
    } else {
        0
    };

    let mut report = ConflictReport {
        not_in_catalog,
        time_mismatches,
        duplicates,
        nonpositive,
        out_of_bounds,
        overlaps,
        min_gap_violations,
        normalized,
        summary: String::new(),
    };
    report.summary = summarize(&report);
    Ok(report)
}

/// Sorted, de-duplicated view of the names in one bucket, for stable output.
fn sorted_unique(names: &[String]) -> Vec<&str> {
    let mut unique: Vec<&str> = names.iter().map(String::as_str).collect();
    unique.sort_unstable();
    unique.dedup();
    unique
}

fn summarize(report: &ConflictReport) -> String {
    let mut bullets = Vec::new();
    if !report.not_in_catalog.is_empty() {
        bullets.push(format!(
            "- {} event(s) not in catalog: {:?}",
            report.not_in_catalog.len(),
            sorted_unique(&report.not_in_catalog)
        ));
    }
    if !report.time_mismatches.is_empty() {
        bullets.push(format!(
            "- {} time mismatch(es): {:?}",
            report.time_mismatches.len(),
            sorted_unique(&report.time_mismatches)
        ));
    }
    if !report.duplicates.is_empty() {
        bullets.push(format!(
            "- {} duplicate(s): {:?}",
            report.duplicates.len(),
            sorted_unique(&report.duplicates)
        ));
    }
    if !report.nonpositive.is_empty() {
        bullets.push(format!(
            "- {} nonpositive duration: {:?}",
            report.nonpositive.len(),
            sorted_unique(&report.nonpositive)
        ));
    }
    if !report.out_of_bounds.is_empty() {
        bullets.push(format!(
            "- {} outside day bounds: {:?}",
            report.out_of_bounds.len(),
            sorted_unique(&report.out_of_bounds)
        ));
    }
    if !report.overlaps.is_empty() {
        bullets.push(format!("- {} overlap(s) detected", report.overlaps.len()));
    }
    if report.min_gap_violations > 0 {
        bullets.push(format!(
            "- {} min-gap violation(s)",
            report.min_gap_violations
        ));
    }

    if bullets.is_empty() {
        NO_ISSUES_SUMMARY.to_string()
    } else {
        format!("Issues:\n{}", bullets.join("\n"))
    }
}
