//! Penalized minute scoring of a proposal.
//!
//! The scorer walks the proposal with the same first-match-wins
//! classification as the validator, but instead of collecting names it
//! accrues base minutes for accepted events and penalty minutes for
//! everything else. Unlike the validator, its day-bounds check honors
//! `enforce_day_bounds`, so the two can disagree on an out-of-window event
//! when enforcement is switched off.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::algorithms::overlap::{count_min_gap_violations, find_overlaps};
use crate::models::config::{PenaltySchedule, RealismConfig};
use crate::models::event::{Catalog, Interval, ProposalEvent};
use crate::models::time::{duration, to_minutes, TimeFormatError};

/// Per-proposal accounting behind a score, for feedback and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDiagnostics {
    /// Weighted minutes earned by accepted events before penalties.
    pub base_minutes: f64,
    /// Total penalty minutes across all categories.
    pub penalty_minutes: f64,
    /// Adjacent-pair overlap count among accepted intervals.
    pub overlaps: usize,
    /// The accepted intervals, in proposal order.
    pub intervals: Vec<Interval>,
}

/// Score a proposal: weighted accepted minutes minus penalty minutes,
/// floored at zero.
///
/// Events named in `priority_names` earn double minutes. Each proposed event
/// lands in at most one penalty category; overlap and spacing penalties are
/// then charged per offending pair among the events that were accepted.
pub fn score_with_penalties(
    proposal: &[ProposalEvent],
    catalog: &Catalog,
    priority_names: &[String],
    strict_times: bool,
    penalties: &PenaltySchedule,
    realism: &RealismConfig,
) -> Result<(f64, ScoreDiagnostics), TimeFormatError> {
    let day_start = to_minutes(&realism.day_start)?;
    let day_end = to_minutes(&realism.day_end)?;
    let priority: HashSet<&str> = priority_names.iter().map(String::as_str).collect();

    let mut base = 0.0f64;
    let mut penalty = 0.0f64;
    let mut intervals = Vec::new();
    let mut seen = HashSet::new();

    for event in proposal {
        let Some((cat_start, cat_end)) = catalog.times(&event.name) else {
            penalty += penalties.hallucinated_event;
            continue;
        };

        let (start, end) = if strict_times {
            if event.start != cat_start || event.end != cat_end {
                penalty += penalties.time_mismatch;
                continue;
            }
            (cat_start, cat_end)
        } else {
            (event.start.as_str(), event.end.as_str())
        };

        if !seen.insert(event.name.clone()) {
            penalty += penalties.duplicate_event;
            continue;
        }

        let dur = duration(start, end, realism.allow_cross_midnight)?;
        if dur <= 0 {
            penalty += penalties.nonpositive_duration;
            continue;
        }

        let start_min = to_minutes(start)?;
        let end_min = to_minutes(end)?;
        if realism.enforce_day_bounds
            && !realism.allow_cross_midnight
            && (start_min < day_start || end_min > day_end)
        {
            penalty += penalties.out_of_bounds;
            continue;
        }

        let multiplier = if priority.contains(event.name.as_str()) {
            2.0
        } else {
            1.0
        };
        base += multiplier * dur as f64;
        intervals.push(Interval::folded(
            start_min,
            end_min,
            realism.allow_cross_midnight,
        ));
    }

    let overlaps = find_overlaps(&intervals);
    penalty += overlaps.len() as f64 * penalties.overlap;

    if realism.min_gap_minutes > 0 {
        let violations = count_min_gap_violations(&intervals, realism.min_gap_minutes);
        penalty += violations as f64 * penalties.min_gap_violation;
    }

    let score = (base - penalty).max(0.0);
    let diagnostics = ScoreDiagnostics {
        base_minutes: base,
        penalty_minutes: penalty,
        overlaps: overlaps.len(),
        intervals,
    };
    Ok((score, diagnostics))
}
