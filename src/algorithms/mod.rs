//! Grading algorithms: overlap detection, conflict classification, the
//! weighted-interval-scheduling optimum, and penalized scoring.

pub mod conflicts;
pub mod optimization;
pub mod overlap;
pub mod scoring;

pub use conflicts::{check_conflicts, ConflictReport, NO_ISSUES_SUMMARY};
pub use optimization::wis_optimum;
pub use overlap::{count_min_gap_violations, find_overlaps, no_overlap};
pub use scoring::{score_with_penalties, ScoreDiagnostics};
