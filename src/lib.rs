//! # schedgrade
//!
//! Scoring and conflict-detection engine for machine-generated day schedules.
//!
//! This crate grades proposed single-day schedules against a fixed catalog of
//! candidate events. A proposal is extracted from raw model output, every
//! event is classified against the catalog and a set of realism rules, and
//! the surviving events earn minutes that are normalized against the best
//! schedule any planner could have produced.
//!
//! ## Features
//!
//! - **Time Handling**: `"HH:MM"` wall-clock parsing on integer minutes,
//!   including a `"24:00"` day end and cross-midnight folding
//! - **Conflict Detection**: fixed-order classification of hallucinated,
//!   mismatched, duplicated, degenerate, and out-of-bounds events, plus
//!   overlap and spacing scans over the accepted intervals
//! - **Optimization**: weighted-interval-scheduling dynamic program that
//!   computes the best achievable minute total for a catalog
//! - **Scoring**: penalized minute scores and `[0, 1]` rewards suitable as a
//!   training signal
//! - **Parsing**: tolerant extraction of JSON or XML schedules from raw
//!   completions, reasoning preambles and code fences included
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: catalog/proposal types, time arithmetic, and configuration
//! - [`algorithms`]: overlap detection, conflict classification, the WIS
//!   optimizer, and the penalized scorer
//! - [`parsing`]: schedule extraction from completion text
//! - [`services`]: the reward layer tying parsing, scoring, and
//!   normalization together

pub mod algorithms;
pub mod models;
pub mod parsing;
pub mod services;

pub use algorithms::{
    check_conflicts, find_overlaps, score_with_penalties, wis_optimum, ConflictReport,
    ScoreDiagnostics, NO_ISSUES_SUMMARY,
};
pub use models::{
    Catalog, CatalogEvent, GradingConfig, Interval, NormalizeMode, PenaltySchedule, ProposalEvent,
    RealismConfig, TimeFormatError,
};
pub use parsing::parse_schedule_any;
pub use services::{compute_reward, reward_for_completion, AnswerPayload};
