//! Core data model: wall-clock arithmetic, catalog/proposal types, and
//! grading configuration.

pub mod config;
pub mod event;
pub mod time;

pub use config::{GradingConfig, NormalizeMode, PenaltySchedule, RealismConfig};
pub use event::{Catalog, CatalogEvent, Interval, ProposalEvent};
pub use time::{duration, fold_end, format_minutes, to_minutes, TimeFormatError, MINUTES_PER_DAY};
