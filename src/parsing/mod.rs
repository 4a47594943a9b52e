//! Parsers for schedules embedded in raw model completions.

pub mod schedule;

pub use schedule::{parse_schedule_any, parse_schedule_json, parse_schedule_xml};
