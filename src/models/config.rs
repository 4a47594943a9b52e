//! Grading configuration: penalty schedule, realism rules, normalization.
//!
//! All knobs are explicit immutable structs passed by reference into each
//! validation/scoring call; nothing is read from ambient state. Configs are
//! plain serde types so they can be loaded from TOML files the same way the
//! rest of the deployment is configured.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Minute-denominated penalties subtracted from a proposal's base score.
///
/// `overlap` is applied per overlapping pair, `out_of_bounds` per offending
/// event, `min_gap_violation` per violation; the rest apply once per
/// classified event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltySchedule {
    pub hallucinated_event: f64,
    pub time_mismatch: f64,
    pub duplicate_event: f64,
    pub nonpositive_duration: f64,
    pub overlap: f64,
    pub out_of_bounds: f64,
    pub min_gap_violation: f64,
}

impl Default for PenaltySchedule {
    fn default() -> Self {
        Self {
            hallucinated_event: 10.0,
            time_mismatch: 10.0,
            duplicate_event: 10.0,
            nonpositive_duration: 10.0,
            overlap: 20.0,
            out_of_bounds: 10.0,
            min_gap_violation: 10.0,
        }
    }
}

/// Day-boundary and spacing constraints applied independent of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealismConfig {
    pub enforce_day_bounds: bool,
    pub day_start: String,
    pub day_end: String,
    pub allow_cross_midnight: bool,
    /// Minimum spacing between consecutive accepted events; 0 disables the check.
    pub min_gap_minutes: i32,
}

impl Default for RealismConfig {
    fn default() -> Self {
        Self {
            enforce_day_bounds: true,
            day_start: "00:00".to_string(),
            day_end: "24:00".to_string(),
            allow_cross_midnight: false,
            min_gap_minutes: 0,
        }
    }
}

/// How the raw minute score is normalized into a reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeMode {
    /// Divide by the dataset-provided optimal score when it is positive,
    /// falling back to the DP optimum otherwise.
    Dataset,
    /// Always divide by the weighted-interval-scheduling optimum.
    Dp,
    /// Return raw minutes.
    None,
}

/// Top-level grading configuration for the reward layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    pub normalize_with_optimal: NormalizeMode,
    pub strict_times: bool,
    pub clip_to_unit: bool,
    pub allow_reasoning_tag: bool,
    pub penalties: PenaltySchedule,
    pub realism: RealismConfig,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            normalize_with_optimal: NormalizeMode::Dataset,
            strict_times: true,
            clip_to_unit: true,
            allow_reasoning_tag: true,
            penalties: PenaltySchedule::default(),
            realism: RealismConfig::default(),
        }
    }
}

impl GradingConfig {
    /// Parse a grading configuration from TOML text. Missing fields fall back
    /// to the defaults above.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse grading config TOML")
    }

    /// Load a grading configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read grading config {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content)
    }
}
