//! Reward computation: from raw completion text to a normalized score.
//!
//! This is the outermost layer. It owns the dataset answer payload, wires the
//! parser, scorer, and optimizer together, and turns the penalized minute
//! score into a reward according to the configured normalization mode.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::algorithms::optimization::wis_optimum;
use crate::algorithms::scoring::score_with_penalties;
use crate::models::config::{GradingConfig, NormalizeMode};
use crate::models::event::{Catalog, CatalogEvent, ProposalEvent};
use crate::models::time::TimeFormatError;
use crate::parsing::schedule::parse_schedule_any;

/// The dataset-side ground truth for one grading instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerPayload {
    /// Catalog events as `(name, start, end)` triples.
    pub events: Vec<(String, String, String)>,
    /// Names whose minutes count double.
    #[serde(default)]
    pub priority_events: Vec<String>,
    /// Precomputed optimal score, when the dataset provides one.
    #[serde(default)]
    pub optimal_score: Option<f64>,
}

impl AnswerPayload {
    /// Deserialize an answer payload from its JSON representation.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse answer payload JSON")
    }

    /// Build the lookup catalog for this instance.
    pub fn catalog(&self) -> Catalog {
        self.events
            .iter()
            .cloned()
            .map(CatalogEvent::from)
            .collect()
    }
}

/// Score a parsed proposal against an answer and normalize per the config.
///
/// Normalization divides the penalized minute score by an optimum floored at
/// 1.0: the dataset's precomputed optimum when present and positive (under
/// [`NormalizeMode::Dataset`]), otherwise the weighted-interval-scheduling
/// optimum. [`NormalizeMode::None`] returns raw minutes. With `clip_to_unit`
/// the normalized reward is clamped into `[0, 1]`.
pub fn compute_reward(
    proposal: &[ProposalEvent],
    answer: &AnswerPayload,
    cfg: &GradingConfig,
) -> Result<f64, TimeFormatError> {
    let catalog = answer.catalog();
    let (minutes, _) = score_with_penalties(
        proposal,
        &catalog,
        &answer.priority_events,
        cfg.strict_times,
        &cfg.penalties,
        &cfg.realism,
    )?;

    let mut reward = match cfg.normalize_with_optimal {
        NormalizeMode::None => minutes,
        NormalizeMode::Dataset | NormalizeMode::Dp => {
            let denominator = match (cfg.normalize_with_optimal, answer.optimal_score) {
                (NormalizeMode::Dataset, Some(optimal)) if optimal > 0.0 => optimal,
                _ => wis_optimum(&catalog, &answer.priority_events, &cfg.realism)?,
            };
            minutes / denominator.max(1.0)
        }
    };

    // Clipping applies to whatever the mode produced, raw minutes included.
    if cfg.clip_to_unit {
        reward = reward.clamp(0.0, 1.0);
    }
    Ok(reward)
}

/// Grade one raw completion against a serialized answer payload.
///
/// An unparseable completion earns 0.0 rather than an error; the answer
/// payload itself must be well-formed.
pub fn reward_for_completion(
    completion: &str,
    answer_json: &str,
    cfg: &GradingConfig,
) -> Result<f64> {
    // An unparseable completion short-circuits to 0.0 before the answer is
    // even looked at.
    let Some(proposal) = parse_schedule_any(completion, cfg.allow_reasoning_tag) else {
        log::debug!("completion did not contain a parseable schedule, reward 0");
        return Ok(0.0);
    };

    let answer = AnswerPayload::from_json(answer_json)?;
    compute_reward(&proposal, &answer, cfg).context("Failed to score parsed schedule")
}
