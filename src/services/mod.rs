//! High-level grading services built on the algorithm layer.

pub mod reward;

pub use reward::{compute_reward, reward_for_completion, AnswerPayload};
