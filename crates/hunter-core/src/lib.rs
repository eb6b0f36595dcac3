//! Shared types for domain-hunter.
//!
//! - [`item`] -- [`ScoredItem`], the atomic ranked unit fed into the engines
//! - [`combo`] -- [`Combo`] results and the [`ComboScorer`] trait
//! - [`bias`] -- substring score adjustments applied around the engines

pub mod bias;
pub mod combo;
pub mod item;

pub use bias::Bias;
pub use combo::{Combo, ComboScorer, Ranked, WordScorer};
pub use item::ScoredItem;

/// Error type for invalid items and biases.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("invalid name {0:?}: must contain at least one non-space character")]
    InvalidName(String),
    #[error("score {score} for {name:?} is outside [{min}, {max}]")]
    ScoreOutOfRange {
        name: String,
        score: f64,
        min: f64,
        max: f64,
    },
    #[error("invalid bias {input:?}: {reason}")]
    InvalidBias { input: String, reason: String },
}
