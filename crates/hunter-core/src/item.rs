// ScoredItem: a candidate word or suffix with its ranking score.

use serde::Serialize;

use crate::CoreError;

/// Lowest score an item may carry.
pub const MIN_ITEM_SCORE: f64 = -10.0;

/// Highest score an item may carry.
pub const MAX_ITEM_SCORE: f64 = 10.0;

/// A ranked atomic unit: a normalized name plus its score.
///
/// Items are immutable once built. The constructor trims and lower-cases the
/// name and keeps the score within [`MIN_ITEM_SCORE`, `MAX_ITEM_SCORE`]; the
/// bounded range is what keeps [`WordScorer`](crate::WordScorer) monotonic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    name: String,
    score: f64,
}

impl ScoredItem {
    /// Create a validated item.
    pub fn new(name: &str, score: f64) -> Result<Self, CoreError> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(CoreError::InvalidName(name));
        }
        if !score.is_finite() || !(MIN_ITEM_SCORE..=MAX_ITEM_SCORE).contains(&score) {
            return Err(CoreError::ScoreOutOfRange {
                name,
                score,
                min: MIN_ITEM_SCORE,
                max: MAX_ITEM_SCORE,
            });
        }
        Ok(Self { name, score })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}
