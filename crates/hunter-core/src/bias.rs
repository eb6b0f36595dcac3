// Bias: substring-triggered score adjustment.
//
// Biases are applied outside the search engines: to raw words before they
// are ranked, and to finished combos after they are emitted.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Largest magnitude a single bias may adjust a score by.
pub const MAX_ADJUST: f64 = 2.0;

/// A score adjustment applied whenever `pattern` occurs in a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBias")]
pub struct Bias {
    pattern: String,
    adjust: f64,
}

/// Unvalidated bias as read from JSON or TOML.
#[derive(Deserialize)]
struct RawBias {
    pattern: String,
    adjust: f64,
}

impl TryFrom<RawBias> for Bias {
    type Error = CoreError;

    fn try_from(raw: RawBias) -> Result<Self, Self::Error> {
        Bias::new(raw.pattern, raw.adjust)
    }
}

impl Bias {
    /// Create a validated bias. The pattern must be non-empty and the
    /// adjustment within `[-MAX_ADJUST, MAX_ADJUST]`.
    pub fn new(pattern: impl Into<String>, adjust: f64) -> Result<Self, CoreError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(CoreError::InvalidBias {
                input: pattern,
                reason: "pattern is empty".to_string(),
            });
        }
        if !adjust.is_finite() || adjust.abs() > MAX_ADJUST {
            return Err(CoreError::InvalidBias {
                input: pattern,
                reason: format!("adjust {adjust} is outside [-{MAX_ADJUST}, {MAX_ADJUST}]"),
            });
        }
        Ok(Self { pattern, adjust })
    }

    /// Parse a bias from either `pattern,adjust` or a JSON object
    /// `{"pattern": "...", "adjust": 1.0}`. Whitespace around either half of
    /// the comma form is ignored.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        if trimmed.contains('{') {
            return serde_json::from_str(trimmed).map_err(|e| CoreError::InvalidBias {
                input: input.to_string(),
                reason: e.to_string(),
            });
        }
        let Some((pattern, adjust)) = trimmed.rsplit_once(',') else {
            return Err(CoreError::InvalidBias {
                input: input.to_string(),
                reason: "expected `pattern,adjust`".to_string(),
            });
        };
        let adjust: f64 = adjust.trim().parse().map_err(|_| CoreError::InvalidBias {
            input: input.to_string(),
            reason: format!("{:?} is not a number", adjust.trim()),
        })?;
        Self::new(pattern.trim(), adjust)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn adjust(&self) -> f64 {
        self.adjust
    }

    /// Returns `true` if the pattern occurs anywhere in `text`.
    pub fn applies_to(&self, text: &str) -> bool {
        text.contains(self.pattern.as_str())
    }
}

/// Sum of the adjustments of every bias that applies to `text`.
pub fn total_adjust(biases: &[Bias], text: &str) -> f64 {
    biases
        .iter()
        .filter(|b| b.applies_to(text))
        .map(Bias::adjust)
        .sum()
}
