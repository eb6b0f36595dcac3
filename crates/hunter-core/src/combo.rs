// Combo: a composite name built from ranked parts, plus the scoring seam.

use serde::Serialize;

use crate::item::ScoredItem;

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Computes the score of a sequence of parts.
///
/// Implementations used with the search engines must be monotonic: appending
/// a part, or replacing a part with a lower-scored one, never raises the
/// score. The engines rely on this to emit in non-increasing order.
pub trait ComboScorer {
    fn score(&self, parts: &[ScoredItem]) -> f64;

    /// Score of `parts`, which start with the parts of `head`.
    ///
    /// Used when a combo is extended by joining. For a fixed tail the result
    /// must never increase when `head.score()` decreases. The default
    /// rescores from scratch; scorers whose rounding can disagree with
    /// `head.score()` should override it.
    fn join_score(&self, _head: &Combo, parts: &[ScoredItem]) -> f64 {
        self.score(parts)
    }
}

impl<F> ComboScorer for F
where
    F: Fn(&[ScoredItem]) -> f64,
{
    fn score(&self, parts: &[ScoredItem]) -> f64 {
        self(parts)
    }
}

/// Offset that lifts every item score into a strictly positive range.
const SCORE_OFFSET: f64 = 20.0;

/// Default scorer: each extra part costs an order of magnitude.
///
/// `score = Σ (part.score + 20) / 10^(parts + 1)`
///
/// With item scores in `[-10, 10]` every term lies in `[10, 30]`, so adding a
/// part can at most add 30 to the numerator while multiplying the
/// denominator by ten.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordScorer;

impl ComboScorer for WordScorer {
    fn score(&self, parts: &[ScoredItem]) -> f64 {
        offset_total(parts) / power_of_ten(parts.len() + 1)
    }

    /// `head.score() / 10^tail + Σ tail / 10^(parts + 1)`: equal to
    /// [`score`](Self::score) up to rounding, and monotonic in `head.score()`.
    fn join_score(&self, head: &Combo, parts: &[ScoredItem]) -> f64 {
        let split = head.parts().len().min(parts.len());
        let tail = &parts[split..];
        head.score() / power_of_ten(tail.len()) + offset_total(tail) / power_of_ten(parts.len() + 1)
    }
}

fn offset_total(parts: &[ScoredItem]) -> f64 {
    parts.iter().map(|p| p.score() + SCORE_OFFSET).sum()
}

fn power_of_ten(exponent: usize) -> f64 {
    10f64.powi(i32::try_from(exponent).unwrap_or(i32::MAX))
}

/// Anything with a priority the frontier can order by (higher first).
pub trait Ranked {
    fn rank(&self) -> f64;
}

// ---------------------------------------------------------------------------
// Combo
// ---------------------------------------------------------------------------

/// A composite result: display text, the parts it was built from, and a
/// score derived from those parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combo {
    text: String,
    parts: Vec<ScoredItem>,
    score: f64,
}

impl Combo {
    /// Build a combo from its parts, joining names with `separator`.
    pub fn from_parts(
        parts: Vec<ScoredItem>,
        separator: &str,
        scorer: &impl ComboScorer,
    ) -> Self {
        let text = parts
            .iter()
            .map(ScoredItem::name)
            .collect::<Vec<_>>()
            .join(separator);
        let score = scorer.score(&parts);
        Self { text, parts, score }
    }

    /// A one-part combo.
    pub fn single(item: ScoredItem, scorer: &impl ComboScorer) -> Self {
        Self::from_parts(vec![item], "", scorer)
    }

    /// Concatenate two combos: texts joined by `separator`, parts appended,
    /// score extended from this combo's score by
    /// [`ComboScorer::join_score`].
    pub fn join(&self, other: &Combo, separator: &str, scorer: &impl ComboScorer) -> Self {
        let mut parts = Vec::with_capacity(self.parts.len() + other.parts.len());
        parts.extend_from_slice(&self.parts);
        parts.extend_from_slice(&other.parts);
        let score = scorer.join_score(self, &parts);
        Self {
            text: format!("{}{separator}{}", self.text, other.text),
            parts,
            score,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parts(&self) -> &[ScoredItem] {
        &self.parts
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Names of the parts, in order.
    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(ScoredItem::name).collect()
    }

    /// Shift the score after the combo has left the search engines.
    ///
    /// Applying this to combos still inside a frontier would break the
    /// emission order.
    pub fn adjust(&mut self, delta: f64) {
        self.score += delta;
    }
}

impl Ranked for Combo {
    fn rank(&self) -> f64 {
        self.score
    }
}
