// Initial scoring of raw names before they enter the search engines.

use hashbrown::HashSet;
use hunter_core::ScoredItem;
use hunter_core::bias::{Bias, total_adjust};
use tracing::debug;

use crate::HunterError;

/// Score every name starts from before biases and length are applied.
pub const BASE_SCORE: f64 = 3.0;

/// Score lost per character, so shorter names win ties.
pub const LENGTH_PENALTY: f64 = 0.01;

/// Score one name: `BASE_SCORE + Σ matching bias adjusts - LENGTH_PENALTY × chars`.
///
/// Fails if the result falls outside the item score range, which can only
/// happen when many strong biases stack up on one name.
pub fn score_name(biases: &[Bias], name: &str) -> Result<ScoredItem, HunterError> {
    let adjust = total_adjust(biases, name);
    let length = name.chars().count() as f64;
    let score = BASE_SCORE + adjust - LENGTH_PENALTY * length;
    debug!(name, score, adjust, "scored name");
    Ok(ScoredItem::new(name, score)?)
}

/// Score, deduplicate and sort names best first.
///
/// The first occurrence of a name wins; equal scores keep input order.
pub fn rank_names<'a>(
    biases: &[Bias],
    names: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<ScoredItem>, HunterError> {
    let mut seen = HashSet::new();
    let mut ranked = Vec::new();
    for name in names {
        let item = score_name(biases, name)?;
        if seen.insert(item.name().to_string()) {
            ranked.push(item);
        }
    }
    ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunter_core::CoreError;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn unbiased_score_penalizes_length() {
        let item = score_name(&[], "hello").unwrap();
        assert!(approx(item.score(), 3.0 - 0.05));
    }

    #[test]
    fn matching_biases_are_added() {
        let biases = vec![Bias::new("ell", 1.0).unwrap(), Bias::new("zzz", -2.0).unwrap()];
        let item = score_name(&biases, "hello").unwrap();
        assert!(approx(item.score(), 4.0 - 0.05));
    }

    #[test]
    fn stacked_biases_can_overflow_the_range() {
        let biases: Vec<Bias> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|p| Bias::new(*p, 2.0).unwrap())
            .collect();
        let err = score_name(&biases, "abcde").unwrap_err();
        assert!(matches!(err, HunterError::Core(CoreError::ScoreOutOfRange { .. })));
    }

    #[test]
    fn rank_sorts_best_first_and_dedupes() {
        let biases = vec![Bias::new("dog", 1.0).unwrap()];
        let ranked = rank_names(&biases, ["cat", "dog", "Cat", "horse"]).unwrap();
        let names: Vec<&str> = ranked.iter().map(ScoredItem::name).collect();
        assert_eq!(names, vec!["dog", "cat", "horse"]);
    }

    #[test]
    fn rank_empty_is_empty() {
        assert!(rank_names(&[], std::iter::empty()).unwrap().is_empty());
    }
}
