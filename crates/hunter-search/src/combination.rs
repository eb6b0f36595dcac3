// Self-product search: every multi-part combo of one ranked list, best first.
//
// A node is a non-decreasing path of indices into the ranked items. The root
// is `[0]`; a path ending at `i` has up to two children:
//
//   extend   path + [i]             (one more part, repeating the last pick)
//   advance  path[..L-1] + [i + 1]  (same length, next candidate in last slot)
//
// A path whose last two indices are equal can only come from `extend`, every
// other path only from `advance`, so each path is generated exactly once.
// Both moves either append a part or swap in a lower-ranked item, so with a
// monotonic scorer a child never outranks its parent.

use hunter_core::{Combo, ComboScorer, ScoredItem, WordScorer};
use tracing::{debug, trace};

use crate::SearchError;
use crate::frontier::{Expand, Frontier};

/// Expansion rule for the self-product search.
struct SelfProduct<S> {
    items: Vec<ScoredItem>,
    max_repeat: usize,
    scorer: S,
}

impl<S: ComboScorer> SelfProduct<S> {
    fn combo(&self, path: &[usize]) -> Combo {
        let parts = path.iter().map(|&i| self.items[i].clone()).collect();
        Combo::from_parts(parts, "", &self.scorer)
    }
}

impl<S: ComboScorer> Expand for SelfProduct<S> {
    type Key = Vec<usize>;
    type Item = Combo;

    fn expand(&mut self, path: &Vec<usize>, children: &mut Vec<(Vec<usize>, Combo)>) {
        let Some(&last) = path.last() else {
            return;
        };
        if path.len() < self.max_repeat {
            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(path);
            extended.push(last);
            let combo = self.combo(&extended);
            children.push((extended, combo));
        }
        if last + 1 < self.items.len() {
            let mut advanced = path.clone();
            if let Some(slot) = advanced.last_mut() {
                *slot = last + 1;
            }
            let combo = self.combo(&advanced);
            children.push((advanced, combo));
        }
    }
}

enum State<S: ComboScorer> {
    /// Zero or one item: the result is known up front.
    Fixed(Option<Combo>),
    Search(Frontier<SelfProduct<S>>),
}

/// Lazy, score-ordered generator of combos drawn from one ranked list.
///
/// Yields every non-decreasing index sequence of length `1..=max_repeat`
/// exactly once, in non-increasing score order. For `n >= 2` items that is
/// `Σ_{L=1..max_repeat} C(n+L-1, L)` combos; a single item yields exactly
/// one combo and an empty list yields none.
///
/// `items` must already be sorted by descending score and free of
/// duplicates. This is not checked.
pub struct CombinationEngine<S: ComboScorer = WordScorer> {
    state: State<S>,
}

impl CombinationEngine<WordScorer> {
    /// Create an engine scored with [`WordScorer`].
    pub fn new(items: Vec<ScoredItem>, max_repeat: usize) -> Result<Self, SearchError> {
        Self::with_scorer(items, max_repeat, WordScorer)
    }
}

impl<S: ComboScorer> CombinationEngine<S> {
    /// Create an engine with a custom scorer, which must be monotonic.
    pub fn with_scorer(
        items: Vec<ScoredItem>,
        max_repeat: usize,
        scorer: S,
    ) -> Result<Self, SearchError> {
        if max_repeat < 1 {
            return Err(SearchError::InvalidArgument(format!(
                "max_repeat must be at least 1, got {max_repeat}"
            )));
        }
        debug!(items = items.len(), max_repeat, "starting combination search");

        let state = match items.len() {
            0 => State::Fixed(None),
            1 => State::Fixed(items.into_iter().next().map(|item| Combo::single(item, &scorer))),
            _ => {
                let product = SelfProduct {
                    items,
                    max_repeat,
                    scorer,
                };
                let root = vec![0];
                let combo = product.combo(&root);
                let mut frontier = Frontier::new(product);
                frontier.push(root, combo);
                State::Search(frontier)
            }
        };
        Ok(Self { state })
    }
}

impl<S: ComboScorer> Iterator for CombinationEngine<S> {
    type Item = Combo;

    fn next(&mut self) -> Option<Combo> {
        let combo = match &mut self.state {
            State::Fixed(slot) => slot.take(),
            State::Search(frontier) => frontier.pop(),
        }?;
        trace!(text = combo.text(), score = combo.score(), "emitting combo");
        Some(combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ranked(pairs: &[(&str, f64)]) -> Vec<ScoredItem> {
        pairs
            .iter()
            .map(|&(name, score)| ScoredItem::new(name, score).unwrap())
            .collect()
    }

    fn letters(n: usize) -> Vec<ScoredItem> {
        (0..n)
            .map(|i| {
                let name = char::from(b'a' + i as u8).to_string();
                ScoredItem::new(&name, 10.0 - 0.5 * i as f64).unwrap()
            })
            .collect()
    }

    fn binomial(n: u64, k: u64) -> u64 {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    fn expected_count(n: u64, max_repeat: u64) -> u64 {
        (1..=max_repeat).map(|l| binomial(n + l - 1, l)).sum()
    }

    fn assert_non_increasing(combos: &[Combo]) {
        for pair in combos.windows(2) {
            assert!(
                pair[0].score() >= pair[1].score(),
                "{} ({}) before {} ({})",
                pair[0].text(),
                pair[0].score(),
                pair[1].text(),
                pair[1].score()
            );
        }
    }

    #[test]
    fn three_items_two_repeats() {
        let items = ranked(&[("e", 9.0), ("i", 7.0), ("a", 5.0)]);
        let combos: Vec<Combo> = CombinationEngine::new(items, 2).unwrap().collect();
        assert_eq!(combos[0].text(), "e");
        assert_eq!(combos.len(), 3 + 6);
        assert_non_increasing(&combos);

        let texts: HashSet<&str> = combos.iter().map(Combo::text).collect();
        for expected in ["e", "i", "a", "ee", "ei", "ea", "ii", "ia", "aa"] {
            assert!(texts.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn zero_max_repeat_is_invalid() {
        let err = CombinationEngine::new(letters(3), 0).err();
        assert!(matches!(err, Some(SearchError::InvalidArgument(_))));
    }

    #[test]
    fn empty_list_yields_nothing() {
        let mut engine = CombinationEngine::new(Vec::new(), 4).unwrap();
        assert!(engine.next().is_none());
    }

    #[test]
    fn single_item_yields_exactly_one_combo() {
        let combos: Vec<Combo> = CombinationEngine::new(letters(1), 5).unwrap().collect();
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].text(), "a");
    }

    #[test]
    fn max_repeat_one_yields_each_item_in_order() {
        let combos: Vec<String> = CombinationEngine::new(letters(4), 1)
            .unwrap()
            .map(|c| c.text().to_string())
            .collect();
        assert_eq!(combos, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn count_matches_multiset_formula() {
        for n in 2..6u64 {
            for m in 1..5u64 {
                let count = CombinationEngine::new(letters(n as usize), m as usize)
                    .unwrap()
                    .count() as u64;
                assert_eq!(count, expected_count(n, m), "n={n} max_repeat={m}");
            }
        }
    }

    #[test]
    fn no_index_sequence_repeats() {
        let combos: Vec<Combo> = CombinationEngine::new(letters(5), 3).unwrap().collect();
        let mut seen = HashSet::new();
        for combo in &combos {
            assert!(seen.insert(combo.text().to_string()), "duplicate {}", combo.text());
        }
        assert_non_increasing(&combos);
    }

    #[test]
    fn custom_scorer_is_used() {
        // Ranks purely by part count, so all singles come before all pairs.
        let by_length = |parts: &[ScoredItem]| -(parts.len() as f64);
        let combos: Vec<Combo> = CombinationEngine::with_scorer(letters(3), 2, by_length)
            .unwrap()
            .collect();
        assert_eq!(combos.len(), 9);
        assert!(combos[..3].iter().all(|c| c.parts().len() == 1));
        assert!(combos[3..].iter().all(|c| c.parts().len() == 2));
    }

    #[test]
    fn stops_early_without_exhausting() {
        let first: Vec<Combo> = CombinationEngine::new(letters(26), 10)
            .unwrap()
            .take(5)
            .collect();
        assert_eq!(first.len(), 5);
        assert_eq!(first[0].text(), "a");
        assert_non_increasing(&first);
    }
}
