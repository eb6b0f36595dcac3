// Lazy cross product of two ranked streams.
//
// The secondary stream is small and finite, so it is collected up front. The
// primary stream may be unbounded and expensive (typically a
// `CombinationEngine`), so its items are pulled on demand into one
// append-only buffer that every secondary column reads from.
//
// The frontier holds at most one node per column: `(w, t)` pairs primary
// item `w` with secondary item `t`. Popping it yields the joined combo and
// pushes `(w + 1, t)`, pulling primary item `w + 1` first if no column has
// needed it yet. A primary index is therefore pulled at most once no matter
// how many columns there are.

use hunter_core::Combo;
use tracing::debug;

use crate::SearchError;
use crate::frontier::{Expand, Frontier};

/// Expansion rule for the merge: the shared primary buffer plus the
/// materialized secondary stream.
struct SharedBuffer<I, J> {
    primary: I,
    /// Items pulled from `primary` so far, in pull order.
    buffer: Vec<Combo>,
    /// Set once `primary` returns `None`; it is never polled again.
    exhausted: bool,
    secondary: Vec<Combo>,
    join: J,
}

impl<I, J> SharedBuffer<I, J>
where
    I: Iterator<Item = Combo>,
    J: FnMut(&Combo, &Combo) -> Combo,
{
    /// Make sure `buffer[index]` exists if the primary stream can supply it.
    /// Returns `false` if the primary stream ran out first.
    fn fill_to(&mut self, index: usize) -> bool {
        while self.buffer.len() <= index {
            if self.exhausted {
                return false;
            }
            match self.primary.next() {
                Some(combo) => {
                    debug!(
                        index = self.buffer.len(),
                        text = combo.text(),
                        "pulled primary item"
                    );
                    self.buffer.push(combo);
                }
                None => {
                    debug!(pulled = self.buffer.len(), "primary stream exhausted");
                    self.exhausted = true;
                    return false;
                }
            }
        }
        true
    }

    fn pair(&mut self, w: usize, t: usize) -> Combo {
        (self.join)(&self.buffer[w], &self.secondary[t])
    }
}

impl<I, J> Expand for SharedBuffer<I, J>
where
    I: Iterator<Item = Combo>,
    J: FnMut(&Combo, &Combo) -> Combo,
{
    type Key = (usize, usize);
    type Item = Combo;

    fn expand(&mut self, &(w, t): &(usize, usize), children: &mut Vec<((usize, usize), Combo)>) {
        if self.fill_to(w + 1) {
            let combo = self.pair(w + 1, t);
            children.push(((w + 1, t), combo));
        }
    }
}

/// Lazy, score-ordered cross product of a primary and a secondary stream.
///
/// Yields `join(a, b)` for every `a` in `primary` and `b` in `secondary`, in
/// non-increasing score order, as long as:
///
/// - both streams are sorted by descending score, and
/// - for each fixed `b`, `join(a, b)` scores never increase along `primary`.
///
/// The output is `|primary| × |secondary|` long, or unbounded if `primary`
/// is. Ties come out in no particular order.
pub struct MergeEngine<I, J>
where
    I: Iterator<Item = Combo>,
    J: FnMut(&Combo, &Combo) -> Combo,
{
    frontier: Frontier<SharedBuffer<I, J>>,
}

impl<I, J> MergeEngine<I, J>
where
    I: Iterator<Item = Combo>,
    J: FnMut(&Combo, &Combo) -> Combo,
{
    /// Build the engine, collecting `secondary` and pulling the first primary
    /// item.
    ///
    /// Fails with [`SearchError::ConfigurationError`] if `secondary` is empty
    /// or `primary` yields nothing.
    pub fn new(
        primary: I,
        secondary: impl IntoIterator<Item = Combo>,
        join: J,
    ) -> Result<Self, SearchError> {
        let secondary: Vec<Combo> = secondary.into_iter().collect();
        if secondary.is_empty() {
            return Err(SearchError::ConfigurationError(
                "secondary stream has no items".to_string(),
            ));
        }

        let mut shared = SharedBuffer {
            primary,
            buffer: Vec::new(),
            exhausted: false,
            secondary,
            join,
        };
        if !shared.fill_to(0) {
            return Err(SearchError::ConfigurationError(
                "primary stream has no items".to_string(),
            ));
        }
        debug!(columns = shared.secondary.len(), "starting merge");

        let seeds: Vec<((usize, usize), Combo)> = (0..shared.secondary.len())
            .map(|t| ((0, t), shared.pair(0, t)))
            .collect();
        let mut frontier = Frontier::new(shared);
        for (key, combo) in seeds {
            frontier.push(key, combo);
        }
        Ok(Self { frontier })
    }

    /// Number of primary items pulled so far.
    pub fn pulled(&self) -> usize {
        self.frontier.expander().buffer.len()
    }

    /// Number of secondary items (columns).
    pub fn columns(&self) -> usize {
        self.frontier.expander().secondary.len()
    }
}

impl<I, J> Iterator for MergeEngine<I, J>
where
    I: Iterator<Item = Combo>,
    J: FnMut(&Combo, &Combo) -> Combo,
{
    type Item = Combo;

    fn next(&mut self) -> Option<Combo> {
        self.frontier.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use hunter_core::{ScoredItem, WordScorer};

    fn combo(text: &str, score: f64) -> Combo {
        let scorer = move |_: &[ScoredItem]| score;
        Combo::single(ScoredItem::new(text, 0.0).unwrap(), &scorer)
    }

    /// Joint score as a product: monotonic for positive scores.
    fn product_join(a: &Combo, b: &Combo) -> Combo {
        let score = a.score() * b.score();
        let scorer = move |_: &[ScoredItem]| score;
        a.join(b, ".", &scorer)
    }

    fn primary() -> Vec<Combo> {
        vec![combo("e", 0.9), combo("ei", 0.5), combo("i", 0.4)]
    }

    fn secondary() -> Vec<Combo> {
        vec![combo("com", 0.8), combo("io", 0.3)]
    }

    #[test]
    fn yields_every_pair_best_first() {
        let pulls = Cell::new(0);
        let source = primary().into_iter().inspect(|_| pulls.set(pulls.get() + 1));
        let merged: Vec<Combo> = MergeEngine::new(source, secondary(), product_join)
            .unwrap()
            .collect();

        assert_eq!(merged.len(), 6);
        assert_eq!(merged[0].text(), "e.com");
        for pair in merged.windows(2) {
            assert!(pair[0].score() >= pair[1].score());
        }
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn pulls_lazily() {
        let pulls = Cell::new(0);
        let source = primary().into_iter().inspect(|_| pulls.set(pulls.get() + 1));
        let mut engine = MergeEngine::new(source, secondary(), product_join).unwrap();
        assert_eq!(pulls.get(), 1);

        let first = engine.next().unwrap();
        assert_eq!(first.text(), "e.com");
        assert_eq!(engine.pulled(), 2);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn empty_secondary_is_a_configuration_error() {
        let err = MergeEngine::new(primary().into_iter(), Vec::<Combo>::new(), product_join).err();
        assert!(matches!(err, Some(SearchError::ConfigurationError(_))));
    }

    #[test]
    fn empty_primary_is_a_configuration_error() {
        let err = MergeEngine::new(Vec::<Combo>::new().into_iter(), secondary(), product_join).err();
        assert!(matches!(err, Some(SearchError::ConfigurationError(_))));
    }

    #[test]
    fn single_secondary_passes_primary_through() {
        let merged: Vec<String> =
            MergeEngine::new(primary().into_iter(), vec![combo("com", 1.0)], product_join)
                .unwrap()
                .map(|c| c.text().to_string())
                .collect();
        assert_eq!(merged, vec!["e.com", "ei.com", "i.com"]);
    }

    #[test]
    fn unbounded_primary_is_consumed_on_demand() {
        // 1.0, 0.5, 0.25, ... forever.
        let source = (0..).map(|i| combo(&format!("w{i}"), 0.5f64.powi(i)));
        let mut engine = MergeEngine::new(source, secondary(), product_join).unwrap();
        let taken: Vec<Combo> = engine.by_ref().take(10).collect();
        assert_eq!(taken.len(), 10);
        assert!(engine.pulled() <= 11);
        assert_eq!(engine.columns(), 2);
    }

    #[test]
    fn word_scorer_join_keeps_order() {
        let word = |name: &str, score: f64| {
            Combo::single(ScoredItem::new(name, score).unwrap(), &WordScorer)
        };
        let words = vec![word("cat", 3.0), word("dog", 2.5), word("emu", 1.0)];
        let tlds = vec![word("com", 3.0), word("io", 2.0)];
        let merged: Vec<Combo> = MergeEngine::new(words.into_iter(), tlds, |a: &Combo, b: &Combo| {
            a.join(b, ".", &WordScorer)
        })
        .unwrap()
        .collect();
        assert_eq!(merged.len(), 6);
        assert_eq!(merged[0].text(), "cat.com");
        for pair in merged.windows(2) {
            assert!(pair[0].score() >= pair[1].score());
        }
    }
}
