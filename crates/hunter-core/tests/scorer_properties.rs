use hunter_core::{Combo, ComboScorer, ScoredItem, WordScorer};
use proptest::prelude::*;

fn items(scores: &[f64]) -> Vec<ScoredItem> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &s)| ScoredItem::new(&format!("w{i}"), s).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn appending_a_part_never_raises_the_score(
        scores in prop::collection::vec(-10.0f64..=10.0, 1..12),
        extra in -10.0f64..=10.0,
    ) {
        let base = items(&scores);
        let mut longer = base.clone();
        longer.push(ScoredItem::new("extra", extra).unwrap());
        prop_assert!(WordScorer.score(&longer) <= WordScorer.score(&base));
    }

    #[test]
    fn lowering_a_part_never_raises_the_score(
        scores in prop::collection::vec(-10.0f64..=10.0, 1..12),
        index in any::<prop::sample::Index>(),
        drop in 0.0f64..=20.0,
    ) {
        let base = items(&scores);
        let i = index.index(scores.len());
        let mut lowered = scores.clone();
        lowered[i] = (lowered[i] - drop).max(-10.0);
        prop_assert!(WordScorer.score(&items(&lowered)) <= WordScorer.score(&base));
    }

    #[test]
    fn repeating_a_word_never_raises_the_score(score in -10.0f64..=10.0, a in 1usize..30, b in 1usize..30) {
        prop_assume!(a < b);
        let word = ScoredItem::new("w", score).unwrap();
        let short = vec![word.clone(); a];
        let long = vec![word; b];
        prop_assert!(WordScorer.score(&short) >= WordScorer.score(&long));
    }
}

/// Three-word heads over 0.01-grid scores produce many heads whose scores tie
/// after rounding while their raw sums differ. Joining a suffix must keep the
/// heads' order.
#[test]
fn joined_scores_follow_head_order_on_a_coarse_grid() {
    let words: Vec<ScoredItem> = (0..30u32)
        .map(|i| ScoredItem::new(&format!("w{i}"), f64::from(i * 37 % 200) / 100.0).unwrap())
        .collect();
    let mut heads = Vec::new();
    for i in 0..words.len() {
        for j in i..words.len() {
            for k in j..words.len() {
                let parts = vec![words[i].clone(), words[j].clone(), words[k].clone()];
                heads.push(Combo::from_parts(parts, "", &WordScorer));
            }
        }
    }
    heads.sort_by(|a, b| b.score().total_cmp(&a.score()));

    for tld_score in [-10.0, -3.33, 0.0, 0.07, 9.99] {
        let tld = Combo::single(ScoredItem::new("t", tld_score).unwrap(), &WordScorer);
        let joined: Vec<f64> = heads
            .iter()
            .map(|h| h.join(&tld, ".", &WordScorer).score())
            .collect();
        for (i, pair) in joined.windows(2).enumerate() {
            assert!(
                pair[0] >= pair[1],
                "{}.t ({}) before {}.t ({})",
                heads[i].text(),
                pair[0],
                heads[i + 1].text(),
                pair[1]
            );
        }
    }
}
