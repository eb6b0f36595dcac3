// Word and TLD chains: filtered, ranked, lazily combined name streams.
//
// Each chain filters the raw names, ranks the survivors with the section's
// biases, feeds them to a CombinationEngine, and filters the combined text
// again (a combo of valid words can still be too long).

use hunter_core::bias::Bias;
use hunter_core::{Combo, WordScorer};
use hunter_search::CombinationEngine;
use tracing::info;

use crate::HunterError;
use crate::config::RunConfig;
use crate::filter::{FilterChain, FilterSet};
use crate::score::rank_names;

/// A filtered combo stream built from one ranked name list.
pub type Chain = FilterChain<CombinationEngine<WordScorer>>;

/// Build a chain over `names`.
pub fn build_chain(
    kind: &'static str,
    names: &[String],
    filters: &FilterSet,
    biases: &[Bias],
    max_repeat: usize,
) -> Result<Chain, HunterError> {
    let kept: Vec<String> =
        FilterChain::new(names.iter().cloned(), filters.clone(), String::as_str).collect();
    let ranked = rank_names(biases, kept.iter().map(String::as_str))?;
    info!(
        kind,
        names = names.len(),
        kept = ranked.len(),
        max_repeat,
        "ranked chain candidates"
    );
    let engine = CombinationEngine::new(ranked, max_repeat)?;
    Ok(FilterChain::new(engine, filters.clone(), Combo::text))
}

/// Word combos, up to `config.max_words()` words each.
pub fn word_chain(config: &RunConfig) -> Result<Chain, HunterError> {
    build_chain(
        "word",
        config.word_list(),
        config.word_filters(),
        config.word_biases(),
        config.max_words(),
    )
}

/// Single TLDs, best first.
pub fn tld_chain(config: &RunConfig) -> Result<Chain, HunterError> {
    build_chain(
        "tld",
        config.tld_list(),
        config.tld_filters(),
        config.tld_biases(),
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::config::Settings;

    fn config(text: &str) -> RunConfig {
        let settings = Settings::from_toml_str(text).unwrap();
        RunConfig::from_settings(&settings, Path::new(".")).unwrap()
    }

    #[test]
    fn word_chain_is_ordered_and_non_empty() {
        let config = config(
            r#"
            max_words = 3
            [words]
            sources = ["cat", "dog", "bird", "fish"]
            biases = ["dog,1"]
            [tlds]
            sources = ["com"]
            "#,
        );
        let combos: Vec<Combo> = word_chain(&config).unwrap().take(25).collect();
        assert_eq!(combos.len(), 25);
        assert_eq!(combos[0].text(), "dog");
        assert!(combos.iter().all(|c| !c.text().is_empty()));
        for pair in combos.windows(2) {
            assert!(pair[0].score() >= pair[1].score());
        }
    }

    #[test]
    fn filters_drop_names_and_long_combos() {
        let config = config(
            r#"
            max_words = 2
            [words]
            sources = ["abc", "de", "x-y"]
            filters = ['[a-z]{1,4}$']
            [tlds]
            sources = ["com"]
            "#,
        );
        let texts: Vec<String> = word_chain(&config)
            .unwrap()
            .map(|c| c.text().to_string())
            .collect();
        // "x-y" fails as a name; "deabc" and "abcabc" fail as combos.
        assert_eq!(texts, vec!["de", "abc", "dede"]);
    }

    #[test]
    fn tld_chain_never_repeats() {
        let config = config(
            r#"
            [words]
            sources = ["cat"]
            [tlds]
            sources = ["com", "io", "net"]
            "#,
        );
        let tlds: Vec<String> = tld_chain(&config)
            .unwrap()
            .map(|c| c.text().to_string())
            .collect();
        assert_eq!(tlds, vec!["io", "com", "net"]);
    }

    #[test]
    fn everything_filtered_yields_empty_chain() {
        let config = config(
            r#"
            [words]
            sources = ["cat"]
            filters = ['\d+']
            [tlds]
            sources = ["com"]
            "#,
        );
        assert_eq!(word_chain(&config).unwrap().count(), 0);
    }
}
