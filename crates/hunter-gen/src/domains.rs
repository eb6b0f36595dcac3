// Domain generation: merge the word chain with the TLD chain, then apply
// domain filters and domain biases.
//
// The merge is ordered by the unbiased joint score. Biases are added after
// a domain leaves the merge, so the final output is only approximately
// ordered when domain biases are configured.

use hunter_core::bias::{Bias, total_adjust};
use hunter_core::{Combo, WordScorer};
use hunter_search::MergeEngine;
use tracing::warn;

use crate::HunterError;
use crate::config::RunConfig;
use crate::filter::FilterChain;

/// Separator between the word part and the TLD.
pub const DOMAIN_SEPARATOR: &str = ".";

/// Join function used by the domain merge.
pub type JoinFn = fn(&Combo, &Combo) -> Combo;

/// Join a word combo and a TLD into a domain scored over all its parts.
pub fn join_domain(word: &Combo, tld: &Combo) -> Combo {
    word.join(tld, DOMAIN_SEPARATOR, &WordScorer)
}

/// Lazy stream of scored domains.
pub struct DomainChain<W: Iterator<Item = Combo>> {
    inner: FilterChain<MergeEngine<W, JoinFn>>,
    biases: Vec<Bias>,
}

impl<W: Iterator<Item = Combo>> DomainChain<W> {
    /// Number of word combos pulled so far.
    pub fn words_pulled(&self) -> usize {
        self.inner.inner().pulled()
    }
}

impl<W: Iterator<Item = Combo>> Iterator for DomainChain<W> {
    type Item = Combo;

    fn next(&mut self) -> Option<Combo> {
        let mut domain = self.inner.next()?;
        let adjust = total_adjust(&self.biases, domain.text());
        if adjust != 0.0 {
            domain.adjust(adjust);
        }
        Some(domain)
    }
}

/// Build the domain stream from a word chain and a TLD chain.
///
/// The TLD chain is collected up front; the word chain is pulled lazily.
/// Fails with a configuration error if either chain is empty.
pub fn domain_chain<W, T>(
    config: &RunConfig,
    words: W,
    tlds: T,
) -> Result<DomainChain<W>, HunterError>
where
    W: Iterator<Item = Combo>,
    T: IntoIterator<Item = Combo>,
{
    let merge = MergeEngine::new(words, tlds, join_domain as JoinFn).map_err(|e| {
        warn!(error = %e, "no domains can be built; check word and tld sources and filters");
        e
    })?;
    Ok(DomainChain {
        inner: FilterChain::new(merge, config.domain_filters().clone(), Combo::text),
        biases: config.domain_biases().to_vec(),
    })
}
