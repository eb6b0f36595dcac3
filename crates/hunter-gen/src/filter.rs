// Regex filter sets and the lazy filtering adapter used between pipeline
// stages.

use regex::Regex;
use tracing::debug;

use crate::HunterError;

/// A set of regex filters. A text passes when every pattern matches at the
/// start of it (the match need not span the whole text).
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    /// `(pattern as written, compiled anchored regex)`.
    filters: Vec<(String, Regex)>,
}

impl FilterSet {
    /// Compile every pattern. Duplicate patterns are kept once.
    pub fn new<S: AsRef<str>>(patterns: impl IntoIterator<Item = S>) -> Result<Self, HunterError> {
        let mut set = Self::default();
        for pattern in patterns {
            set.push(pattern.as_ref())?;
        }
        Ok(set)
    }

    /// Add one pattern.
    pub fn push(&mut self, pattern: &str) -> Result<(), HunterError> {
        if self.filters.iter().any(|(p, _)| p == pattern) {
            return Ok(());
        }
        let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|source| HunterError::Filter {
            pattern: pattern.to_string(),
            source,
        })?;
        self.filters.push((pattern.to_string(), regex));
        Ok(())
    }

    /// Add every pattern of `other` that this set does not have yet.
    pub fn extend_from(&mut self, other: &FilterSet) {
        for (pattern, regex) in &other.filters {
            if !self.filters.iter().any(|(p, _)| p == pattern) {
                self.filters.push((pattern.clone(), regex.clone()));
            }
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.filters.iter().all(|(_, regex)| regex.is_match(text))
    }

    /// Patterns as written in the configuration.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(|(p, _)| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Projection from a stream item to the text its filters test.
pub type TextOf<T> = fn(&T) -> &str;

/// Lazy filter over a stream: yields only items whose projected text passes
/// the filter set. Each decision is logged at debug level.
pub struct FilterChain<I: Iterator> {
    inner: I,
    filters: FilterSet,
    text_of: TextOf<I::Item>,
}

impl<I: Iterator> FilterChain<I> {
    pub fn new(inner: I, filters: FilterSet, text_of: TextOf<I::Item>) -> Self {
        Self {
            inner,
            filters,
            text_of,
        }
    }

    /// The wrapped stream.
    pub fn inner(&self) -> &I {
        &self.inner
    }
}

impl<I: Iterator> Iterator for FilterChain<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.inner.next()?;
            let text = (self.text_of)(&item);
            if self.filters.matches(text) {
                debug!(text, "kept by filters");
                return Some(item);
            }
            debug!(text, "discarded by filters");
        }
    }
}
