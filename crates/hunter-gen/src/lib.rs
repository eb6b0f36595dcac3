//! Domain name generation pipeline.
//!
//! Turns a TOML configuration into ranked streams of word combos, TLDs and
//! finished domains. The ordering work is done by `hunter-search`; this crate
//! supplies everything around it:
//!
//! - [`config`] -- TOML settings and the validated [`RunConfig`]
//! - [`source`] -- where raw names come from ([`SourceProvider`])
//! - [`filter`] -- regex filter sets and the lazy [`FilterChain`] adapter
//! - [`score`] -- bias-based scoring of raw words
//! - [`chains`] -- word and TLD combo streams
//! - [`domains`] -- merging words with TLDs into scored domains
//! - [`hunter`] -- [`DomainHunter`], the top-level entry point

use std::path::PathBuf;

use hunter_core::CoreError;
use hunter_search::SearchError;

pub mod chains;
pub mod config;
pub mod domains;
pub mod filter;
pub mod hunter;
pub mod score;
pub mod source;

pub use chains::{Chain, tld_chain, word_chain};
pub use config::{RunConfig, Settings, load_config};
pub use domains::{DomainChain, domain_chain};
pub use filter::{FilterChain, FilterSet};
pub use hunter::DomainHunter;
pub use source::{FileSource, ListSource, SourceProvider};

/// Error type for configuration loading and pipeline construction.
#[derive(Debug, thiserror::Error)]
pub enum HunterError {
    /// A source, filter or bias file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has unknown keys.
    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    /// A filter pattern is not a valid regex.
    #[error("invalid filter pattern {pattern:?}: {source}")]
    Filter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A required name list has no entries.
    #[error("{0} list is empty after loading all sources")]
    EmptyList(&'static str),

    /// A setting has an out-of-range value.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Search(#[from] SearchError),
}
