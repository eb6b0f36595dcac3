// DomainHunter: top-level entry point tying configuration to the pipeline.
//
// Owns the validated RunConfig and builds fresh chains on each call, so a
// hunter can be asked for domains any number of times.

use std::path::Path;

use crate::HunterError;
use crate::chains::{Chain, tld_chain, word_chain};
use crate::config::{RunConfig, load_config};
use crate::domains::{DomainChain, domain_chain};

/// Generates ranked word combos, TLDs and domains from one configuration.
#[derive(Debug, Clone)]
pub struct DomainHunter {
    config: RunConfig,
}

impl DomainHunter {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Load the TOML config at `path` and build a hunter from it.
    pub fn from_path(path: &Path) -> Result<Self, HunterError> {
        Ok(Self::new(load_config(path)?))
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Ranked word combos.
    pub fn words(&self) -> Result<Chain, HunterError> {
        word_chain(&self.config)
    }

    /// Ranked TLDs.
    pub fn tlds(&self) -> Result<Chain, HunterError> {
        tld_chain(&self.config)
    }

    /// Ranked domains. The stream may be very long; take what you need.
    pub fn domains(&self) -> Result<DomainChain<Chain>, HunterError> {
        domain_chain(&self.config, self.words()?, self.tlds()?)
    }
}
