// Configuration: TOML settings as written, and the validated RunConfig the
// pipeline runs from.
//
// All reading, parsing and validation happens in `RunConfig::from_settings`.
// Nothing downstream re-validates.

use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use hunter_core::bias::Bias;
use serde::Deserialize;
use tracing::{debug, info};

use crate::HunterError;
use crate::filter::FilterSet;
use crate::source::{FileSource, ListSource, SourceProvider, collect_names};

/// Default `max_words`: the most parts a word combo may have.
pub const DEFAULT_MAX_WORDS: usize = 10;

/// Filter applied to words when the config gives none.
pub const DEFAULT_WORD_FILTER: &str = r"\w{1,32}";

/// Filter applied to TLDs when the config gives none.
pub const DEFAULT_TLD_FILTER: &str = r"\w{1,5}";

/// Filter applied to finished domains when the config gives none.
pub const DEFAULT_DOMAIN_FILTER: &str = r".{1,32}";

// ---------------------------------------------------------------------------
// Settings (as written)
// ---------------------------------------------------------------------------

/// The configuration file as written. Every key is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Maximum number of words in one combo.
    pub max_words: usize,
    pub words: SectionSettings,
    pub tlds: SectionSettings,
    /// Filters and biases for finished domains. `sources` is ignored here.
    pub domains: SectionSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            words: SectionSettings::default(),
            tlds: SectionSettings::default(),
            domains: SectionSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, HunterError> {
        Ok(toml::from_str(text)?)
    }
}

/// Sources, filters and biases for one kind of name. Inline lists and files
/// are merged; file paths are relative to the config file's directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionSettings {
    pub sources: Vec<String>,
    pub source_files: Vec<PathBuf>,
    pub filters: Vec<String>,
    pub filter_files: Vec<PathBuf>,
    pub biases: Vec<BiasSetting>,
    pub bias_files: Vec<PathBuf>,
}

/// A bias as written: `"pattern,adjust"`, a JSON object string, or a table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BiasSetting {
    Text(String),
    Table { pattern: String, adjust: f64 },
}

impl BiasSetting {
    fn to_bias(&self) -> Result<Bias, HunterError> {
        let bias = match self {
            BiasSetting::Text(text) => Bias::parse(text)?,
            BiasSetting::Table { pattern, adjust } => Bias::new(pattern.clone(), *adjust)?,
        };
        Ok(bias)
    }
}

impl SectionSettings {
    fn providers(
        base_dir: &Path,
        inline: &[String],
        files: &[PathBuf],
    ) -> Vec<Box<dyn SourceProvider>> {
        let mut providers: Vec<Box<dyn SourceProvider>> =
            vec![Box::new(ListSource::new(inline.iter().cloned()))];
        for file in files {
            providers.push(Box::new(FileSource::resolve(base_dir, file)));
        }
        providers
    }

    /// Lower-cased, trimmed, deduplicated names; first occurrence wins.
    fn load_names(&self, base_dir: &Path) -> Result<Vec<String>, HunterError> {
        let raw = collect_names(&Self::providers(base_dir, &self.sources, &self.source_files))?;
        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(raw.len());
        for name in raw {
            let name = name.trim().to_lowercase();
            if !name.is_empty() && seen.insert(name.clone()) {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Compiled filters, falling back to `default` if none are configured.
    fn load_filters(&self, base_dir: &Path, default: &str) -> Result<FilterSet, HunterError> {
        let patterns = collect_names(&Self::providers(base_dir, &self.filters, &self.filter_files))?;
        if patterns.is_empty() {
            return FilterSet::new([default]);
        }
        FilterSet::new(patterns)
    }

    /// Parsed biases: inline settings first, then one bias per file line.
    fn load_biases(&self, base_dir: &Path) -> Result<Vec<Bias>, HunterError> {
        let mut biases = Vec::with_capacity(self.biases.len());
        for setting in &self.biases {
            push_unique(&mut biases, setting.to_bias()?);
        }
        for file in &self.bias_files {
            for line in FileSource::resolve(base_dir, file).names()? {
                push_unique(&mut biases, Bias::parse(&line)?);
            }
        }
        Ok(biases)
    }
}

fn push_unique(biases: &mut Vec<Bias>, bias: Bias) {
    if !biases.contains(&bias) {
        biases.push(bias);
    }
}

// ---------------------------------------------------------------------------
// RunConfig (validated)
// ---------------------------------------------------------------------------

/// Fully loaded and validated configuration. Immutable once built.
#[derive(Debug, Clone)]
pub struct RunConfig {
    word_list: Vec<String>,
    tld_list: Vec<String>,
    word_filters: FilterSet,
    tld_filters: FilterSet,
    domain_filters: FilterSet,
    word_biases: Vec<Bias>,
    tld_biases: Vec<Bias>,
    domain_biases: Vec<Bias>,
    max_words: usize,
}

impl RunConfig {
    /// Read every source, filter and bias named by `settings` and validate
    /// the result. Relative paths resolve against `base_dir`.
    ///
    /// Domain filters also apply to words and TLDs: a part that cannot
    /// appear in a valid domain is dropped before the search.
    pub fn from_settings(settings: &Settings, base_dir: &Path) -> Result<Self, HunterError> {
        if settings.max_words < 1 {
            return Err(HunterError::InvalidSetting(format!(
                "max_words must be at least 1, got {}",
                settings.max_words
            )));
        }

        let domain_filters = settings.domains.load_filters(base_dir, DEFAULT_DOMAIN_FILTER)?;
        let domain_biases = settings.domains.load_biases(base_dir)?;

        let word_list = settings.words.load_names(base_dir)?;
        if word_list.is_empty() {
            return Err(HunterError::EmptyList("word"));
        }
        let mut word_filters = settings.words.load_filters(base_dir, DEFAULT_WORD_FILTER)?;
        word_filters.extend_from(&domain_filters);
        let word_biases = settings.words.load_biases(base_dir)?;

        let tld_list = settings.tlds.load_names(base_dir)?;
        if tld_list.is_empty() {
            return Err(HunterError::EmptyList("tld"));
        }
        let mut tld_filters = settings.tlds.load_filters(base_dir, DEFAULT_TLD_FILTER)?;
        tld_filters.extend_from(&domain_filters);
        let tld_biases = settings.tlds.load_biases(base_dir)?;

        info!(
            words = word_list.len(),
            tlds = tld_list.len(),
            max_words = settings.max_words,
            "loaded configuration"
        );
        debug!(
            word_filters = word_filters.len(),
            tld_filters = tld_filters.len(),
            domain_filters = domain_filters.len(),
            word_biases = word_biases.len(),
            tld_biases = tld_biases.len(),
            domain_biases = domain_biases.len(),
            "loaded filters and biases"
        );

        Ok(Self {
            word_list,
            tld_list,
            word_filters,
            tld_filters,
            domain_filters,
            word_biases,
            tld_biases,
            domain_biases,
            max_words: settings.max_words,
        })
    }

    pub fn word_list(&self) -> &[String] {
        &self.word_list
    }

    pub fn tld_list(&self) -> &[String] {
        &self.tld_list
    }

    pub fn word_filters(&self) -> &FilterSet {
        &self.word_filters
    }

    pub fn tld_filters(&self) -> &FilterSet {
        &self.tld_filters
    }

    pub fn domain_filters(&self) -> &FilterSet {
        &self.domain_filters
    }

    pub fn word_biases(&self) -> &[Bias] {
        &self.word_biases
    }

    pub fn tld_biases(&self) -> &[Bias] {
        &self.tld_biases
    }

    pub fn domain_biases(&self) -> &[Bias] {
        &self.domain_biases
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }
}

/// Read a TOML config file and build the [`RunConfig`] it describes.
pub fn load_config(path: &Path) -> Result<RunConfig, HunterError> {
    let text = std::fs::read_to_string(path).map_err(|source| HunterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = Settings::from_toml_str(&text)?;
    RunConfig::from_settings(&settings, base_dir_of(path))
}

/// Directory relative paths in the config file at `path` resolve against.
pub fn base_dir_of(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
