// Name sources: inline lists and newline-delimited files.
//
// The engines never see where names come from; config loading asks each
// provider for its names once, up front.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::HunterError;

/// Something that yields raw names (words, TLDs, filter patterns, biases).
pub trait SourceProvider {
    /// All names from this source, in source order.
    fn names(&self) -> Result<Vec<String>, HunterError>;
}

/// Names given directly in the configuration.
#[derive(Debug, Clone, Default)]
pub struct ListSource {
    names: Vec<String>,
}

impl ListSource {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl SourceProvider for ListSource {
    fn names(&self) -> Result<Vec<String>, HunterError> {
        Ok(self.names.clone())
    }
}

/// One name per line of a text file. Lines are trimmed; blank lines are
/// skipped.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A file source whose relative `path` is interpreted against `base_dir`.
    pub fn resolve(base_dir: &Path, path: &Path) -> Self {
        Self::new(base_dir.join(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceProvider for FileSource {
    fn names(&self) -> Result<Vec<String>, HunterError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| HunterError::Io {
            path: self.path.clone(),
            source,
        })?;
        let names: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        debug!(path = %self.path.display(), count = names.len(), "read source file");
        Ok(names)
    }
}

/// Concatenate the names of every provider, in order.
pub fn collect_names(sources: &[Box<dyn SourceProvider>]) -> Result<Vec<String>, HunterError> {
    let mut names = Vec::new();
    for source in sources {
        names.extend(source.names()?);
    }
    Ok(names)
}
