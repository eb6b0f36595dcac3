//! Score-ordered lazy combination engines.
//!
//! Both engines walk an implicit, possibly unbounded space of combos
//! best-first and yield results one at a time in non-increasing score
//! order. Nothing beyond the current frontier is ever materialized.
//!
//! # Architecture
//!
//! - [`frontier`] -- Generic best-first expander shared by both engines
//! - [`combination`] -- [`CombinationEngine`]: multi-part combos from one ranked list
//! - [`merge`] -- [`MergeEngine`]: lazy cross product of two ranked streams
//!
//! Correct ordering depends on the scorer being monotonic (see
//! [`hunter_core::ComboScorer`]) and on inputs being sorted by descending
//! score. Neither is checked at runtime.

pub mod combination;
pub mod frontier;
pub mod merge;

pub use combination::CombinationEngine;
pub use frontier::{Expand, Frontier};
pub use merge::MergeEngine;

/// Error type for engine construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A construction parameter is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A required input stream is empty.
    #[error("configuration error: {0}")]
    ConfigurationError(String),
}
