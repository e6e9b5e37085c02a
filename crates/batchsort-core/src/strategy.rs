//! Pluggable batch sorting strategies.

use std::sync::Arc;

use async_trait::async_trait;

use crate::concurrent::ConcurrentSort;
use crate::error::{Error, Result};
use crate::sequential::SequentialSort;
use crate::types::Batch;

/// Sorts every sequence of a batch ascending.
///
/// Implementations must keep the batch length, every sequence's length and
/// element multiset, and the relative order of sequences. Either the whole
/// sorted batch is returned or an error, never a partial result.
#[async_trait]
pub trait SortStrategy: Send + Sync {
    /// Returns the strategy name.
    fn name(&self) -> &'static str;

    /// Sorts all sequences of `batch`.
    async fn sort_all(&self, batch: Batch) -> Result<Batch>;
}

/// The built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// One execution path, in place.
    #[default]
    Sequential,
    /// One unit of work per sequence, joined before returning.
    Concurrent,
}

impl StrategyKind {
    /// Returns the canonical name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Concurrent => "concurrent",
        }
    }

    /// Builds a shareable instance of this strategy.
    #[must_use]
    pub fn build(&self) -> Arc<dyn SortStrategy> {
        match self {
            Self::Sequential => Arc::new(SequentialSort),
            Self::Concurrent => Arc::new(ConcurrentSort),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" | "single" => Ok(Self::Sequential),
            "concurrent" => Ok(Self::Concurrent),
            _ => Err(Error::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}
