//! Common types used across batchsort.

use std::time::Duration;

/// One ordered collection of integers to be sorted.
pub type Sequence = Vec<i64>;

/// Ordered collection of sequences submitted in one request.
///
/// Position is significant: `output[i]` always corresponds to `input[i]`.
pub type Batch = Vec<Sequence>;

/// Wall-clock duration of a full strategy invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Timing(pub Duration);

impl Timing {
    /// Creates a timing from a measured duration.
    #[must_use]
    pub fn new(elapsed: Duration) -> Self {
        Self(elapsed)
    }

    /// Returns the elapsed time in whole nanoseconds.
    #[must_use]
    pub fn as_nanos(&self) -> u128 {
        self.0.as_nanos()
    }
}

impl std::fmt::Display for Timing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_nanos())
    }
}

impl From<Duration> for Timing {
    fn from(elapsed: Duration) -> Self {
        Self(elapsed)
    }
}

/// Returns `true` if every sequence in the batch is non-decreasing.
#[must_use]
pub fn is_batch_sorted(batch: &[Sequence]) -> bool {
    batch.iter().all(|seq| seq.windows(2).all(|w| w[0] <= w[1]))
}
