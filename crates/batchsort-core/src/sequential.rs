//! Single-path sorting strategy.

use async_trait::async_trait;

use crate::error::Result;
use crate::strategy::SortStrategy;
use crate::types::{Batch, Sequence};

/// Sorts each sequence in order, in place, on the caller's storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSort;

impl SequentialSort {
    /// Sorts the batch synchronously.
    pub fn sort_in_place(batch: &mut [Sequence]) {
        for sequence in batch.iter_mut() {
            sequence.sort_unstable();
        }
    }
}

#[async_trait]
impl SortStrategy for SequentialSort {
    fn name(&self) -> &'static str {
        "sequential"
    }

    async fn sort_all(&self, mut batch: Batch) -> Result<Batch> {
        Self::sort_in_place(&mut batch);
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sorts_each_sequence() {
        let batch = vec![vec![3, 1, 2], vec![], vec![5], vec![-1, 7, -9, 7]];
        let sorted = SequentialSort.sort_all(batch).await.unwrap();
        assert_eq!(sorted, vec![vec![1, 2, 3], vec![], vec![5], vec![-9, -1, 7, 7]]);
    }

    #[test]
    fn test_reuses_storage() {
        let mut batch = vec![Vec::with_capacity(16)];
        batch[0].extend([4, 2, 9]);
        let ptr = batch[0].as_ptr();

        SequentialSort::sort_in_place(&mut batch);

        assert_eq!(batch[0].as_ptr(), ptr);
        assert_eq!(batch[0], vec![2, 4, 9]);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        assert!(SequentialSort.sort_all(Vec::new()).await.unwrap().is_empty());
    }
}
