//! Decode, sort and time a single batch payload.

use std::time::Instant;

use crate::error::Result;
use crate::request::SortRequest;
use crate::response::SortResponse;
use crate::strategy::SortStrategy;
use crate::types::Timing;

/// Decodes `body`, runs `strategy` over the batch and builds the response.
///
/// Timing covers the strategy invocation only. Nothing is sorted if the
/// body fails to decode.
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] for malformed bodies, or whatever error
/// the strategy reports.
pub async fn process(strategy: &dyn SortStrategy, body: &[u8]) -> Result<SortResponse> {
    let batch = SortRequest::from_slice(body)?.into_batch();
    let sequences = batch.len();

    let start = Instant::now();
    let sorted = strategy.sort_all(batch).await?;
    let timing = Timing::new(start.elapsed());

    tracing::debug!(
        strategy = strategy.name(),
        sequences,
        time_ns = %timing,
        "Batch sorted"
    );

    Ok(SortResponse::new(sorted, timing))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::concurrent::ConcurrentSort;
    use crate::sequential::SequentialSort;
    use crate::strategy::StrategyKind;
    use crate::types::{is_batch_sorted, Batch};
    use crate::Error;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap()
    }

    fn batch_strategy() -> impl Strategy<Value = Batch> {
        prop::collection::vec(prop::collection::vec(any::<i64>(), 0..64), 0..24)
    }

    fn sorted_copy(seq: &[i64]) -> Vec<i64> {
        let mut copy = seq.to_vec();
        copy.sort();
        copy
    }

    #[tokio::test]
    async fn test_example_on_both_strategies() {
        for kind in [StrategyKind::Sequential, StrategyKind::Concurrent] {
            let strategy = kind.build();
            let resp = process(strategy.as_ref(), br#"{"to_sort":[[3,1,2],[],[5]]}"#)
                .await
                .unwrap();

            assert_eq!(resp.sorted_arrays, vec![vec![1, 2, 3], vec![], vec![5]]);
            assert!(resp.time_ns.parse::<u128>().is_ok(), "time_ns: {}", resp.time_ns);
        }
    }

    #[tokio::test]
    async fn test_absent_batch_is_empty() {
        let resp = process(&ConcurrentSort, b"{}").await.unwrap();
        assert!(resp.sorted_arrays.is_empty());
    }

    #[tokio::test]
    async fn test_decode_error_skips_sorting() {
        struct Unreachable;

        #[async_trait::async_trait]
        impl SortStrategy for Unreachable {
            fn name(&self) -> &'static str {
                "unreachable"
            }

            async fn sort_all(&self, _batch: Batch) -> Result<Batch> {
                panic!("strategy invoked for a malformed body");
            }
        }

        let err = process(&Unreachable, br#"{"to_sort":"not-an-array"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    proptest! {
        #[test]
        fn prop_sorting_preserves_shape_and_elements(batch in batch_strategy()) {
            let rt = runtime();
            for kind in [StrategyKind::Sequential, StrategyKind::Concurrent] {
                let sorted = rt.block_on(kind.build().sort_all(batch.clone())).unwrap();

                prop_assert_eq!(sorted.len(), batch.len());
                prop_assert!(is_batch_sorted(&sorted));
                for (out, input) in sorted.iter().zip(&batch) {
                    prop_assert_eq!(out, &sorted_copy(input));
                }
            }
        }

        #[test]
        fn prop_strategies_agree(batch in batch_strategy()) {
            let rt = runtime();
            let sequential = rt.block_on(SequentialSort.sort_all(batch.clone())).unwrap();
            let concurrent = rt.block_on(ConcurrentSort.sort_all(batch)).unwrap();
            prop_assert_eq!(sequential, concurrent);
        }

        #[test]
        fn prop_sorting_is_idempotent(batch in batch_strategy()) {
            let rt = runtime();
            for kind in [StrategyKind::Sequential, StrategyKind::Concurrent] {
                let strategy = kind.build();
                let once = rt.block_on(strategy.sort_all(batch.clone())).unwrap();
                let twice = rt.block_on(strategy.sort_all(once.clone())).unwrap();
                prop_assert_eq!(once, twice);
            }
        }
    }
}
