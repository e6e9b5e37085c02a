//! Fan-out/fan-in sorting strategy.
//!
//! Every sequence of the batch becomes its own unit of work on tokio's
//! blocking pool. A unit owns its sequence outright while it sorts, so no
//! other unit (and no caller) can observe it half sorted. The strategy only
//! returns once every unit has been joined and written back to the slot it
//! came from.

use std::collections::HashMap;
use std::hash::Hash;

use async_trait::async_trait;
use tokio::task::{Id, JoinSet};

use crate::error::{Error, Result};
use crate::strategy::SortStrategy;
use crate::types::{Batch, Sequence};

/// Sorts each sequence as an independently scheduled unit of work.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcurrentSort;

#[async_trait]
impl SortStrategy for ConcurrentSort {
    fn name(&self) -> &'static str {
        "concurrent"
    }

    async fn sort_all(&self, batch: Batch) -> Result<Batch> {
        fan_out(batch, |sequence| sequence.sort_unstable()).await
    }
}

/// Runs `unit` over every sequence of `batch` in parallel and joins them all.
///
/// A unit that fails to complete (panic, cancellation) fails the whole batch.
pub(crate) async fn fan_out<F>(mut batch: Batch, unit: F) -> Result<Batch>
where
    F: Fn(&mut Sequence) + Copy + Send + 'static,
{
    let mut units = JoinSet::new();
    let mut slots: HashMap<Id, usize> = HashMap::with_capacity(batch.len());

    for (index, slot) in batch.iter_mut().enumerate() {
        let mut private = std::mem::take(slot);
        let handle = units.spawn_blocking(move || {
            unit(&mut private);
            (index, private)
        });
        slots.insert(handle.id(), index);
    }

    tracing::trace!(units = units.len(), "Sort units spawned");

    // Dropping `units` on the error path aborts whatever has not started yet.
    while let Some(joined) = units.join_next().await {
        match joined {
            Ok((index, sorted)) => batch[index] = sorted,
            Err(e) => {
                let index = slot_of(&slots, &e.id())?;
                tracing::error!(index, error = %e, "Sort unit failed");
                return Err(Error::scheduling(index, e.to_string()));
            },
        }
    }

    Ok(batch)
}

/// Looks up the batch slot a unit was spawned for.
fn slot_of<K>(slots: &HashMap<K, usize>, id: &K) -> Result<usize>
where
    K: Eq + Hash + std::fmt::Display,
{
    slots
        .get(id)
        .copied()
        .ok_or_else(|| Error::internal(format!("no batch slot recorded for task {id}")))
}
