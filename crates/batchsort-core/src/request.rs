//! Incoming sort payloads.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Batch;

/// Body of a sort request: `{"to_sort": [[int, ...], ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRequest {
    /// Sequences to sort. Absent or `null` means an empty batch.
    #[serde(default)]
    pub to_sort: Option<Batch>,
}

impl SortRequest {
    /// Creates a request for the given batch.
    #[must_use]
    pub fn new(batch: Batch) -> Self {
        Self {
            to_sort: Some(batch),
        }
    }

    /// Decodes a request from a raw JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body is not a JSON object whose
    /// `to_sort` field is an array of integer arrays.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| Error::decode(e.to_string()))
    }

    /// Consumes the request, returning its batch.
    #[must_use]
    pub fn into_batch(self) -> Batch {
        self.to_sort.unwrap_or_default()
    }
}
