//! Outgoing sort payloads.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Batch, Timing};

/// Body of a successful sort response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortResponse {
    /// The sorted batch, in input order.
    pub sorted_arrays: Batch,
    /// Strategy wall-clock time in nanoseconds, as a decimal string.
    pub time_ns: String,
}

impl SortResponse {
    /// Creates a response from a sorted batch and its timing.
    #[must_use]
    pub fn new(sorted_arrays: Batch, timing: Timing) -> Self {
        Self {
            sorted_arrays,
            time_ns: timing.to_string(),
        }
    }

    /// Encodes the response as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_time_is_string() {
        let resp = SortResponse::new(vec![vec![1, 2]], Timing::new(Duration::from_nanos(42)));
        let value: serde_json::Value = serde_json::from_slice(&resp.to_json().unwrap()).unwrap();

        assert_eq!(value["time_ns"], serde_json::json!("42"));
        assert_eq!(value["sorted_arrays"], serde_json::json!([[1, 2]]));
    }

    #[test]
    fn test_empty_batch_encodes_as_array() {
        let resp = SortResponse::new(Vec::new(), Timing::default());
        let text = String::from_utf8(resp.to_json().unwrap()).unwrap();
        assert_eq!(text, r#"{"sorted_arrays":[],"time_ns":"0"}"#);
    }
}
