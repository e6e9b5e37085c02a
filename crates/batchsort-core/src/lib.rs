//! # Batchsort Core
//!
//! Core types and sorting strategies for batchsort.
//!
//! A batch is an ordered list of integer sequences. Each strategy sorts
//! every sequence ascending while keeping the batch layout intact:
//! - [`SequentialSort`] walks the batch on one execution path, in place
//! - [`ConcurrentSort`] fans each sequence out as its own unit of work and
//!   joins them all before returning
//!
//! [`process`] ties decoding, a timed strategy call and the response
//! payload together.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod concurrent;
pub mod error;
pub mod process;
pub mod request;
pub mod response;
pub mod sequential;
pub mod strategy;
pub mod types;

pub use concurrent::ConcurrentSort;
pub use error::{Error, Result};
pub use process::process;
pub use request::SortRequest;
pub use response::SortResponse;
pub use sequential::SequentialSort;
pub use strategy::{SortStrategy, StrategyKind};
pub use types::*;
