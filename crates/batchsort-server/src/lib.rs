//! # Batchsort Server
//!
//! HTTP API server for the batchsort strategies.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod handlers;
pub mod server;

pub use server::{AppState, Server, ServerConfig};
