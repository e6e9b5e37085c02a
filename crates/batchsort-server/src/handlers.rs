//! Request handlers.
//!
//! Bodies are read raw and decoded here rather than through axum's `Json`
//! extractor, so content type is ignored and every decode failure maps to
//! the same plain-text 400.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use batchsort_core::{Error, SortStrategy};

use crate::server::AppState;

/// Body returned for any malformed request payload.
pub const INVALID_PAYLOAD: &str = "Invalid JSON payload";

pub(crate) async fn health() -> &'static str {
    "OK"
}

pub(crate) async fn process_single(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    handle_request(state.single.as_ref(), &body).await
}

pub(crate) async fn process_concurrent(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Response {
    handle_request(state.concurrent.as_ref(), &body).await
}

/// Runs one strategy over a raw request body and encodes the outcome.
pub async fn handle_request(strategy: &dyn SortStrategy, body: &[u8]) -> Response {
    let response = match batchsort_core::process(strategy, body).await {
        Ok(response) => response,
        Err(e) => return error_response(&e),
    };

    match response.to_json() {
        Ok(json) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json,
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Maps an error onto a plain-text response.
pub fn error_response(err: &Error) -> Response {
    match err {
        Error::Decode { message } => {
            tracing::warn!(error = %message, "Rejected request payload");
            (StatusCode::BAD_REQUEST, INVALID_PAYLOAD).into_response()
        },
        other => {
            tracing::error!(error = %other, "Request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
        },
    }
}
