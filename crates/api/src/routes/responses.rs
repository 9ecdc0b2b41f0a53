//! Route definitions for response collection and results.

use axum::routing::get;
use axum::Router;

use crate::handlers::{responses, results};
use crate::state::AppState;

/// Response and results routes mounted under `/api/v1`.
///
/// ```text
/// GET  /surveys/{id}/responses  -> list_responses
/// POST /surveys/{id}/responses  -> submit_response
/// GET  /surveys/{id}/results    -> get_results
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/surveys/{id}/responses",
            get(responses::list_responses).post(responses::submit_response),
        )
        .route("/surveys/{id}/results", get(results::get_results))
}
