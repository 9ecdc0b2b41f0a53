//! The public share-link route (mounted at the root, not under
//! `/api/v1`), matching the URL shape produced by the share action.

use axum::routing::get;
use axum::Router;

use crate::handlers::take;
use crate::state::AppState;

/// ```text
/// GET /s/{id} -> get_shared_survey
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/s/{id}", get(take::get_shared_survey))
}
