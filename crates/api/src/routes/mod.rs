pub mod health;
pub mod responses;
pub mod surveys;
pub mod take;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /surveys                                 list, create
/// /surveys/{id}                            get, update, delete
/// /surveys/{id}/publish                    publish (POST)
/// /surveys/{id}/unpublish                  unpublish (POST)
/// /surveys/{id}/duplicate                  duplicate (POST)
/// /surveys/{id}/share                      share URL (GET)
///
/// /surveys/{id}/questions                  add question (POST)
/// /surveys/{id}/questions/reorder          reorder (POST)
/// /surveys/{id}/questions/{question_id}    update, remove
///
/// /surveys/{id}/responses                  list, submit
/// /surveys/{id}/results                    summary + tallies (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(surveys::router())
        .merge(responses::router())
}
