//! Route definitions for survey CRUD and question editing.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{questions, surveys};
use crate::state::AppState;

/// Survey routes mounted under `/api/v1`.
///
/// ```text
/// GET    /surveys                               -> list_surveys
/// POST   /surveys                               -> create_survey
/// GET    /surveys/{id}                          -> get_survey
/// PUT    /surveys/{id}                          -> update_survey
/// DELETE /surveys/{id}                          -> delete_survey
/// POST   /surveys/{id}/publish                  -> publish_survey
/// POST   /surveys/{id}/unpublish                -> unpublish_survey
/// POST   /surveys/{id}/duplicate                -> duplicate_survey
/// GET    /surveys/{id}/share                    -> share_survey
/// POST   /surveys/{id}/questions                -> add_question
/// POST   /surveys/{id}/questions/reorder        -> reorder_questions
/// PUT    /surveys/{id}/questions/{question_id}  -> update_question
/// DELETE /surveys/{id}/questions/{question_id}  -> remove_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/surveys",
            get(surveys::list_surveys).post(surveys::create_survey),
        )
        .route(
            "/surveys/{id}",
            get(surveys::get_survey)
                .put(surveys::update_survey)
                .delete(surveys::delete_survey),
        )
        .route("/surveys/{id}/publish", post(surveys::publish_survey))
        .route("/surveys/{id}/unpublish", post(surveys::unpublish_survey))
        .route("/surveys/{id}/duplicate", post(surveys::duplicate_survey))
        .route("/surveys/{id}/share", get(surveys::share_survey))
        .route("/surveys/{id}/questions", post(questions::add_question))
        .route(
            "/surveys/{id}/questions/reorder",
            post(questions::reorder_questions),
        )
        .route(
            "/surveys/{id}/questions/{question_id}",
            put(questions::update_question).delete(questions::remove_question),
        )
}
