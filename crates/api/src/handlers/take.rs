//! Handler for the public share-link route.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use formpulse_core::error::CoreError;
use formpulse_core::types::EntityId;
use formpulse_store::repositories::SurveyRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /s/{id}
///
/// Resolve a share link to its survey. Only published surveys are
/// served; drafts stay private until published.
pub async fn get_shared_survey(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let survey = SurveyRepo::find_by_id(&state.store, survey_id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Survey",
            id: survey_id,
        }))?;

    if !survey.published {
        return Err(AppError::Core(CoreError::Conflict(
            "Survey is not published".to_string(),
        )));
    }

    Ok(Json(DataResponse { data: survey }))
}
