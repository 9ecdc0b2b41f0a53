//! Handlers for survey CRUD, publishing, duplication, and sharing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use formpulse_core::error::CoreError;
use formpulse_core::survey::share_link;
use formpulse_core::types::EntityId;
use formpulse_store::models::survey::{
    CreateSurvey, StatusFilter, SurveyWithResponseCount, UpdateSurvey,
};
use formpulse_store::repositories::{ResponseRepo, SurveyRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the survey listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListSurveysQuery {
    /// Publication filter, mirroring the dashboard tabs.
    #[serde(default)]
    pub status: StatusFilter,
}

/// Share link payload.
#[derive(Debug, Serialize)]
pub struct ShareLink {
    pub url: String,
}

/// GET /api/v1/surveys
///
/// List surveys with their response counts, filtered by publication
/// status (`all`, `published`, `drafts`).
pub async fn list_surveys(
    State(state): State<AppState>,
    Query(query): Query<ListSurveysQuery>,
) -> AppResult<impl IntoResponse> {
    let surveys = SurveyRepo::list(&state.store, query.status).await;

    let mut data = Vec::with_capacity(surveys.len());
    for survey in surveys {
        let response_count = ResponseRepo::count_for_survey(&state.store, survey.id).await;
        data.push(SurveyWithResponseCount {
            survey,
            response_count,
        });
    }

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/surveys
///
/// Create a new draft survey.
pub async fn create_survey(
    State(state): State<AppState>,
    Json(input): Json<CreateSurvey>,
) -> AppResult<impl IntoResponse> {
    let survey = SurveyRepo::create(&state.store, &input).await?;

    tracing::info!(survey_id = %survey.id, title = %survey.title, "Survey created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: survey })))
}

/// GET /api/v1/surveys/{id}
///
/// Retrieve a single survey by id.
pub async fn get_survey(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let survey = SurveyRepo::find_by_id(&state.store, survey_id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Survey",
            id: survey_id,
        }))?;

    Ok(Json(DataResponse { data: survey }))
}

/// PUT /api/v1/surveys/{id}
///
/// Save the editor's working copy over the stored survey.
pub async fn update_survey(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
    Json(input): Json<UpdateSurvey>,
) -> AppResult<impl IntoResponse> {
    let survey = SurveyRepo::update(&state.store, survey_id, &input).await?;

    tracing::info!(survey_id = %survey.id, "Survey updated");

    Ok(Json(DataResponse { data: survey }))
}

/// DELETE /api/v1/surveys/{id}
///
/// Delete a survey and its responses.
pub async fn delete_survey(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SurveyRepo::delete(&state.store, survey_id).await;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Survey",
            id: survey_id,
        }));
    }

    tracing::info!(survey_id = %survey_id, "Survey deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/surveys/{id}/publish
///
/// Open the survey for response collection.
pub async fn publish_survey(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let survey = SurveyRepo::set_published(&state.store, survey_id, true).await?;

    tracing::info!(survey_id = %survey.id, "Survey published");

    Ok(Json(DataResponse { data: survey }))
}

/// POST /api/v1/surveys/{id}/unpublish
///
/// Close the survey to new responses.
pub async fn unpublish_survey(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let survey = SurveyRepo::set_published(&state.store, survey_id, false).await?;

    tracing::info!(survey_id = %survey.id, "Survey unpublished");

    Ok(Json(DataResponse { data: survey }))
}

/// POST /api/v1/surveys/{id}/duplicate
///
/// Duplicate a survey into a fresh unpublished draft.
pub async fn duplicate_survey(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let copy = SurveyRepo::duplicate(&state.store, survey_id).await?;

    tracing::info!(survey_id = %survey_id, copy_id = %copy.id, "Survey duplicated");

    Ok((StatusCode::CREATED, Json(DataResponse { data: copy })))
}

/// GET /api/v1/surveys/{id}/share
///
/// Derive the public response-collection URL for a survey.
pub async fn share_survey(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let survey = SurveyRepo::find_by_id(&state.store, survey_id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Survey",
            id: survey_id,
        }))?;

    let url = share_link(&state.config.public_origin, survey.id);

    Ok(Json(DataResponse {
        data: ShareLink { url },
    }))
}
