//! Handlers for question editing within a survey.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use formpulse_core::types::EntityId;
use formpulse_store::models::survey::{CreateQuestion, ReorderQuestions, UpdateQuestion};
use formpulse_store::repositories::SurveyRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/surveys/{id}/questions
///
/// Append a question; returns the updated survey (the new question is
/// last).
pub async fn add_question(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
    Json(input): Json<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    let survey = SurveyRepo::add_question(&state.store, survey_id, &input).await?;

    tracing::info!(
        survey_id = %survey.id,
        questions = survey.questions.len(),
        "Question added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: survey })))
}

/// PUT /api/v1/surveys/{id}/questions/{question_id}
///
/// Update a question in place.
pub async fn update_question(
    State(state): State<AppState>,
    Path((survey_id, question_id)): Path<(EntityId, EntityId)>,
    Json(input): Json<UpdateQuestion>,
) -> AppResult<impl IntoResponse> {
    let survey = SurveyRepo::update_question(&state.store, survey_id, question_id, &input).await?;

    tracing::info!(survey_id = %survey.id, question_id = %question_id, "Question updated");

    Ok(Json(DataResponse { data: survey }))
}

/// DELETE /api/v1/surveys/{id}/questions/{question_id}
///
/// Remove a question from the survey.
pub async fn remove_question(
    State(state): State<AppState>,
    Path((survey_id, question_id)): Path<(EntityId, EntityId)>,
) -> AppResult<impl IntoResponse> {
    let survey = SurveyRepo::remove_question(&state.store, survey_id, question_id).await?;

    tracing::info!(survey_id = %survey.id, question_id = %question_id, "Question removed");

    Ok(Json(DataResponse { data: survey }))
}

/// POST /api/v1/surveys/{id}/questions/reorder
///
/// Reorder the question list to the given permutation of question ids.
pub async fn reorder_questions(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
    Json(input): Json<ReorderQuestions>,
) -> AppResult<impl IntoResponse> {
    let survey = SurveyRepo::reorder_questions(&state.store, survey_id, &input).await?;

    tracing::info!(survey_id = %survey.id, "Questions reordered");

    Ok(Json(DataResponse { data: survey }))
}
