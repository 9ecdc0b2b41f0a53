//! Handlers for response collection.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use formpulse_core::types::EntityId;
use formpulse_store::models::response::SubmitResponse;
use formpulse_store::repositories::ResponseRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/surveys/{id}/responses
///
/// List a survey's responses in submission order.
pub async fn list_responses(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let responses = ResponseRepo::list_for_survey(&state.store, survey_id).await;

    Ok(Json(DataResponse { data: responses }))
}

/// POST /api/v1/surveys/{id}/responses
///
/// Submit a response to a published survey. The server assigns the id
/// and timestamp, and records the client's user agent when the payload
/// does not carry one.
pub async fn submit_response(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
    headers: HeaderMap,
    Json(mut input): Json<SubmitResponse>,
) -> AppResult<impl IntoResponse> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    if let Some(agent) = user_agent {
        let metadata = input.metadata.get_or_insert_with(Default::default);
        if metadata.user_agent.is_none() {
            metadata.user_agent = Some(agent);
        }
    }

    let response = ResponseRepo::submit(&state.store, survey_id, &input).await?;

    tracing::info!(response_id = %response.id, survey_id = %survey_id, "Response submitted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}
