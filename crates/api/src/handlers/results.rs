//! Handler for aggregated survey results.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use formpulse_core::aggregate::{self, ResultsSummary, TallyMap};
use formpulse_core::error::CoreError;
use formpulse_core::types::EntityId;
use formpulse_store::repositories::{ResponseRepo, SurveyRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Aggregated results payload: headline summary plus per-question
/// tallies keyed by question id. Text and email questions have no
/// tally entry; their answers appear verbatim in the response listing.
#[derive(Debug, Serialize)]
pub struct SurveyResults {
    pub summary: ResultsSummary,
    pub tallies: TallyMap,
}

/// GET /api/v1/surveys/{id}/results
///
/// Aggregate a survey's responses into chart-ready tallies.
pub async fn get_results(
    State(state): State<AppState>,
    Path(survey_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let survey = SurveyRepo::find_by_id(&state.store, survey_id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Survey",
            id: survey_id,
        }))?;

    let responses = ResponseRepo::list_for_survey(&state.store, survey_id).await;

    let results = SurveyResults {
        summary: aggregate::summarize(&survey, &responses),
        tallies: aggregate::aggregate(&survey, &responses),
    };

    Ok(Json(DataResponse { data: results }))
}
