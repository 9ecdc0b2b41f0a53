//! Repository for responses.

use formpulse_core::error::CoreError;
use formpulse_core::response::{self, Response};
use formpulse_core::types::EntityId;

use crate::models::response::SubmitResponse;
use crate::Store;

/// Submission and listing operations for responses.
pub struct ResponseRepo;

impl ResponseRepo {
    /// Validate and persist a submission against its survey.
    ///
    /// The survey must exist and be published. Answers are validated
    /// against the survey definition before anything is stored, so a
    /// rejected submission leaves no trace.
    pub async fn submit(
        store: &Store,
        survey_id: EntityId,
        input: &SubmitResponse,
    ) -> Result<Response, CoreError> {
        let survey = {
            let surveys = store.surveys.read().await;
            surveys.get(&survey_id).cloned()
        }
        .ok_or(CoreError::NotFound {
            entity: "Survey",
            id: survey_id,
        })?;

        if !survey.published {
            return Err(CoreError::Conflict(
                "Survey is not published and cannot accept responses".to_string(),
            ));
        }
        response::validate_answers(&survey, &input.answers)?;

        let created = Response::new(survey_id, input.answers.clone(), input.metadata.clone());
        store.responses.write().await.push(created.clone());

        tracing::debug!(response_id = %created.id, survey_id = %survey_id, "Stored response");
        Ok(created)
    }

    /// List a survey's responses in submission order.
    pub async fn list_for_survey(store: &Store, survey_id: EntityId) -> Vec<Response> {
        store
            .responses
            .read()
            .await
            .iter()
            .filter(|response| response.survey_id == survey_id)
            .cloned()
            .collect()
    }

    /// Count a survey's responses.
    pub async fn count_for_survey(store: &Store, survey_id: EntityId) -> u64 {
        store
            .responses
            .read()
            .await
            .iter()
            .filter(|response| response.survey_id == survey_id)
            .count() as u64
    }
}
