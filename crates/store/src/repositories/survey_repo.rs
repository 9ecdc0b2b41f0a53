//! Repository for surveys and their question lists.

use formpulse_core::error::CoreError;
use formpulse_core::survey::Survey;
use formpulse_core::types::EntityId;

use crate::models::survey::{
    CreateQuestion, CreateSurvey, ReorderQuestions, StatusFilter, UpdateQuestion, UpdateSurvey,
};
use crate::Store;

/// CRUD and editing operations for surveys.
///
/// Every mutation follows the same shape: clone the stored survey,
/// rewrite the clone, validate, refresh `updated_at`, and swap it back
/// in. Readers holding earlier clones are unaffected.
pub struct SurveyRepo;

impl SurveyRepo {
    /// Insert a new draft survey, returning the created value.
    pub async fn create(store: &Store, input: &CreateSurvey) -> Result<Survey, CoreError> {
        let mut survey = Survey::new_draft();
        if let Some(title) = &input.title {
            survey.title = title.clone();
        }
        if let Some(description) = &input.description {
            survey.description = Some(description.clone());
        }
        if let Some(theme) = &input.theme {
            survey.theme = theme.clone();
        }
        survey.validate()?;

        store.surveys.write().await.insert(survey.id, survey.clone());
        Ok(survey)
    }

    /// List surveys matching the filter, most recently updated first.
    pub async fn list(store: &Store, filter: StatusFilter) -> Vec<Survey> {
        let surveys = store.surveys.read().await;
        let mut listed: Vec<Survey> = surveys
            .values()
            .filter(|survey| match filter {
                StatusFilter::All => true,
                StatusFilter::Published => survey.published,
                StatusFilter::Drafts => !survey.published,
            })
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        listed
    }

    /// Find a survey by id.
    pub async fn find_by_id(store: &Store, id: EntityId) -> Option<Survey> {
        store.surveys.read().await.get(&id).cloned()
    }

    /// Save the editor's working copy over the stored survey.
    pub async fn update(
        store: &Store,
        id: EntityId,
        input: &UpdateSurvey,
    ) -> Result<Survey, CoreError> {
        Self::with_survey(store, id, |survey| {
            if let Some(title) = &input.title {
                survey.title = title.clone();
            }
            if let Some(description) = &input.description {
                survey.description = Some(description.clone());
            }
            if let Some(questions) = &input.questions {
                survey.questions = questions.clone();
            }
            if let Some(theme) = &input.theme {
                survey.theme = theme.clone();
            }
            Ok(())
        })
        .await
    }

    /// Delete a survey and all of its responses.
    pub async fn delete(store: &Store, id: EntityId) -> bool {
        let removed = store.surveys.write().await.remove(&id).is_some();
        if removed {
            store
                .responses
                .write()
                .await
                .retain(|response| response.survey_id != id);
        }
        removed
    }

    /// Set the publication flag.
    pub async fn set_published(
        store: &Store,
        id: EntityId,
        published: bool,
    ) -> Result<Survey, CoreError> {
        Self::with_survey(store, id, |survey| {
            survey.published = published;
            Ok(())
        })
        .await
    }

    /// Duplicate a survey into a fresh unpublished draft.
    pub async fn duplicate(store: &Store, id: EntityId) -> Result<Survey, CoreError> {
        let mut surveys = store.surveys.write().await;
        let original = surveys.get(&id).ok_or(CoreError::NotFound {
            entity: "Survey",
            id,
        })?;
        let copy = original.duplicate();
        surveys.insert(copy.id, copy.clone());
        Ok(copy)
    }

    /// Append a question, returning the updated survey (the new
    /// question is last).
    pub async fn add_question(
        store: &Store,
        survey_id: EntityId,
        input: &CreateQuestion,
    ) -> Result<Survey, CoreError> {
        let question = input.clone().into_question();

        Self::with_survey(store, survey_id, |survey| {
            survey.add_question(question);
            Ok(())
        })
        .await
    }

    /// Update a question in place, returning the updated survey.
    pub async fn update_question(
        store: &Store,
        survey_id: EntityId,
        question_id: EntityId,
        input: &UpdateQuestion,
    ) -> Result<Survey, CoreError> {
        Self::with_survey(store, survey_id, |survey| {
            let mut question = survey
                .question(question_id)
                .ok_or(CoreError::NotFound {
                    entity: "Question",
                    id: question_id,
                })?
                .clone();
            input.apply(&mut question);
            survey.replace_question(question)
        })
        .await
    }

    /// Remove a question, returning the updated survey.
    pub async fn remove_question(
        store: &Store,
        survey_id: EntityId,
        question_id: EntityId,
    ) -> Result<Survey, CoreError> {
        Self::with_survey(store, survey_id, |survey| survey.remove_question(question_id)).await
    }

    /// Reorder the question list, returning the updated survey.
    pub async fn reorder_questions(
        store: &Store,
        survey_id: EntityId,
        input: &ReorderQuestions,
    ) -> Result<Survey, CoreError> {
        Self::with_survey(store, survey_id, |survey| {
            survey.reorder_questions(&input.order)
        })
        .await
    }

    /// Clone-mutate-validate-swap helper shared by every survey
    /// mutation. Refreshes `updated_at` exactly once on success.
    async fn with_survey<F>(store: &Store, id: EntityId, mutate: F) -> Result<Survey, CoreError>
    where
        F: FnOnce(&mut Survey) -> Result<(), CoreError>,
    {
        let mut surveys = store.surveys.write().await;
        let current = surveys.get(&id).ok_or(CoreError::NotFound {
            entity: "Survey",
            id,
        })?;

        let mut survey = current.clone();
        mutate(&mut survey)?;
        survey.validate()?;
        survey.touch();

        surveys.insert(id, survey.clone());
        Ok(survey)
    }
}
