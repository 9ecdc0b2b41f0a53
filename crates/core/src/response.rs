//! Response types and submission validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::survey::{QuestionKind, Survey};
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Answer values
// ---------------------------------------------------------------------------

/// A single answer value.
///
/// The JSON representation is untagged: a string for text, email, and
/// single-choice answers; a string array for multiple-choice answers;
/// an integer for rating answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Selection(Vec<String>),
    Rating(i64),
}

impl AnswerValue {
    /// Whether the value counts as unanswered for `required` checks.
    /// Blank strings and empty selections do not satisfy a required
    /// question.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(text) => text.trim().is_empty(),
            AnswerValue::Selection(values) => values.is_empty(),
            AnswerValue::Rating(_) => false,
        }
    }

    /// Whether the value's shape matches a question kind.
    pub fn matches(&self, kind: &QuestionKind) -> bool {
        matches!(
            (self, kind),
            (AnswerValue::Text(_), QuestionKind::Text)
                | (AnswerValue::Text(_), QuestionKind::Email)
                | (AnswerValue::Text(_), QuestionKind::SingleChoice { .. })
                | (AnswerValue::Selection(_), QuestionKind::MultipleChoice { .. })
                | (AnswerValue::Rating(_), QuestionKind::Rating { .. })
        )
    }
}

/// One answered question within a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: EntityId,
    pub value: AnswerValue,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Client-side collection context attached to a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    /// Wall-clock seconds between survey load and submission.
    pub duration: Option<u32>,
}

/// One respondent's submission to a survey. Created atomically at
/// submission time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub id: EntityId,
    pub survey_id: EntityId,
    pub answers: Vec<Answer>,
    pub created_at: Timestamp,
    pub metadata: Option<ResponseMetadata>,
}

impl Response {
    /// Create a response with a fresh id and the current time.
    pub fn new(
        survey_id: EntityId,
        answers: Vec<Answer>,
        metadata: Option<ResponseMetadata>,
    ) -> Self {
        Self {
            id: EntityId::new_v4(),
            survey_id,
            answers,
            created_at: chrono::Utc::now(),
            metadata,
        }
    }

    /// The answer for a question, if any. A well-formed response holds
    /// at most one answer per question; the first match wins.
    pub fn answer(&self, question_id: EntityId) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }
}

// ---------------------------------------------------------------------------
// Submission validation
// ---------------------------------------------------------------------------

/// Validate a set of submitted answers against the survey definition.
///
/// Enforced: each answer references a question of the survey (at most
/// once), each value's shape matches its question's kind, and every
/// required question carries a non-empty answer.
///
/// Not enforced here: option membership and rating range. Values
/// outside a question's declared domain are stored as-is and dropped
/// at aggregation time.
pub fn validate_answers(survey: &Survey, answers: &[Answer]) -> Result<(), CoreError> {
    for (index, answer) in answers.iter().enumerate() {
        let Some(question) = survey.question(answer.question_id) else {
            return Err(CoreError::Validation(format!(
                "Answer references unknown question {}",
                answer.question_id
            )));
        };
        if answers[..index]
            .iter()
            .any(|a| a.question_id == answer.question_id)
        {
            return Err(CoreError::Validation(format!(
                "Multiple answers for question {}",
                answer.question_id
            )));
        }
        if !answer.value.matches(&question.kind) {
            return Err(CoreError::Validation(format!(
                "Answer to question {} does not match its type",
                answer.question_id
            )));
        }
    }

    for question in survey.questions.iter().filter(|q| q.required) {
        let answered = answers
            .iter()
            .any(|a| a.question_id == question.id && !a.value.is_empty());
        if !answered {
            return Err(CoreError::Validation(format!(
                "Question {} is required",
                question.id
            )));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
