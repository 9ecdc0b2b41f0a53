//! The survey-taking flow.
//!
//! Models the one-question-at-a-time wizard as an explicit state
//! machine instead of an ad hoc index counter, so the boundary
//! behaviour (first/last question, required gate, post-submit) is
//! enforced in one place and testable.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::response::{self, Answer, AnswerValue};
use crate::survey::{Question, Survey};
use crate::types::{EntityId, Timestamp};

/// Where a respondent is within the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakerState {
    /// Viewing the question at `index`, bounded by
    /// `0..survey.questions.len()`.
    InProgress { index: usize },
    /// The response has been handed off; the flow is finished.
    Submitted,
}

/// The answers and elapsed time produced by a completed flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Answers in question order, one per answered question.
    pub answers: Vec<Answer>,
    /// Whole seconds between `start` and `submit`.
    pub duration: u32,
}

/// A respondent's in-progress run through one survey.
#[derive(Debug, Clone)]
pub struct TakerFlow {
    survey: Survey,
    state: TakerState,
    answers: HashMap<EntityId, AnswerValue>,
    started_at: Timestamp,
}

impl TakerFlow {
    /// Start a flow on the first question of a survey.
    pub fn start(survey: Survey) -> Result<Self, CoreError> {
        if survey.questions.is_empty() {
            return Err(CoreError::Validation(
                "Survey has no questions to take".to_string(),
            ));
        }
        Ok(Self {
            survey,
            state: TakerState::InProgress { index: 0 },
            answers: HashMap::new(),
            started_at: chrono::Utc::now(),
        })
    }

    pub fn state(&self) -> TakerState {
        self.state
    }

    /// The question currently shown, or `None` once submitted.
    pub fn current(&self) -> Option<&Question> {
        match self.state {
            TakerState::InProgress { index } => self.survey.questions.get(index),
            TakerState::Submitted => None,
        }
    }

    pub fn is_first(&self) -> bool {
        matches!(self.state, TakerState::InProgress { index: 0 })
    }

    pub fn is_last(&self) -> bool {
        matches!(self.state, TakerState::InProgress { index }
            if index + 1 == self.survey.questions.len())
    }

    /// Completion fraction shown by the progress bar, in `(0, 1]`.
    pub fn progress(&self) -> f64 {
        match self.state {
            TakerState::InProgress { index } => {
                (index + 1) as f64 / self.survey.questions.len() as f64
            }
            TakerState::Submitted => 1.0,
        }
    }

    /// The recorded answer for a question, if any.
    pub fn answer_for(&self, question_id: EntityId) -> Option<&AnswerValue> {
        self.answers.get(&question_id)
    }

    /// Record (or overwrite) the answer to the current question. The
    /// value's shape must match the question's kind.
    pub fn answer(&mut self, value: AnswerValue) -> Result<(), CoreError> {
        let index = self.in_progress_index()?;
        let question = &self.survey.questions[index];
        if !value.matches(&question.kind) {
            return Err(CoreError::Validation(format!(
                "Answer to question {} does not match its type",
                question.id
            )));
        }
        self.answers.insert(question.id, value);
        Ok(())
    }

    /// Move back one question. Fails on the first question.
    pub fn back(&mut self) -> Result<usize, CoreError> {
        let index = self.in_progress_index()?;
        if index == 0 {
            return Err(CoreError::Validation(
                "Already at the first question".to_string(),
            ));
        }
        self.state = TakerState::InProgress { index: index - 1 };
        Ok(index - 1)
    }

    /// Advance one question. Fails on the last question, and a required
    /// current question must be answered first.
    pub fn next(&mut self) -> Result<usize, CoreError> {
        let index = self.in_progress_index()?;
        self.require_answered(index)?;
        if index + 1 == self.survey.questions.len() {
            return Err(CoreError::Validation(
                "Already at the last question".to_string(),
            ));
        }
        self.state = TakerState::InProgress { index: index + 1 };
        Ok(index + 1)
    }

    /// Jump to an arbitrary question index within bounds.
    pub fn jump(&mut self, index: usize) -> Result<(), CoreError> {
        self.in_progress_index()?;
        if index >= self.survey.questions.len() {
            return Err(CoreError::Validation(format!(
                "Question index {index} is out of range (0..{})",
                self.survey.questions.len()
            )));
        }
        self.state = TakerState::InProgress { index };
        Ok(())
    }

    /// Finish the flow. Only valid on the last question, with every
    /// required question answered; yields the answers in question order
    /// plus the elapsed duration.
    pub fn submit(&mut self) -> Result<Submission, CoreError> {
        let index = self.in_progress_index()?;
        if index + 1 != self.survey.questions.len() {
            return Err(CoreError::Validation(
                "Submit is only available on the last question".to_string(),
            ));
        }

        let answers: Vec<Answer> = self
            .survey
            .questions
            .iter()
            .filter_map(|question| {
                self.answers.get(&question.id).map(|value| Answer {
                    question_id: question.id,
                    value: value.clone(),
                })
            })
            .collect();
        // Catches required questions skipped via jump() as well as the
        // current one.
        response::validate_answers(&self.survey, &answers)?;

        let elapsed = chrono::Utc::now() - self.started_at;
        self.state = TakerState::Submitted;
        Ok(Submission {
            answers,
            duration: elapsed.num_seconds().max(0) as u32,
        })
    }

    fn in_progress_index(&self) -> Result<usize, CoreError> {
        match self.state {
            TakerState::InProgress { index } => Ok(index),
            TakerState::Submitted => Err(CoreError::Conflict(
                "Response has already been submitted".to_string(),
            )),
        }
    }

    fn require_answered(&self, index: usize) -> Result<(), CoreError> {
        let question = &self.survey.questions[index];
        if question.required {
            let answered = self
                .answers
                .get(&question.id)
                .is_some_and(|value| !value.is_empty());
            if !answered {
                return Err(CoreError::Validation(
                    "This question is required".to_string(),
                ));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
