//! Survey and question types plus the author-side editing operations.
//!
//! Surveys are plain values: every edit rewrites the value the caller
//! owns (repositories hand out clones and replace the stored value
//! wholesale), so nothing here needs locking or interior mutability.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Question kind
// ---------------------------------------------------------------------------

/// Default scale for rating questions.
pub const DEFAULT_RATING_SCALE: u8 = 5;

/// Scales a rating question may use.
pub const RATING_SCALES: [u8; 2] = [5, 10];

fn default_rating_scale() -> u8 {
    DEFAULT_RATING_SCALE
}

/// Kind of a survey question, with the per-kind payload.
///
/// Choice kinds carry their ordered option list and rating carries its
/// scale, so "options exist exactly for choice questions" and "scale
/// exists exactly for rating questions" hold by construction rather
/// than by convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum QuestionKind {
    /// Free-form text answer.
    Text,
    /// Email address answer.
    Email,
    /// Pick exactly one of the listed options.
    SingleChoice { options: Vec<String> },
    /// Pick any subset of the listed options.
    MultipleChoice { options: Vec<String> },
    /// Numeric rating from 1 to `scale` inclusive.
    Rating {
        #[serde(default = "default_rating_scale")]
        scale: u8,
    },
}

impl QuestionKind {
    /// The declared option list, for choice kinds.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            QuestionKind::SingleChoice { options } | QuestionKind::MultipleChoice { options } => {
                Some(options)
            }
            _ => None,
        }
    }

    /// Whether answers to this kind are tallied on the results page.
    /// Text and email answers are shown verbatim per response instead.
    pub fn is_aggregatable(&self) -> bool {
        !matches!(self, QuestionKind::Text | QuestionKind::Email)
    }

    /// Validate the per-kind payload. Option lists may be empty while a
    /// survey is being drafted; rating scales must be 5 or 10.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            QuestionKind::Rating { scale } if !RATING_SCALES.contains(scale) => {
                Err(CoreError::Validation(format!(
                    "Invalid rating scale {scale}. Must be one of: 5, 10"
                )))
            }
            _ => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// One survey item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: EntityId,
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
}

impl Question {
    /// Create a question of the given kind with a fresh id. The editor
    /// starts questions untitled and optional.
    pub fn new(kind: QuestionKind) -> Self {
        Self {
            id: EntityId::new_v4(),
            kind,
            title: String::new(),
            description: None,
            required: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Presentation colors for the public survey page. Rendering-only; any
/// color string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary_color: String,
    pub background_color: String,
    pub font_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#6366f1".to_string(),
            background_color: "#ffffff".to_string(),
            font_color: "#1f2937".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Survey
// ---------------------------------------------------------------------------

/// Title given to a survey created without one.
pub const DEFAULT_SURVEY_TITLE: &str = "Untitled Survey";

/// A named ordered collection of questions plus presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub published: bool,
    pub theme: Theme,
}

impl Survey {
    /// Create an empty draft with default title and theme.
    pub fn new_draft() -> Self {
        let now = chrono::Utc::now();
        Self {
            id: EntityId::new_v4(),
            title: DEFAULT_SURVEY_TITLE.to_string(),
            description: None,
            questions: Vec::new(),
            created_at: now,
            updated_at: now,
            published: false,
            theme: Theme::default(),
        }
    }

    /// Refresh `updated_at`. Repositories call this once per mutation.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }

    /// Look up a question by id.
    pub fn question(&self, id: EntityId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Append a question.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Replace the question carrying `question.id`, keeping its position.
    pub fn replace_question(&mut self, question: Question) -> Result<(), CoreError> {
        match self.questions.iter_mut().find(|q| q.id == question.id) {
            Some(slot) => {
                *slot = question;
                Ok(())
            }
            None => Err(CoreError::NotFound {
                entity: "Question",
                id: question.id,
            }),
        }
    }

    /// Remove the question with the given id.
    pub fn remove_question(&mut self, id: EntityId) -> Result<(), CoreError> {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        if self.questions.len() == before {
            return Err(CoreError::NotFound {
                entity: "Question",
                id,
            });
        }
        Ok(())
    }

    /// Reorder the questions to the given permutation of their ids.
    ///
    /// `order` must contain every current question id exactly once.
    pub fn reorder_questions(&mut self, order: &[EntityId]) -> Result<(), CoreError> {
        if order.len() != self.questions.len() {
            return Err(CoreError::Validation(format!(
                "Reorder must list all {} question ids, got {}",
                self.questions.len(),
                order.len()
            )));
        }

        let mut reordered = Vec::with_capacity(order.len());
        for id in order {
            if reordered.iter().any(|q: &Question| q.id == *id) {
                return Err(CoreError::Validation(format!(
                    "Duplicate question id {id} in reorder"
                )));
            }
            let question = self
                .question(*id)
                .ok_or_else(|| CoreError::Validation(format!("Unknown question id {id} in reorder")))?
                .clone();
            reordered.push(question);
        }
        self.questions = reordered;
        Ok(())
    }

    /// Deep copy with a fresh id and timestamps. The copy starts as an
    /// unpublished draft titled "<title> (Copy)"; responses to the
    /// original are not associated with it.
    pub fn duplicate(&self) -> Survey {
        let now = chrono::Utc::now();
        Survey {
            id: EntityId::new_v4(),
            title: format!("{} (Copy)", self.title),
            description: self.description.clone(),
            questions: self.questions.clone(),
            created_at: now,
            updated_at: now,
            published: false,
            theme: self.theme.clone(),
        }
    }

    /// Validate the survey's structural invariants: question ids are
    /// unique and every question kind carries a valid payload.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (index, question) in self.questions.iter().enumerate() {
            if self.questions[..index].iter().any(|q| q.id == question.id) {
                return Err(CoreError::Validation(format!(
                    "Duplicate question id {}",
                    question.id
                )));
            }
            question.kind.validate()?;
        }
        Ok(())
    }
}

/// Build the public response-collection URL for a survey.
pub fn share_link(origin: &str, survey_id: EntityId) -> String {
    format!("{}/s/{}", origin.trim_end_matches('/'), survey_id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn survey_with_questions(kinds: Vec<QuestionKind>) -> Survey {
        let mut survey = Survey::new_draft();
        for kind in kinds {
            survey.add_question(Question::new(kind));
        }
        survey
    }

    // -- Defaults ---------------------------------------------------------

    #[test]
    fn new_draft_has_expected_defaults() {
        let survey = Survey::new_draft();
        assert_eq!(survey.title, "Untitled Survey");
        assert_eq!(survey.description, None);
        assert!(survey.questions.is_empty());
        assert!(!survey.published);
        assert_eq!(survey.theme, Theme::default());
        assert_eq!(survey.created_at, survey.updated_at);
    }

    #[test]
    fn default_theme_colors() {
        let theme = Theme::default();
        assert_eq!(theme.primary_color, "#6366f1");
        assert_eq!(theme.background_color, "#ffffff");
        assert_eq!(theme.font_color, "#1f2937");
    }

    #[test]
    fn new_question_is_untitled_and_optional() {
        let question = Question::new(QuestionKind::Text);
        assert_eq!(question.title, "");
        assert_eq!(question.description, None);
        assert!(!question.required);
    }

    // -- Question kind ----------------------------------------------------

    #[test]
    fn options_present_only_for_choice_kinds() {
        let single = QuestionKind::SingleChoice {
            options: vec!["A".into()],
        };
        let multiple = QuestionKind::MultipleChoice {
            options: vec!["X".into()],
        };
        assert_eq!(single.options(), Some(&["A".to_string()][..]));
        assert_eq!(multiple.options(), Some(&["X".to_string()][..]));
        assert_eq!(QuestionKind::Text.options(), None);
        assert_eq!(QuestionKind::Email.options(), None);
        assert_eq!(QuestionKind::Rating { scale: 5 }.options(), None);
    }

    #[test]
    fn text_and_email_are_not_aggregatable() {
        assert!(!QuestionKind::Text.is_aggregatable());
        assert!(!QuestionKind::Email.is_aggregatable());
        assert!(QuestionKind::Rating { scale: 5 }.is_aggregatable());
        assert!(QuestionKind::SingleChoice { options: vec![] }.is_aggregatable());
    }

    #[test]
    fn rating_scale_must_be_5_or_10() {
        assert!(QuestionKind::Rating { scale: 5 }.validate().is_ok());
        assert!(QuestionKind::Rating { scale: 10 }.validate().is_ok());
        assert!(QuestionKind::Rating { scale: 3 }.validate().is_err());
        assert!(QuestionKind::Rating { scale: 0 }.validate().is_err());
        assert!(QuestionKind::Rating { scale: 100 }.validate().is_err());
    }

    #[test]
    fn kind_serializes_with_wire_tag_values() {
        let tags = [
            (QuestionKind::Text, r#"{"type":"text"}"#),
            (QuestionKind::Email, r#"{"type":"email"}"#),
            (
                QuestionKind::SingleChoice {
                    options: vec!["A".into()],
                },
                r#"{"type":"singleChoice","options":["A"]}"#,
            ),
            (
                QuestionKind::MultipleChoice { options: vec![] },
                r#"{"type":"multipleChoice","options":[]}"#,
            ),
            (
                QuestionKind::Rating { scale: 10 },
                r#"{"type":"rating","scale":10}"#,
            ),
        ];
        for (kind, expected) in tags {
            assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        }
    }

    #[test]
    fn rating_scale_defaults_to_5_when_absent() {
        let kind: QuestionKind = serde_json::from_str(r#"{"type":"rating"}"#).unwrap();
        assert_eq!(kind, QuestionKind::Rating { scale: 5 });
    }

    // -- Question list edits ----------------------------------------------

    #[test]
    fn replace_question_keeps_position() {
        let mut survey = survey_with_questions(vec![QuestionKind::Text, QuestionKind::Email]);
        let mut updated = survey.questions[0].clone();
        updated.title = "Renamed".to_string();

        survey.replace_question(updated).unwrap();

        assert_eq!(survey.questions[0].title, "Renamed");
        assert_eq!(survey.questions[1].kind, QuestionKind::Email);
    }

    #[test]
    fn replace_unknown_question_is_not_found() {
        let mut survey = survey_with_questions(vec![QuestionKind::Text]);
        let stranger = Question::new(QuestionKind::Text);
        assert!(survey.replace_question(stranger).is_err());
    }

    #[test]
    fn remove_question_splices_it_out() {
        let mut survey = survey_with_questions(vec![QuestionKind::Text, QuestionKind::Email]);
        let first = survey.questions[0].id;

        survey.remove_question(first).unwrap();

        assert_eq!(survey.questions.len(), 1);
        assert_eq!(survey.questions[0].kind, QuestionKind::Email);
        assert!(survey.remove_question(first).is_err());
    }

    #[test]
    fn reorder_applies_permutation() {
        let mut survey = survey_with_questions(vec![
            QuestionKind::Text,
            QuestionKind::Email,
            QuestionKind::Rating { scale: 5 },
        ]);
        let ids: Vec<_> = survey.questions.iter().map(|q| q.id).collect();

        survey
            .reorder_questions(&[ids[2], ids[0], ids[1]])
            .unwrap();

        let reordered: Vec<_> = survey.questions.iter().map(|q| q.id).collect();
        assert_eq!(reordered, vec![ids[2], ids[0], ids[1]]);
    }

    #[test]
    fn reorder_rejects_wrong_length() {
        let mut survey = survey_with_questions(vec![QuestionKind::Text, QuestionKind::Email]);
        let first = survey.questions[0].id;
        assert!(survey.reorder_questions(&[first]).is_err());
    }

    #[test]
    fn reorder_rejects_duplicates_and_unknown_ids() {
        let mut survey = survey_with_questions(vec![QuestionKind::Text, QuestionKind::Email]);
        let ids: Vec<_> = survey.questions.iter().map(|q| q.id).collect();

        assert!(survey.reorder_questions(&[ids[0], ids[0]]).is_err());
        assert!(survey
            .reorder_questions(&[ids[0], EntityId::new_v4()])
            .is_err());

        // The failed reorders must not have disturbed the list.
        let unchanged: Vec<_> = survey.questions.iter().map(|q| q.id).collect();
        assert_eq!(unchanged, ids);
    }

    // -- Duplication ------------------------------------------------------

    #[test]
    fn duplicate_is_an_independent_unpublished_copy() {
        let mut original = survey_with_questions(vec![
            QuestionKind::SingleChoice {
                options: vec!["A".into(), "B".into()],
            },
            QuestionKind::Rating { scale: 10 },
        ]);
        original.title = "Customer Feedback".to_string();
        original.published = true;

        let mut copy = original.duplicate();

        assert_ne!(copy.id, original.id);
        assert_eq!(copy.title, "Customer Feedback (Copy)");
        assert!(!copy.published);
        assert_eq!(copy.questions, original.questions);

        // Mutating the copy must not leak into the original.
        copy.questions[0].title = "Changed".to_string();
        if let QuestionKind::SingleChoice { options } = &mut copy.questions[0].kind {
            options.push("C".into());
        }
        assert_eq!(original.questions[0].title, "");
        assert_eq!(
            original.questions[0].kind.options().unwrap(),
            &["A".to_string(), "B".to_string()]
        );
    }

    // -- Validation -------------------------------------------------------

    #[test]
    fn validate_rejects_duplicate_question_ids() {
        let mut survey = survey_with_questions(vec![QuestionKind::Text]);
        let clone = survey.questions[0].clone();
        survey.add_question(clone);
        assert!(survey.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_rating_scale() {
        let survey = survey_with_questions(vec![QuestionKind::Rating { scale: 7 }]);
        assert!(survey.validate().is_err());
    }

    // -- Share link -------------------------------------------------------

    #[test]
    fn share_link_format() {
        let id = EntityId::new_v4();
        assert_eq!(
            share_link("http://localhost:3000", id),
            format!("http://localhost:3000/s/{id}")
        );
    }

    #[test]
    fn share_link_trims_trailing_slash() {
        let id = EntityId::new_v4();
        assert_eq!(
            share_link("https://forms.example.com/", id),
            format!("https://forms.example.com/s/{id}")
        );
    }
}
