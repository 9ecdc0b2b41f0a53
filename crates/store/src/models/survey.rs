//! Survey and question DTOs.

use serde::{Deserialize, Serialize};

use formpulse_core::survey::{Question, QuestionKind, Survey, Theme, DEFAULT_RATING_SCALE};
use formpulse_core::types::EntityId;

/// Publication filter for survey listings, mirroring the dashboard
/// tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Drafts,
}

/// Wire values of the question `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    Text,
    Email,
    SingleChoice,
    MultipleChoice,
    Rating,
}

/// DTO for creating a survey. Every field is optional; absent fields
/// take the editor's initial defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSurvey {
    pub title: Option<String>,
    pub description: Option<String>,
    pub theme: Option<Theme>,
}

/// DTO for saving a survey from the editor. The editor works on a full
/// copy, so present fields replace the stored value wholesale; absent
/// fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSurvey {
    pub title: Option<String>,
    pub description: Option<String>,
    pub questions: Option<Vec<Question>>,
    pub theme: Option<Theme>,
}

/// DTO for appending a question. Defaults to an untitled, optional
/// text question; `options` and `scale` only apply to the kinds that
/// carry them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestion {
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,
    pub options: Option<Vec<String>>,
    pub scale: Option<u8>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
}

impl CreateQuestion {
    /// Build the question this DTO describes.
    pub fn into_question(self) -> Question {
        let kind = build_kind(
            self.question_type.unwrap_or(QuestionType::Text),
            self.options,
            self.scale,
        );
        let mut question = Question::new(kind);
        if let Some(title) = self.title {
            question.title = title;
        }
        if let Some(description) = self.description {
            question.description = Some(description);
        }
        if let Some(required) = self.required {
            question.required = required;
        }
        question
    }
}

/// DTO for updating a question. Absent fields are left unchanged;
/// switching the type keeps the existing option list (so flipping
/// between single and multiple choice preserves the options) and the
/// existing rating scale.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuestion {
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,
    pub options: Option<Vec<String>>,
    pub scale: Option<u8>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
}

impl UpdateQuestion {
    /// Apply this patch to a question.
    pub fn apply(&self, question: &mut Question) {
        question.kind = self.next_kind(&question.kind);
        if let Some(title) = &self.title {
            question.title = title.clone();
        }
        if let Some(description) = &self.description {
            question.description = Some(description.clone());
        }
        if let Some(required) = self.required {
            question.required = required;
        }
    }

    fn next_kind(&self, current: &QuestionKind) -> QuestionKind {
        match self.question_type {
            Some(question_type) => {
                let options = self
                    .options
                    .clone()
                    .or_else(|| current.options().map(<[String]>::to_vec));
                let scale = self.scale.or(match current {
                    QuestionKind::Rating { scale } => Some(*scale),
                    _ => None,
                });
                build_kind(question_type, options, scale)
            }
            // Same kind; options and scale edits apply where they fit.
            None => match current {
                QuestionKind::SingleChoice { options } => QuestionKind::SingleChoice {
                    options: self.options.clone().unwrap_or_else(|| options.clone()),
                },
                QuestionKind::MultipleChoice { options } => QuestionKind::MultipleChoice {
                    options: self.options.clone().unwrap_or_else(|| options.clone()),
                },
                QuestionKind::Rating { scale } => QuestionKind::Rating {
                    scale: self.scale.unwrap_or(*scale),
                },
                other => other.clone(),
            },
        }
    }
}

fn build_kind(
    question_type: QuestionType,
    options: Option<Vec<String>>,
    scale: Option<u8>,
) -> QuestionKind {
    match question_type {
        QuestionType::Text => QuestionKind::Text,
        QuestionType::Email => QuestionKind::Email,
        QuestionType::SingleChoice => QuestionKind::SingleChoice {
            options: options.unwrap_or_default(),
        },
        QuestionType::MultipleChoice => QuestionKind::MultipleChoice {
            options: options.unwrap_or_default(),
        },
        QuestionType::Rating => QuestionKind::Rating {
            scale: scale.unwrap_or(DEFAULT_RATING_SCALE),
        },
    }
}

/// DTO for reordering questions: the full permutation of question ids.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderQuestions {
    pub order: Vec<EntityId>,
}

/// Survey enriched with its response count, for the dashboard listing.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyWithResponseCount {
    #[serde(flatten)]
    pub survey: Survey,
    pub response_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_question_defaults_to_optional_text() {
        let question = CreateQuestion::default().into_question();
        assert_eq!(question.kind, QuestionKind::Text);
        assert_eq!(question.title, "");
        assert!(!question.required);
    }

    #[test]
    fn create_rating_question_defaults_scale() {
        let input = CreateQuestion {
            question_type: Some(QuestionType::Rating),
            ..CreateQuestion::default()
        };
        assert_eq!(
            input.into_question().kind,
            QuestionKind::Rating { scale: 5 }
        );
    }

    #[test]
    fn create_question_parses_flat_json() {
        let input: CreateQuestion = serde_json::from_str(
            r#"{"type":"singleChoice","options":["A","B"],"title":"Pick","required":true}"#,
        )
        .unwrap();
        let question = input.into_question();
        assert_eq!(
            question.kind,
            QuestionKind::SingleChoice {
                options: vec!["A".into(), "B".into()]
            }
        );
        assert!(question.required);
    }

    #[test]
    fn update_switching_between_choice_kinds_keeps_options() {
        let mut question = Question::new(QuestionKind::SingleChoice {
            options: vec!["A".into(), "B".into()],
        });
        let patch = UpdateQuestion {
            question_type: Some(QuestionType::MultipleChoice),
            ..UpdateQuestion::default()
        };

        patch.apply(&mut question);

        assert_eq!(
            question.kind,
            QuestionKind::MultipleChoice {
                options: vec!["A".into(), "B".into()]
            }
        );
    }

    #[test]
    fn update_switching_to_text_drops_the_payload() {
        let mut question = Question::new(QuestionKind::MultipleChoice {
            options: vec!["X".into()],
        });
        let patch = UpdateQuestion {
            question_type: Some(QuestionType::Text),
            ..UpdateQuestion::default()
        };

        patch.apply(&mut question);

        assert_eq!(question.kind, QuestionKind::Text);
    }

    #[test]
    fn update_options_without_type_edits_in_place() {
        let mut question = Question::new(QuestionKind::SingleChoice {
            options: vec!["A".into()],
        });
        let patch = UpdateQuestion {
            options: Some(vec!["A".into(), "B".into()]),
            ..UpdateQuestion::default()
        };

        patch.apply(&mut question);

        assert_eq!(
            question.kind.options().unwrap(),
            &["A".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn update_scale_on_non_rating_is_ignored() {
        let mut question = Question::new(QuestionKind::Text);
        let patch = UpdateQuestion {
            scale: Some(10),
            ..UpdateQuestion::default()
        };

        patch.apply(&mut question);

        assert_eq!(question.kind, QuestionKind::Text);
    }
}
