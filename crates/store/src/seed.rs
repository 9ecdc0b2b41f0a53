//! Demo data loaded at startup.

use formpulse_core::response::{Answer, AnswerValue, Response, ResponseMetadata};
use formpulse_core::survey::{Question, QuestionKind, Survey};

use crate::Store;

/// Seed the store with the demo dataset: a published customer-feedback
/// survey with two collected responses, and a draft event-registration
/// survey. A fresh instance then has something to show on the
/// dashboard and results pages.
pub async fn seed_demo_data(store: &Store) {
    let feedback = customer_feedback_survey();
    let registration = event_registration_survey();

    let responses = vec![
        feedback_response(
            &feedback,
            "John Doe",
            "john@example.com",
            "Friend",
            4,
            "Great service overall!",
            120,
        ),
        feedback_response(
            &feedback,
            "Jane Smith",
            "jane@example.com",
            "Social Media",
            5,
            "Excellent experience, will recommend!",
            95,
        ),
    ];

    {
        let mut surveys = store.surveys.write().await;
        surveys.insert(feedback.id, feedback);
        surveys.insert(registration.id, registration);
    }
    {
        let mut stored = store.responses.write().await;
        stored.extend(responses);
    }

    tracing::info!(surveys = 2, responses = 2, "Seeded demo data");
}

fn question(kind: QuestionKind, title: &str, required: bool) -> Question {
    let mut question = Question::new(kind);
    question.title = title.to_string();
    question.required = required;
    question
}

fn customer_feedback_survey() -> Survey {
    let mut survey = Survey::new_draft();
    survey.title = "Customer Feedback".to_string();
    survey.description =
        Some("Help us improve our service by providing your feedback".to_string());
    survey.published = true;

    survey.add_question(question(QuestionKind::Text, "What is your name?", true));
    survey.add_question(question(
        QuestionKind::Email,
        "What is your email address?",
        true,
    ));
    survey.add_question(question(
        QuestionKind::SingleChoice {
            options: vec![
                "Social Media".to_string(),
                "Friend".to_string(),
                "Advertisement".to_string(),
                "Other".to_string(),
            ],
        },
        "How did you hear about us?",
        false,
    ));
    let mut rating = question(
        QuestionKind::Rating { scale: 5 },
        "How would you rate our service?",
        true,
    );
    rating.description = Some("1 = Poor, 5 = Excellent".to_string());
    survey.add_question(rating);
    survey.add_question(question(QuestionKind::Text, "Any additional comments?", false));

    survey
}

fn event_registration_survey() -> Survey {
    let mut survey = Survey::new_draft();
    survey.title = "Event Registration".to_string();
    survey.description = Some("Register for our upcoming event".to_string());
    survey.theme.primary_color = "#8b5cf6".to_string();
    survey.theme.background_color = "#f3f4f6".to_string();
    survey.theme.font_color = "#111827".to_string();

    survey.add_question(question(QuestionKind::Text, "Full Name", true));
    survey.add_question(question(QuestionKind::Email, "Email Address", true));
    survey.add_question(question(
        QuestionKind::MultipleChoice {
            options: vec![
                "Morning Workshop".to_string(),
                "Afternoon Panel".to_string(),
                "Evening Networking".to_string(),
            ],
        },
        "Which sessions are you interested in attending?",
        true,
    ));

    survey
}

fn feedback_response(
    survey: &Survey,
    name: &str,
    email: &str,
    source: &str,
    rating: i64,
    comments: &str,
    duration: u32,
) -> Response {
    let values = [
        AnswerValue::Text(name.to_string()),
        AnswerValue::Text(email.to_string()),
        AnswerValue::Text(source.to_string()),
        AnswerValue::Rating(rating),
        AnswerValue::Text(comments.to_string()),
    ];
    let answers = survey
        .questions
        .iter()
        .zip(values)
        .map(|(question, value)| Answer {
            question_id: question.id,
            value,
        })
        .collect();

    Response::new(
        survey.id,
        answers,
        Some(ResponseMetadata {
            duration: Some(duration),
            ..ResponseMetadata::default()
        }),
    )
}
