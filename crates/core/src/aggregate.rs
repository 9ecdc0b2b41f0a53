//! Response aggregation: turns raw answers into chart-ready tallies.
//!
//! The aggregator is a pure function over a survey and the responses
//! collected for it. Malformed data (unknown option values,
//! out-of-range ratings, missing answers) is skipped rather than
//! reported; the tallies never fail on partially invalid responses.

use std::collections::HashMap;

use serde::Serialize;

use crate::response::{AnswerValue, Response};
use crate::survey::{QuestionKind, Survey};
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One chart bucket: an option or rating label and how many responses
/// selected it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub label: String,
    pub count: u64,
}

/// Per-question tallies keyed by question id. Text and email questions
/// have no entry; their answers are shown verbatim per response.
pub type TallyMap = HashMap<EntityId, Vec<TallyEntry>>;

/// Headline figures for the results page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSummary {
    pub total_responses: u64,
    /// Percentage of responses that answered every question.
    pub completion_rate: f64,
    pub last_response_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Tally choice and rating answers for every aggregatable question.
///
/// The caller passes the responses collected for this survey. For each
/// choice question the buckets follow the declared option order; for
/// each rating question they run ascending from 1 to the scale. One
/// pass over the responses per question; the inputs are not mutated.
pub fn aggregate(survey: &Survey, responses: &[Response]) -> TallyMap {
    let mut tallies = TallyMap::new();
    for question in &survey.questions {
        match &question.kind {
            QuestionKind::SingleChoice { options } | QuestionKind::MultipleChoice { options } => {
                tallies.insert(question.id, tally_options(question.id, options, responses));
            }
            QuestionKind::Rating { scale } => {
                tallies.insert(question.id, tally_ratings(question.id, *scale, responses));
            }
            QuestionKind::Text | QuestionKind::Email => {}
        }
    }
    tallies
}

/// Compute the headline summary for a survey's responses.
pub fn summarize(survey: &Survey, responses: &[Response]) -> ResultsSummary {
    let complete = responses
        .iter()
        .filter(|response| is_complete(survey, response))
        .count();
    let completion_rate = if responses.is_empty() {
        0.0
    } else {
        complete as f64 / responses.len() as f64 * 100.0
    };

    ResultsSummary {
        total_responses: responses.len() as u64,
        completion_rate,
        last_response_at: responses.iter().map(|r| r.created_at).max(),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn tally_options(
    question_id: EntityId,
    options: &[String],
    responses: &[Response],
) -> Vec<TallyEntry> {
    let mut counts = vec![0u64; options.len()];
    for response in responses {
        let Some(answer) = response.answer(question_id) else {
            continue;
        };
        match &answer.value {
            AnswerValue::Text(value) => bump(options, &mut counts, value),
            AnswerValue::Selection(values) => {
                for value in values {
                    bump(options, &mut counts, value);
                }
            }
            AnswerValue::Rating(_) => {}
        }
    }

    options
        .iter()
        .zip(counts)
        .map(|(label, count)| TallyEntry {
            label: label.clone(),
            count,
        })
        .collect()
}

/// Increment the bucket for `value` if it is a declared option; values
/// outside the declared list are ignored.
fn bump(options: &[String], counts: &mut [u64], value: &str) {
    if let Some(position) = options.iter().position(|option| option == value) {
        counts[position] += 1;
    }
}

fn tally_ratings(question_id: EntityId, scale: u8, responses: &[Response]) -> Vec<TallyEntry> {
    let mut counts = vec![0u64; scale as usize];
    for response in responses {
        let Some(answer) = response.answer(question_id) else {
            continue;
        };
        if let AnswerValue::Rating(value) = answer.value {
            if (1..=i64::from(scale)).contains(&value) {
                counts[(value - 1) as usize] += 1;
            }
        }
    }

    (1..=scale)
        .zip(counts)
        .map(|(rating, count)| TallyEntry {
            label: format!("Rating {rating}"),
            count,
        })
        .collect()
}

/// A response is complete when every question of the survey has a
/// non-empty answer.
fn is_complete(survey: &Survey, response: &Response) -> bool {
    survey
        .questions
        .iter()
        .all(|question| {
            response
                .answer(question.id)
                .is_some_and(|answer| !answer.value.is_empty())
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
