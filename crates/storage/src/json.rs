//! Import of math question banks from their JSON export format.

use chrono::{DateTime, Utc};
use recall_core::model::{MathQuestion, MathQuestionSet, SetId};

use crate::repository::StorageError;

/// Decode a JSON array of math questions and validate each one.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON, or
/// `StorageError::InvalidQuestion` for the first question that fails validation.
pub fn parse_math_questions(json: &str) -> Result<Vec<MathQuestion>, StorageError> {
    let questions: Vec<MathQuestion> =
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;
    for question in &questions {
        question.validate()?;
    }
    Ok(questions)
}

/// Build a titled question set from a JSON question array.
///
/// # Errors
///
/// Returns `StorageError` if the JSON is malformed, a question is invalid, or
/// the title is blank.
pub fn math_set_from_json(
    title: &str,
    json: &str,
    created_at: DateTime<Utc>,
) -> Result<MathQuestionSet, StorageError> {
    let questions = parse_math_questions(json)?;
    Ok(MathQuestionSet::new(
        SetId::random(),
        title,
        questions,
        created_at,
    )?)
}
