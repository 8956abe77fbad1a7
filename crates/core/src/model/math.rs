use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::flashcard::QuestionSetError;
use crate::model::ids::{ItemId, SetId};
use crate::model::item::PracticeItem;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MathQuestionError {
    #[error("math question id cannot be empty")]
    EmptyId,

    #[error("math question {id} has an empty question body")]
    EmptyQuestion { id: ItemId },

    #[error("math question {id} has an empty answer")]
    EmptyAnswer { id: ItemId },

    #[error("math question {id} must be worth at least one mark")]
    ZeroMarks { id: ItemId },
}

/// Exam-style math question with LaTeX payload.
///
/// Field names follow the question-bank JSON layout (`question_latex`,
/// `workings_latex`, `exam_tip`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathQuestion {
    pub id: ItemId,
    pub subject: String,
    pub label: String,
    pub topic: String,
    pub question_latex: String,
    pub answer: String,
    pub workings_latex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_tip: Option<String>,
    pub marks: u32,
    pub source: String,
}

impl MathQuestion {
    /// Checks the fields a practice session relies on.
    ///
    /// # Errors
    ///
    /// Returns `MathQuestionError` for a blank id, question or answer, or zero marks.
    pub fn validate(&self) -> Result<(), MathQuestionError> {
        // Deserialized ids skip `ItemId::new`, so blankness is checked here.
        if self.id.as_str().trim().is_empty() {
            return Err(MathQuestionError::EmptyId);
        }
        if self.question_latex.trim().is_empty() {
            return Err(MathQuestionError::EmptyQuestion {
                id: self.id.clone(),
            });
        }
        if self.answer.trim().is_empty() {
            return Err(MathQuestionError::EmptyAnswer {
                id: self.id.clone(),
            });
        }
        if self.marks == 0 {
            return Err(MathQuestionError::ZeroMarks {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Human-readable mark count, e.g. `1 mark` or `3 marks`.
    #[must_use]
    pub fn marks_label(&self) -> String {
        if self.marks == 1 {
            "1 mark".to_owned()
        } else {
            format!("{} marks", self.marks)
        }
    }
}

impl PracticeItem for MathQuestion {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
}

/// Titled, ordered collection of math questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathQuestionSet {
    id: SetId,
    title: String,
    questions: Vec<MathQuestion>,
    created_at: DateTime<Utc>,
}

impl MathQuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionSetError::EmptyTitle` if the title is blank.
    pub fn new(
        id: SetId,
        title: impl Into<String>,
        questions: Vec<MathQuestion>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, QuestionSetError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(QuestionSetError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            questions,
            created_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> SetId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[MathQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn into_questions(self) -> Vec<MathQuestion> {
        self.questions
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Total marks available across the set.
    #[must_use]
    pub fn total_marks(&self) -> u32 {
        self.questions
            .iter()
            .fold(0_u32, |acc, q| acc.saturating_add(q.marks))
    }
}
