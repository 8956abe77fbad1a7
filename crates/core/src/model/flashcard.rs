use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{ItemId, SetId};
use crate::model::item::PracticeItem;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlashcardError {
    #[error("flashcard question cannot be empty")]
    EmptyQuestion,

    #[error("flashcard answer cannot be empty")]
    EmptyAnswer,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("question set title cannot be empty")]
    EmptyTitle,
}

//
// ─── FLASHCARD ─────────────────────────────────────────────────────────────────
//

/// Plain-text question and answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    id: ItemId,
    question: String,
    answer: String,
}

impl Flashcard {
    /// Creates a flashcard with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError` if the question or answer is blank.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, FlashcardError> {
        Self::with_id(ItemId::random(), question, answer)
    }

    /// Creates a flashcard with a caller-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError` if the question or answer is blank.
    pub fn with_id(
        id: ItemId,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, FlashcardError> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() {
            return Err(FlashcardError::EmptyQuestion);
        }
        if answer.trim().is_empty() {
            return Err(FlashcardError::EmptyAnswer);
        }
        Ok(Self {
            id,
            question,
            answer,
        })
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

impl PracticeItem for Flashcard {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
}

//
// ─── FLASHCARD SET ─────────────────────────────────────────────────────────────
//

/// Titled, ordered collection of flashcards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardSet {
    id: SetId,
    title: String,
    cards: Vec<Flashcard>,
    created_at: DateTime<Utc>,
}

impl FlashcardSet {
    /// # Errors
    ///
    /// Returns `QuestionSetError::EmptyTitle` if the title is blank.
    pub fn new(
        id: SetId,
        title: impl Into<String>,
        cards: Vec<Flashcard>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, QuestionSetError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(QuestionSetError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            cards,
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
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<Flashcard> {
        self.cards
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
