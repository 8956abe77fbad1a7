use async_trait::async_trait;
use recall_core::model::{
    FlashcardSet, MathQuestionError, MathQuestionSet, QuestionSetError, SetId,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by question-bank adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    InvalidQuestion(#[from] MathQuestionError),

    #[error(transparent)]
    InvalidSet(#[from] QuestionSetError),
}

/// Repository contract for the question sets a learner can practice.
#[async_trait]
pub trait QuestionBankRepository: Send + Sync {
    /// Persist or replace a flashcard set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the set cannot be stored.
    async fn upsert_flashcard_set(&self, set: &FlashcardSet) -> Result<(), StorageError>;

    /// Fetch a flashcard set by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_flashcard_set(&self, id: SetId) -> Result<FlashcardSet, StorageError>;

    /// List all flashcard sets, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn list_flashcard_sets(&self) -> Result<Vec<FlashcardSet>, StorageError>;

    /// Persist or replace a math question set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the set cannot be stored.
    async fn upsert_math_set(&self, set: &MathQuestionSet) -> Result<(), StorageError>;

    /// Fetch a math question set by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_math_set(&self, id: SetId) -> Result<MathQuestionSet, StorageError>;

    /// List all math question sets, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn list_math_sets(&self) -> Result<Vec<MathQuestionSet>, StorageError>;
}

/// Simple in-memory question bank for tests and demo content.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    flashcard_sets: Arc<Mutex<HashMap<SetId, FlashcardSet>>>,
    math_sets: Arc<Mutex<HashMap<SetId, MathQuestionSet>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionBankRepository for InMemoryRepository {
    async fn upsert_flashcard_set(&self, set: &FlashcardSet) -> Result<(), StorageError> {
        let mut guard = self
            .flashcard_sets
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(set.id(), set.clone());
        Ok(())
    }

    async fn get_flashcard_set(&self, id: SetId) -> Result<FlashcardSet, StorageError> {
        let guard = self
            .flashcard_sets
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.get(&id).cloned().ok_or(StorageError::NotFound)
    }

    async fn list_flashcard_sets(&self) -> Result<Vec<FlashcardSet>, StorageError> {
        let guard = self
            .flashcard_sets
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut sets: Vec<_> = guard.values().cloned().collect();
        sets.sort_by(|a, b| {
            (a.created_at(), a.title()).cmp(&(b.created_at(), b.title()))
        });
        Ok(sets)
    }

    async fn upsert_math_set(&self, set: &MathQuestionSet) -> Result<(), StorageError> {
        for question in set.questions() {
            question.validate()?;
        }
        let mut guard = self
            .math_sets
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(set.id(), set.clone());
        Ok(())
    }

    async fn get_math_set(&self, id: SetId) -> Result<MathQuestionSet, StorageError> {
        let guard = self
            .math_sets
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.get(&id).cloned().ok_or(StorageError::NotFound)
    }

    async fn list_math_sets(&self) -> Result<Vec<MathQuestionSet>, StorageError> {
        let guard = self
            .math_sets
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut sets: Vec<_> = guard.values().cloned().collect();
        sets.sort_by(|a, b| {
            (a.created_at(), a.title()).cmp(&(b.created_at(), b.title()))
        });
        Ok(sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recall_core::model::Flashcard;
    use recall_core::time::frozen_now;

    fn build_set(title: &str, offset_minutes: i64) -> FlashcardSet {
        let cards = vec![
            Flashcard::new("What is a closure?", "A block of code that captures its environment")
                .unwrap(),
        ];
        FlashcardSet::new(
            SetId::random(),
            title,
            cards,
            frozen_now() + chrono::Duration::minutes(offset_minutes),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn get_returns_stored_flashcard_set() {
        let repo = InMemoryRepository::new();
        let set = build_set("Swift Basics", 0);
        repo.upsert_flashcard_set(&set).await.unwrap();

        let fetched = repo.get_flashcard_set(set.id()).await.unwrap();
        assert_eq!(fetched, set);
    }

    #[tokio::test]
    async fn missing_set_is_not_found() {
        let repo = InMemoryRepository::new();
        let err = repo.get_math_set(SetId::random()).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn list_orders_by_creation_time() {
        let repo = InMemoryRepository::new();
        let later = build_set("Later", 10);
        let earlier = build_set("Earlier", 0);
        repo.upsert_flashcard_set(&later).await.unwrap();
        repo.upsert_flashcard_set(&earlier).await.unwrap();

        let titles: Vec<_> = repo
            .list_flashcard_sets()
            .await
            .unwrap()
            .iter()
            .map(|s| s.title().to_owned())
            .collect();
        assert_eq!(titles, ["Earlier", "Later"]);
    }
}
