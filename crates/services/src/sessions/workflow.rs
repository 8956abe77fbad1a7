use std::sync::Arc;

use recall_core::model::{PracticeSettings, SetId};
use storage::repository::{InMemoryRepository, QuestionBankRepository};
use tracing::info;

use super::service::{FlashcardSession, MathSession, PracticeSession};
use crate::Clock;
use crate::error::SessionError;

/// Starts practice sessions from question sets in the bank.
///
/// Owns the time source and the session settings so screens only need a set id.
#[derive(Clone)]
pub struct PracticeLauncher {
    clock: Clock,
    bank: Arc<dyn QuestionBankRepository>,
    settings: PracticeSettings,
}

impl PracticeLauncher {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<dyn QuestionBankRepository>) -> Self {
        Self {
            clock,
            bank,
            settings: PracticeSettings::default(),
        }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(clock, Arc::new(InMemoryRepository::new()))
    }

    #[must_use]
    pub fn with_settings(mut self, settings: PracticeSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &PracticeSettings {
        &self.settings
    }

    #[must_use]
    pub fn bank(&self) -> &Arc<dyn QuestionBankRepository> {
        &self.bank
    }

    /// Start a flashcard session for the given set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the set cannot be loaded, or
    /// `SessionError::DuplicateItem` if the set repeats a card id.
    pub async fn start_flashcards(
        &self,
        set_id: SetId,
    ) -> Result<FlashcardSession, SessionError> {
        let set = self.bank.get_flashcard_set(set_id).await?;
        info!(
            set = %set_id,
            title = set.title(),
            cards = set.len(),
            "starting flashcard practice"
        );
        let title = set.title().to_owned();
        let session = PracticeSession::start(set.into_cards(), self.settings, self.clock)?;
        Ok(session.with_title(title))
    }

    /// Start a math session for the given set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the set cannot be loaded, or
    /// `SessionError::DuplicateItem` if the set repeats a question id.
    pub async fn start_math(&self, set_id: SetId) -> Result<MathSession, SessionError> {
        let set = self.bank.get_math_set(set_id).await?;
        info!(
            set = %set_id,
            title = set.title(),
            questions = set.questions().len(),
            "starting math practice"
        );
        let title = set.title().to_owned();
        let session = PracticeSession::start(set.into_questions(), self.settings, self.clock)?;
        Ok(session.with_title(title))
    }
}
