use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info};

use recall_core::Clock;
use recall_core::model::{
    Flashcard, ItemId, MathQuestion, Note, PracticeItem, PracticeSettings, RetryNotePolicy,
    SessionSummary,
};

use super::engine::{Cursor, Judgment, RoundEngine, Step, Verdict};
use super::notes::NoteStore;
use super::progress::{RoundProgress, RoundStatus};
use crate::error::{InvalidState, SessionError};

pub type FlashcardSession = PracticeSession<Flashcard>;
pub type MathSession = PracticeSession<MathQuestion>;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One learner working through one question set.
///
/// Owns the round engine and the note store for the set. The session is
/// created with `start` and ends with `finish_session`, which consumes it.
pub struct PracticeSession<T> {
    title: Option<String>,
    engine: RoundEngine<T>,
    notes: NoteStore,
    settings: PracticeSettings,
    clock: Clock,
    started_at: DateTime<Utc>,
    revealed: bool,
}

impl<T: PracticeItem> PracticeSession<T> {
    /// Start a session over `items` in the given order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::DuplicateItem` if two items share an id.
    pub fn start(
        items: Vec<T>,
        settings: PracticeSettings,
        clock: Clock,
    ) -> Result<Self, SessionError> {
        let engine = RoundEngine::new(items)?;
        let notes = NoteStore::new(
            engine.items().iter().map(|item| item.item_id()),
            settings.unknown_items,
        );
        let started_at = clock.now();
        info!(items = engine.items().len(), ?settings, "practice session started");

        Ok(Self {
            title: None,
            engine,
            notes,
            settings,
            clock,
            started_at,
            revealed: false,
        })
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn settings(&self) -> &PracticeSettings {
        &self.settings
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Read-only access to round state and history.
    #[must_use]
    pub fn engine(&self) -> &RoundEngine<T> {
        &self.engine
    }

    #[must_use]
    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.engine.status()
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&T> {
        self.engine.current_item()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Cursor> {
        self.engine.cursor()
    }

    #[must_use]
    pub fn progress(&self) -> RoundProgress {
        self.engine.progress()
    }

    #[must_use]
    pub fn verdict(&self) -> Option<Verdict<'_, T>> {
        self.engine.verdict()
    }

    #[must_use]
    pub fn answered_count(&self) -> u32 {
        self.engine.answered_count()
    }

    #[must_use]
    pub fn is_answer_revealed(&self) -> bool {
        self.revealed
    }

    /// Show the answer for the current item.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` when no item is on screen.
    pub fn reveal_answer(&mut self) -> Result<&T, SessionError> {
        let status = self.engine.status();
        let Some(item) = self.engine.current_item() else {
            let state = if status == RoundStatus::Empty {
                InvalidState::NoItems
            } else {
                InvalidState::RoundComplete
            };
            return Err(state.into());
        };
        self.revealed = true;
        Ok(item)
    }

    /// Judge the item identified by `cursor` and advance.
    ///
    /// The judgment is also stored as the correctness flag on the item's note.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` for stale cursors, finished rounds,
    /// and, when `require_reveal` is set, for an answer that is still hidden.
    pub fn judge(
        &mut self,
        cursor: Cursor,
        judgment: Judgment,
    ) -> Result<Step<'_, T>, SessionError> {
        if self.settings.require_reveal && !self.revealed && self.engine.cursor() == Some(cursor) {
            return Err(InvalidState::AnswerHidden.into());
        }
        let id = self.engine.current_item().map(|item| item.item_id().clone());

        let step = self.engine.judge(cursor, judgment)?;
        self.revealed = false;
        if let Some(id) = id {
            self.notes.record_correctness(&id, judgment.into())?;
        }
        Ok(step)
    }

    /// Start a round with the items missed in the last one, applying the
    /// configured note policy to them.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` unless the last round completed
    /// with items remaining.
    pub fn continue_with_remaining(&mut self) -> Result<Cursor, SessionError> {
        let cursor = self.engine.continue_with_remaining()?;
        self.revealed = false;
        self.apply_retry_policy()?;
        Ok(cursor)
    }

    /// Reset to the full collection from any state.
    ///
    /// Only round state is reset. Notes, including working text, are kept.
    pub fn restart_from_beginning(&mut self) -> Option<Cursor> {
        self.revealed = false;
        self.engine.restart_from_beginning()
    }

    fn apply_retry_policy(&mut self) -> Result<(), SessionError> {
        if self.settings.retry_notes == RetryNotePolicy::Keep {
            return Ok(());
        }
        let round = self.engine.round_items();
        let cleared = self
            .notes
            .clear_working_text(round.iter().map(|item| item.item_id()))?;
        debug!(cleared, round = self.engine.round_number(), "cleared working notes");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotFound` under `UnknownItemPolicy::Reject` for unknown ids.
    pub fn note(&self, id: &ItemId) -> Result<Note, SessionError> {
        self.notes.get_note(id)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotFound` under `UnknownItemPolicy::Reject` for unknown ids.
    pub fn set_working_text(
        &mut self,
        id: &ItemId,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.notes.set_working_text(id, text)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotFound` under `UnknownItemPolicy::Reject` for unknown ids.
    pub fn set_selected_answer(
        &mut self,
        id: &ItemId,
        answer: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.notes.set_selected_answer(id, answer)
    }

    /// End the session and summarize it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Summary` if the clock reads earlier than the start time.
    pub fn finish_session(self) -> Result<SessionSummary, SessionError> {
        let finished_at = self.clock.now();
        let summary = SessionSummary::new(
            self.started_at,
            finished_at,
            self.engine.items().len(),
            self.engine.answered_count(),
            self.engine.restarts(),
            self.engine.rounds().to_vec(),
            self.engine.is_mastered(),
        )?;
        info!(
            answered = summary.answered(),
            rounds = summary.rounds().len(),
            mastered = summary.mastered(),
            "practice session finished"
        );
        Ok(summary)
    }
}

impl<T> fmt::Debug for PracticeSession<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticeSession")
            .field("title", &self.title)
            .field("settings", &self.settings)
            .field("notes_len", &self.notes.len())
            .field("started_at", &self.started_at)
            .field("revealed", &self.revealed)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
