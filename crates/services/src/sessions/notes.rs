use std::collections::{HashMap, HashSet};

use recall_core::model::{Correctness, ItemId, Note, UnknownItemPolicy};

use crate::error::SessionError;

/// Per-item learner notes for one session.
///
/// Notes are created lazily on first write and live exactly as long as the
/// store. The store never looks at item payloads, only at ids.
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes: HashMap<ItemId, Note>,
    known: HashSet<ItemId>,
    policy: UnknownItemPolicy,
}

impl NoteStore {
    /// Create a store for the given session item ids.
    pub fn new<'a>(known: impl IntoIterator<Item = &'a ItemId>, policy: UnknownItemPolicy) -> Self {
        Self {
            notes: HashMap::new(),
            known: known.into_iter().cloned().collect(),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> UnknownItemPolicy {
        self.policy
    }

    fn check(&self, id: &ItemId) -> Result<(), SessionError> {
        match self.policy {
            UnknownItemPolicy::AutoCreate => Ok(()),
            UnknownItemPolicy::Reject if self.known.contains(id) => Ok(()),
            UnknownItemPolicy::Reject => Err(SessionError::NotFound { id: id.clone() }),
        }
    }

    /// Returns the note for `id`, or a blank one if nothing was written yet.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` only under `UnknownItemPolicy::Reject`
    /// for ids outside the session.
    pub fn get_note(&self, id: &ItemId) -> Result<Note, SessionError> {
        self.check(id)?;
        Ok(self.notes.get(id).cloned().unwrap_or_default())
    }

    /// Borrow a note that has already been written.
    #[must_use]
    pub fn note_ref(&self, id: &ItemId) -> Option<&Note> {
        self.notes.get(id)
    }

    fn entry(&mut self, id: &ItemId) -> Result<&mut Note, SessionError> {
        self.check(id)?;
        Ok(self.notes.entry(id.clone()).or_default())
    }

    /// Replace the working text for `id`. Any text, including empty, is accepted.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` under `UnknownItemPolicy::Reject` for unknown ids.
    pub fn set_working_text(
        &mut self,
        id: &ItemId,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.entry(id)?.working_notes = text.into();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotFound` under `UnknownItemPolicy::Reject` for unknown ids.
    pub fn set_selected_answer(
        &mut self,
        id: &ItemId,
        answer: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.entry(id)?.selected_answer = answer.into();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotFound` under `UnknownItemPolicy::Reject` for unknown ids.
    pub fn record_correctness(
        &mut self,
        id: &ItemId,
        correctness: Correctness,
    ) -> Result<(), SessionError> {
        self.entry(id)?.correctness = correctness;
        Ok(())
    }

    /// Blank the working text of every listed item that has a note.
    ///
    /// All ids are checked before anything is cleared, so a rejected id leaves
    /// the store untouched. Returns how many notes actually changed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` under `UnknownItemPolicy::Reject` for unknown ids.
    pub fn clear_working_text<'a>(
        &mut self,
        ids: impl IntoIterator<Item = &'a ItemId>,
    ) -> Result<usize, SessionError> {
        let ids: Vec<&ItemId> = ids.into_iter().collect();
        for id in &ids {
            self.check(id)?;
        }

        let mut cleared = 0;
        for id in ids {
            if let Some(note) = self.notes.get_mut(id) {
                if !note.working_notes.is_empty() {
                    note.working_notes.clear();
                    cleared += 1;
                }
            }
        }
        Ok(cleared)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &Note)> {
        self.notes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
