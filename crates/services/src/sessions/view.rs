use std::collections::HashSet;

use recall_core::model::{ItemId, Note, PracticeItem};

use super::engine::Verdict;
use super::service::PracticeSession;

/// Presentation-agnostic row for the "review your answers" screen.
///
/// Carries borrowed item and note data only; formatting (mark labels,
/// "work shown" badges, typeset rendering) is left to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry<'a, T> {
    pub item: &'a T,
    pub note: Option<&'a Note>,
    /// Judged wrong in the current (or just completed) round.
    pub missed: bool,
}

impl<T> ReviewEntry<'_, T> {
    #[must_use]
    pub fn has_working(&self) -> bool {
        self.note.is_some_and(Note::has_working)
    }

    #[must_use]
    pub fn working(&self) -> &str {
        self.note.map_or("", |n| n.working_notes.as_str())
    }
}

impl<T: PracticeItem> PracticeSession<T> {
    /// Every item in original order, with its note and missed flag.
    #[must_use]
    pub fn review_entries(&self) -> Vec<ReviewEntry<'_, T>> {
        let missed: HashSet<&ItemId> = self
            .engine()
            .wrong_so_far()
            .into_iter()
            .map(|item| item.item_id())
            .collect();

        self.engine()
            .items()
            .iter()
            .map(|item| ReviewEntry {
                item,
                note: self.notes().note_ref(item.item_id()),
                missed: missed.contains(item.item_id()),
            })
            .collect()
    }

    /// Items still to master after a completed round, in the order they were missed.
    #[must_use]
    pub fn missed_entries(&self) -> Vec<ReviewEntry<'_, T>> {
        match self.verdict() {
            Some(Verdict::ItemsRemaining(items)) => items
                .into_iter()
                .map(|item| ReviewEntry {
                    item,
                    note: self.notes().note_ref(item.item_id()),
                    missed: true,
                })
                .collect(),
            Some(Verdict::AllCorrect) | None => Vec::new(),
        }
    }
}
