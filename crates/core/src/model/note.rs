use serde::{Deserialize, Serialize};

/// Learner self-report attached to a note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Correctness {
    #[default]
    Unset,
    Correct,
    Incorrect,
}

/// Free-text working and answer entered by the learner for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub working_notes: String,
    pub selected_answer: String,
    pub correctness: Correctness,
}

impl Note {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the learner has written any non-whitespace working.
    #[must_use]
    pub fn has_working(&self) -> bool {
        !self.working_notes.trim().is_empty()
    }
}
