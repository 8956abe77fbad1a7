use serde::{Deserialize, Serialize};

/// What happens to working notes when wrong items enter a retry round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryNotePolicy {
    /// Blank the working text so each attempt starts from a clean page.
    #[default]
    ClearWorking,
    /// Leave previous working visible on the retried items.
    Keep,
}

/// How the note store treats ids that are not part of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownItemPolicy {
    /// Any id gets a note on demand.
    #[default]
    AutoCreate,
    /// Reads and writes for ids outside the session fail with `NotFound`.
    Reject,
}

/// Practice-session configuration.
///
/// Defaults:
/// - working notes are cleared for retried items
/// - unknown note ids are auto-created
/// - judging does not require the answer to be revealed first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeSettings {
    pub retry_notes: RetryNotePolicy,
    pub unknown_items: UnknownItemPolicy,
    pub require_reveal: bool,
}

impl PracticeSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_retry_notes(mut self, policy: RetryNotePolicy) -> Self {
        self.retry_notes = policy;
        self
    }

    #[must_use]
    pub fn with_unknown_items(mut self, policy: UnknownItemPolicy) -> Self {
        self.unknown_items = policy;
        self
    }

    /// Require `reveal_answer` before a judgment is accepted.
    #[must_use]
    pub fn with_require_reveal(mut self, require: bool) -> Self {
        self.require_reveal = require;
        self
    }
}
