//! Shared error types for the services crate.

use thiserror::Error;

use recall_core::model::{ItemId, SessionSummaryError};
use storage::repository::StorageError;

/// A transition was requested in a state that forbids it.
///
/// These are caller contract violations: the presentation layer asked for
/// something the current session state cannot do.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidState {
    #[error("session has no items")]
    NoItems,
    #[error("round is already complete")]
    RoundComplete,
    #[error("round is still in progress")]
    RoundInProgress,
    #[error("judgment refers to an item that is no longer current")]
    StaleCursor,
    #[error("every item in the round was answered correctly")]
    NothingToRetry,
    #[error("answer must be revealed before judging")]
    AnswerHidden,
}

/// Errors emitted by practice sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("invalid session state: {0}")]
    InvalidState(#[from] InvalidState),
    #[error("item {id} is not part of this session")]
    NotFound { id: ItemId },
    #[error("item {id} appears more than once in the collection")]
    DuplicateItem { id: ItemId },
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Returns the state violation if this error is one.
    #[must_use]
    pub fn invalid_state(&self) -> Option<InvalidState> {
        match self {
            SessionError::InvalidState(state) => Some(*state),
            _ => None,
        }
    }
}
