mod engine;
mod notes;
mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::{InvalidState, SessionError};
pub use engine::{Cursor, Judgment, RoundEngine, Step, Verdict};
pub use notes::NoteStore;
pub use progress::{RoundProgress, RoundStatus};
pub use service::{FlashcardSession, MathSession, PracticeSession};
pub use view::ReviewEntry;
pub use workflow::PracticeLauncher;
