#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use recall_core::Clock;

pub use error::{InvalidState, SessionError};

pub use sessions::{
    Cursor, FlashcardSession, Judgment, MathSession, NoteStore, PracticeLauncher,
    PracticeSession, ReviewEntry, RoundEngine, RoundProgress, RoundStatus, Step, Verdict,
};
