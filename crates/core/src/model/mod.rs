mod flashcard;
mod ids;
mod item;
mod math;
mod note;
mod settings;
mod summary;

pub use flashcard::{Flashcard, FlashcardError, FlashcardSet, QuestionSetError};
pub use ids::{ItemId, ParseIdError, SetId};
pub use item::PracticeItem;
pub use math::{MathQuestion, MathQuestionError, MathQuestionSet};
pub use note::{Correctness, Note};
pub use settings::{PracticeSettings, RetryNotePolicy, UnknownItemPolicy};
pub use summary::{RoundRecord, SessionSummary, SessionSummaryError};
