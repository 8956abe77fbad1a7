use thiserror::Error;

use crate::model::{
    FlashcardError, MathQuestionError, ParseIdError, QuestionSetError, SessionSummaryError,
};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Flashcard(#[from] FlashcardError),
    #[error(transparent)]
    MathQuestion(#[from] MathQuestionError),
    #[error(transparent)]
    QuestionSet(#[from] QuestionSetError),
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
}
