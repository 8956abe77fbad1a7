pub mod json;
pub mod repository;

pub use repository::{InMemoryRepository, QuestionBankRepository, StorageError};
