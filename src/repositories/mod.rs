pub mod question_repository;

pub use question_repository::{InMemoryQuestionRepository, QuestionRepository};
