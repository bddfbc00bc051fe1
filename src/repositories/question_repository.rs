use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::Question};

/// Storage seam for questions. The in-memory implementation below is the
/// default backing store; anything durable can slot in behind the same trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: Question) -> AppResult<Question>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
    /// All questions in storage order (which is creation order).
    async fn find_all(&self) -> AppResult<Vec<Question>>;
}

/// Process-lifetime store. A `Vec` keeps storage order equal to creation
/// order, which is the only ordering the API exposes.
pub struct InMemoryQuestionRepository {
    questions: RwLock<Vec<Question>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryQuestionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        questions.push(question.clone());
        Ok(question)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.clone())
    }
}
