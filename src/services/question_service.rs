use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::{GroupMembershipProvider, Principal},
    errors::{AppError, AppResult},
    models::{domain::Question, dto::request::CreateQuestionRequest},
    repositories::QuestionRepository,
};

pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
    membership: Arc<dyn GroupMembershipProvider>,
    contributor_group: String,
}

impl QuestionService {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        membership: Arc<dyn GroupMembershipProvider>,
        contributor_group: &str,
    ) -> Self {
        Self {
            repository,
            membership,
            contributor_group: contributor_group.to_string(),
        }
    }

    /// Creates a question on behalf of `principal`. Membership is checked
    /// before anything touches the store, so a forbidden caller never mutates
    /// it. The creator and creation time are stamped server-side.
    pub async fn create_question(
        &self,
        request: CreateQuestionRequest,
        principal: &Principal,
    ) -> AppResult<Question> {
        request.validate()?;

        if !self
            .membership
            .is_member(&principal.name, &self.contributor_group)
            .await
        {
            return Err(AppError::Forbidden(format!(
                "'{}' is not a member of '{}'",
                principal.name, self.contributor_group
            )));
        }

        let question = request.into_question(&principal.name);
        self.repository.create(question).await
    }

    pub async fn list_questions(&self) -> AppResult<Vec<Question>> {
        self.repository.find_all().await
    }

    pub async fn get_question(&self, id: &Uuid) -> AppResult<Question> {
        let question = self
            .repository
            .find_by_id(&id.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))?;

        Ok(question)
    }
}
