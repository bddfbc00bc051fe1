use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    auth::{
        GroupMembershipProvider, HostGroupMembershipProvider, PrincipalResolver,
        TrustedHeaderResolver,
    },
    config::Config,
    errors::AppResult,
    models::domain::{Answer, Question},
    repositories::{InMemoryQuestionRepository, QuestionRepository},
    services::{question_service::QuestionService, user_service::UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub question_service: Arc<QuestionService>,
    pub principal_resolver: Arc<dyn PrincipalResolver>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let repository = Arc::new(InMemoryQuestionRepository::new());
        let membership = Arc::new(HostGroupMembershipProvider::new());
        let principal_resolver = Arc::new(TrustedHeaderResolver::new(&config.identity_header));

        Self::with_providers(config, repository, membership, principal_resolver).await
    }

    /// Wires the services over explicit providers. Tests inject fakes here;
    /// `new` is just this with the production providers.
    pub async fn with_providers(
        config: Config,
        repository: Arc<dyn QuestionRepository>,
        membership: Arc<dyn GroupMembershipProvider>,
        principal_resolver: Arc<dyn PrincipalResolver>,
    ) -> AppResult<Self> {
        repository.create(seed_question()).await?;

        let user_service = Arc::new(UserService::new(
            Arc::clone(&membership),
            &config.contributor_group,
        ));
        let question_service = Arc::new(QuestionService::new(
            repository,
            membership,
            &config.contributor_group,
        ));

        Ok(Self {
            user_service,
            question_service,
            principal_resolver,
            config: Arc::new(config),
        })
    }
}

/// The one record every fresh process starts with.
fn seed_question() -> Question {
    let question_id = Uuid::new_v4().to_string();

    let answers = [
        ("Paris", true, "a"),
        ("Lyon", false, "b"),
        ("Marseille", false, "c"),
        ("Toulouse", false, "d"),
    ]
    .into_iter()
    .map(|(body, correct, position)| Answer {
        id: Uuid::new_v4().to_string(),
        body: body.to_string(),
        correct,
        position: position.to_string(),
        question_id: question_id.clone(),
    })
    .collect();

    Question {
        id: question_id,
        body: "What is the capital of France?".to_string(),
        category: "geography".to_string(),
        difficulty: 1,
        checked: true,
        created_by: "system".to_string(),
        created: Utc::now(),
        answers,
    }
}
