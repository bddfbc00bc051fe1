use std::sync::Arc;

use crate::{
    auth::{GroupMembershipProvider, Principal},
    models::dto::response::CurrentUserResponse,
};

pub struct UserService {
    membership: Arc<dyn GroupMembershipProvider>,
    contributor_group: String,
}

impl UserService {
    pub fn new(membership: Arc<dyn GroupMembershipProvider>, contributor_group: &str) -> Self {
        Self {
            membership,
            contributor_group: contributor_group.to_string(),
        }
    }

    /// The resolved identity plus whether it belongs to the contributor group.
    /// Membership lookups are uncached; every call consults the directory.
    pub async fn current_user(&self, principal: &Principal) -> CurrentUserResponse {
        let is_member = self
            .membership
            .is_member(&principal.name, &self.contributor_group)
            .await;

        CurrentUserResponse {
            user: principal.name.clone(),
            is_in_quiz_contributers: is_member,
        }
    }
}
