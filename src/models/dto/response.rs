use serde::Serialize;

/// Body of `GET /api/user`: the resolved identity and whether it belongs to
/// the contributor group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub user: String,
    pub is_in_quiz_contributers: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_response_field_names() {
        let response = CurrentUserResponse {
            user: "alice".to_string(),
            is_in_quiz_contributers: true,
        };

        let json = serde_json::to_value(&response).expect("response should serialize");
        assert_eq!(json["user"], "alice");
        assert_eq!(json["isInQuizContributers"], true);
    }
}
