use crate::auth::Principal;
use crate::models::dto::request::{CreateAnswerRequest, CreateQuestionRequest};



#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_test_principal() {
        let principal = test_principal();
        assert_eq!(principal.name, "testuser");
    }

    #[test]
    fn test_fixtures_create_question_request() {
        let request = create_question_request();
        assert_eq!(request.answers.len(), 4);
        assert_eq!(request.answers.iter().filter(|a| a.correct).count(), 1);
    }
}
