use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use chrono::Utc;

use crate::models::domain::{Answer, Question};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "Question body is required"))]
    pub body: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    pub difficulty: i16,

    #[serde(default)]
    pub checked: bool,

    #[validate(nested)]
    #[serde(default)]
    pub answers: Vec<CreateAnswerRequest>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnswerRequest {
    #[validate(length(min = 1, message = "Answer body is required"))]
    pub body: String,

    #[serde(default)]
    pub correct: bool,

    #[validate(length(min = 1, message = "Answer position is required"))]
    pub position: String,
}

impl CreateQuestionRequest {
    /// Builds the stored record. Identifiers and the creator/creation stamp come
    /// from the server; any client-supplied values for them never reach the store.
    pub fn into_question(self, created_by: &str) -> Question {
        let question_id = Uuid::new_v4().to_string();

        let answers = self
            .answers
            .into_iter()
            .map(|answer| Answer {
                id: Uuid::new_v4().to_string(),
                body: answer.body,
                correct: answer.correct,
                position: answer.position,
                question_id: question_id.clone(),
            })
            .collect();

        Question {
            id: question_id,
            body: self.body,
            category: self.category,
            difficulty: self.difficulty,
            checked: self.checked,
            created_by: created_by.to_string(),
            created: Utc::now(),
            answers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> CreateQuestionRequest {
        CreateQuestionRequest {
            body: "What does the ? operator do?".to_string(),
            category: "rust".to_string(),
            difficulty: 2,
            checked: false,
            answers: vec![
                CreateAnswerRequest {
                    body: "Propagates errors to the caller".to_string(),
                    correct: true,
                    position: "a".to_string(),
                },
                CreateAnswerRequest {
                    body: "Panics on None".to_string(),
                    correct: false,
                    position: "b".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_valid_create_question_request() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_empty_body_is_rejected() {
        let mut request = sample_request();
        request.body = "".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_answer_position_is_rejected() {
        let mut request = sample_request();
        request.answers[0].position = "".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn into_question_assigns_ids_and_back_references() {
        let question = sample_request().into_question("contributor");

        assert!(!question.id.is_empty());
        assert_eq!(question.created_by, "contributor");
        assert_eq!(question.answers.len(), 2);
        for answer in &question.answers {
            assert!(!answer.id.is_empty());
            assert_eq!(answer.question_id, question.id);
        }
    }

    #[test]
    fn into_question_preserves_answer_order() {
        let question = sample_request().into_question("contributor");

        assert_eq!(question.answers[0].position, "a");
        assert_eq!(question.answers[1].position, "b");
    }

    #[test]
    fn client_supplied_creator_fields_are_ignored() {
        // createdBy/created are not part of the request shape; unknown JSON
        // fields are dropped on deserialization.
        let json = serde_json::json!({
            "body": "Who assigns the creator?",
            "category": "auth",
            "difficulty": 1,
            "createdBy": "mallory",
            "created": "1999-01-01T00:00:00Z",
            "answers": []
        });

        let request: CreateQuestionRequest =
            serde_json::from_value(json).expect("request should deserialize");
        let question = request.into_question("alice");

        assert_eq!(question.created_by, "alice");
        assert!(question.created.timestamp() > 946_684_800); // after 2000-01-01
    }
}
