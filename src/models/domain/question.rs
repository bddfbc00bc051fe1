use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A quiz question and the answers it owns. Answers never outlive their
/// question and are only constructed through [`crate::models::dto::request::CreateQuestionRequest`],
/// which stamps the back-reference.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String, // Assigned by the server on create
    pub body: String,
    pub category: String,
    pub difficulty: i16,
    pub checked: bool,
    pub created_by: String, // Stamped from the authenticated principal
    pub created: DateTime<Utc>,
    pub answers: Vec<Answer>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: String,
    pub body: String,
    pub correct: bool,
    pub position: String, // "a" / "b" / "c" / "d"
    pub question_id: String,
}
