use actix_web::web;

pub mod question_handler;
pub mod user_handler;

pub use question_handler::{create_question, get_question, list_questions};
pub use user_handler::{current_user, health_check};

/// Registers every route. `main` and the integration tests share this so the
/// surface under test is the one that ships.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(current_user)
        .service(create_question)
        .service(list_questions)
        .service(get_question)
        .service(health_check);
}
