use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::CreateQuestionRequest,
};

#[get("/api/questions")]
async fn list_questions(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let questions = state.question_service.list_questions().await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/api/questions/{id}")]
async fn get_question(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let question = state.question_service.get_question(&id).await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/api/questions")]
async fn create_question(
    state: web::Data<AppState>,
    request: web::Json<CreateQuestionRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .create_question(request.into_inner(), &auth.0)
        .await?;
    Ok(HttpResponse::Created().json(question))
}
