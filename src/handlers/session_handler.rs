use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateQuizRequest, RecordAnswerRequest},
    models::dto::response::SessionDto,
};

#[post("/api/sessions")]
pub async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = state.session_service.create_session().await?;
    Ok(HttpResponse::Created().json(SessionDto::from(&session)))
}

#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.get_session(&id).await?;
    Ok(HttpResponse::Ok().json(SessionDto::from(&session)))
}

#[post("/api/sessions/{id}/quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .generate(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(SessionDto::from(&session)))
}

#[actix_web::put("/api/sessions/{id}/answers")]
pub async fn record_answer(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<RecordAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .session_service
        .record_answer(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/api/sessions/{id}/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let report = state.session_service.submit(&id).await?;
    Ok(HttpResponse::Ok().json(report))
}

#[post("/api/sessions/{id}/reset")]
pub async fn reset_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.reset(&id).await?;
    Ok(HttpResponse::Ok().json(SessionDto::from(&session)))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
