//! Axum route handlers for the Interview API.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::interview::coach::{canned_answer, opening_question, respond, InterviewReply, InterviewTurn};
use crate::routes::extract::JsonOrForm;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuestionForm {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub question: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StartInterviewRequest {
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct StartInterviewResponse {
    pub question: String,
}

/// GET /interview
pub async fn handle_interview_form() -> Json<Value> {
    Json(json!({ "message": "Interview endpoint", "answer": null }))
}

/// POST /interview
pub async fn handle_interview_answer(
    JsonOrForm(form): JsonOrForm<QuestionForm>,
) -> Result<Json<AnswerResponse>, AppError> {
    Ok(Json(AnswerResponse {
        answer: canned_answer(&form.question),
        question: form.question,
    }))
}

/// POST /interview/start
pub async fn handle_interview_start(
    JsonOrForm(request): JsonOrForm<StartInterviewRequest>,
) -> Result<Json<StartInterviewResponse>, AppError> {
    Ok(Json(StartInterviewResponse {
        question: opening_question(&request.role),
    }))
}

/// POST /interview/respond
pub async fn handle_interview_respond(
    JsonOrForm(turn): JsonOrForm<InterviewTurn>,
) -> Result<Json<InterviewReply>, AppError> {
    Ok(Json(respond(&turn)))
}
