use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use super::super::domain::ResultId;
use super::super::notification::{NotificationError, NotificationPayload, ResultNotifier};
use super::repository::{RepositoryError, ResultRepository};
use super::service::{QuizSubmissionService, SubmissionError};
use super::validation::QuizSubmission;

/// Router builder exposing the quiz questions, submission intake, and stored results.
pub fn quiz_router<R, N>(service: Arc<QuizSubmissionService<R, N>>) -> Router
where
    R: ResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler::<R, N>))
        .route("/api/v1/quiz/submissions", post(submit_handler::<R, N>))
        .route(
            "/api/v1/quiz/results/:result_id",
            get(result_handler::<R, N>),
        )
        .route(
            "/api/v1/quiz/notifications",
            post(notification_handler::<R, N>),
        )
        .with_state(service)
}

/// Question as shown to respondents; weights and trait tags stay server side.
#[derive(Debug, Serialize)]
pub(crate) struct QuestionView {
    pub(crate) id: u32,
    pub(crate) prompt: &'static str,
    pub(crate) options: Vec<&'static str>,
}

pub(crate) async fn questions_handler<R, N>(
    State(service): State<Arc<QuizSubmissionService<R, N>>>,
) -> Json<Vec<QuestionView>>
where
    R: ResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    let questions = service
        .engine()
        .catalog()
        .questions()
        .iter()
        .map(|question| QuestionView {
            id: question.id,
            prompt: question.prompt,
            options: question.options.iter().map(|option| option.label).collect(),
        })
        .collect();
    Json(questions)
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<QuizSubmissionService<R, N>>>,
    Json(submission): Json<QuizSubmission>,
) -> Response
where
    R: ResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || service.submit(submission)).await;

    match outcome {
        Ok(Ok(receipt)) => {
            let payload = json!({
                "success": true,
                "result": receipt.record.view(),
                "notification": receipt.notification,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Ok(Err(SubmissionError::Invalid(error))) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Ok(Err(SubmissionError::Repository(RepositoryError::Conflict))) => {
            let payload = json!({
                "error": "quiz result already exists",
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Ok(Err(other)) => internal_error(other.to_string()),
        Err(join_error) => {
            error!(error = %join_error, "quiz submission task failed");
            internal_error("quiz submission task failed".to_string())
        }
    }
}

pub(crate) async fn result_handler<R, N>(
    State(service): State<Arc<QuizSubmissionService<R, N>>>,
    Path(result_id): Path<String>,
) -> Response
where
    R: ResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    let id = ResultId(result_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(SubmissionError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": format!("quiz result {id} not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => internal_error(other.to_string()),
    }
}

pub(crate) async fn notification_handler<R, N>(
    State(service): State<Arc<QuizSubmissionService<R, N>>>,
    Json(payload): Json<NotificationPayload>,
) -> Response
where
    R: ResultRepository + 'static,
    N: ResultNotifier + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || service.send_summary(&payload)).await;

    match outcome {
        Ok(Ok(status)) => {
            let payload = json!({
                "success": true,
                "notification": status,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Ok(Err(NotificationError::MissingField(field))) => {
            let payload = json!({
                "error": format!("missing required field: {field}"),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Ok(Err(other)) => internal_error(other.to_string()),
        Err(join_error) => {
            error!(error = %join_error, "notification task failed");
            internal_error("notification task failed".to_string())
        }
    }
}

fn internal_error(message: String) -> Response {
    let payload = json!({
        "error": message,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
