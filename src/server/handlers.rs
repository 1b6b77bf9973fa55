use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use std::sync::Arc;

use crate::error::RelayError;
use crate::server::chat_types::{ChatRequest, ChatResponse, ErrorBody, HealthResponse, ProblemBody};
use crate::server::validation::validate_message;
use crate::server::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}

async fn chat(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Response {
    if let Err(err) = validate_message(&request.message) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: err.to_string(),
            }),
        )
            .into_response();
    }

    let cancel = app_state.shutdown.child_token();
    match app_state.gateway.complete(&request.message, cancel).await {
        Ok(text) => (
            StatusCode::OK,
            Json(ChatResponse {
                response: text,
                timestamp: Utc::now(),
            }),
        )
            .into_response(),
        // 客户端已放弃（或服务正在停机），仿照 nginx 用 499，不带响应体
        Err(RelayError::Cancelled) => StatusCode::from_u16(499)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Err(RelayError::Upstream(detail)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ProblemBody {
                title: "Error processing chat request",
                detail,
            }),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ProblemBody {
                title: "Error processing chat request",
                detail: err.to_string(),
            }),
        )
            .into_response(),
    }
}
