use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Chat request envelope. `message` defaults to empty so an absent field is
/// rejected by validation rather than by deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

// 400 body: {"error": "..."}
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

// 500 body: {"title": "...", "detail": "..."}
#[derive(Debug, Clone, Serialize)]
pub struct ProblemBody {
    pub title: &'static str,
    pub detail: String,
}
