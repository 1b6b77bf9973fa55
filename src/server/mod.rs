pub mod chat_types;
pub mod handlers;
pub mod validation;

use axum::Router;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};

use crate::completion::CompletionGateway;
use crate::config::Settings;
use crate::error::Result;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<CompletionGateway>,
    /// Parent token for per-request cancellation; cancelled on shutdown.
    pub shutdown: CancellationToken,
}

pub fn create_app(config: Settings, shutdown: CancellationToken) -> Result<Router> {
    let gateway = Arc::new(CompletionGateway::new(config.azure_openai)?);

    let app_state = AppState { gateway, shutdown };

    // CORS（开发环境全放开；生产应收敛来源）
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    Ok(handlers::routes().with_state(Arc::new(app_state)).layer(cors))
}
