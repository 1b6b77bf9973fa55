mod completion;
mod config;
mod error;
mod providers;
mod server;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::fmt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    fmt::init();

    let config = config::Settings::load()?;

    // Gateway construction validates the upstream config; a bad config
    // aborts here, before any port is bound.
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let shutdown = CancellationToken::new();
    let app = server::create_app(config, shutdown.clone())?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Chat relay server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
    // In-flight completions observe the token and bail out as cancelled.
    shutdown.cancel();
}
