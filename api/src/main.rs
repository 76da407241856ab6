// ============================================================================
// IN-MEMORY POSTS SERVICE
// ============================================================================

// - CRUD over a single collection of (id, body) posts
// - One lock guarding the map and the id counter together
// - Plain-text errors, JSON on success
// - Request logging
// - Graceful shutdown

use posts_api::{AppState, Config, PostStore, app};
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    // Create application state
    let state = AppState::new(PostStore::new(), config.max_body_bytes);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    info!("Server is running at http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET    /health           - Health check");
    info!("  GET    /posts            - List posts");
    info!("  GET    /post/:id         - Get specific post");
    info!("  POST   /post/0           - Create post");
    info!("  POST   /post/:id         - Update post");
    info!("  DELETE /post/:id         - Delete post");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
