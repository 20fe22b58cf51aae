//! Paper map - a clustered research visualization server.
//!
//! This is the main entry point for the paper map web server.
//! The application is organized into the following modules:
//!
//! - `models`: Wire-level and render-level data structures
//! - `loader`: Reading and decoding the data directory
//! - `topics`: Grouping papers into topic clusters
//! - `graph`: Building the render model from clusters and selected papers
//! - `interaction`: Per-connection panel state machine
//! - `ws`: WebSocket bridge between the page and the state machine
//! - `templates`: HTML/CSS/JS templates and rendering
//! - `handlers`: HTTP route handlers

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use papermap::{bind_addr, data_dir, handlers, ws, AppState};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("papermap=info,tower_http=warn")),
        )
        .init();

    let data_dir = data_dir();
    let state = Arc::new(AppState::load(&data_dir).await);

    let app = Router::new()
        // Core routes
        .route("/", get(handlers::index))
        .route("/api/graph", get(handlers::graph_api))
        .route("/ws", get(ws::ws_handler))
        // Raw data files stay fetchable for inspection
        .nest_service("/data", ServeDir::new(&data_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!("Paper map server running at http://{addr}");
    tracing::info!("Data directory: {}", data_dir.display());

    axum::serve(listener, app).await.expect("Server error");
}
