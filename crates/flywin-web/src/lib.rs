//! Flywin Web Server
//!
//! Axum-based server for the audit endpoint and dashboard.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use flywin_core::AuditService;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/audit", post(routes::audit::run_audit))
        .with_state(state.clone());

    // HTMX-driven HTML routes for the dashboard
    let dashboard_routes = Router::new()
        .route("/audit", post(routes::dashboard::submit_audit))
        .route("/audit/reset", get(routes::dashboard::reset_audit))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/health", get(routes::health::health))
        .nest("/api", api_routes)
        .merge(dashboard_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(audit: AuditService, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(audit);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
