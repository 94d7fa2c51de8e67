use super::handlers;
use super::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Relay endpoints. Audio uploads can be arbitrarily large, so the
        // transcribe route drops axum's default body size cap.
        .route(
            "/api/transcribe",
            post(handlers::transcribe_audio).layer(DefaultBodyLimit::disable()),
        )
        .route("/api/analyze", post(handlers::analyze_transcript))
        // Allow cross-origin requests from any frontend
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
