//! HTTP front end for the relay service
//!
//! This module provides the REST API consumed by the web frontend:
//! - POST /api/transcribe - Forward an audio upload to the transcription API
//! - POST /api/analyze - Generate summary, action items, and meeting notes
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
