//! Boundary error type for the relay handlers.
//!
//! Every failure inside a handler funnels into [`RelayError`] and is turned
//! into a JSON error response at the HTTP boundary. Upstream (OpenAI) errors
//! keep their original status code and response body; everything else maps
//! to a 500 with the error's display message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    /// Non-2xx reply from the OpenAI API. Carries the upstream status and the
    /// raw response body, both relayed to the caller unchanged.
    #[error("OpenAI API error: {body}")]
    Upstream { status: StatusCode, body: String },

    /// Anything else that went wrong while handling the request.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Upstream { status, .. } => *status,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Internal(err.into())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
