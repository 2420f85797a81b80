//! CupidSecure HTTP server
//!
//! Thin REST surface over the risk analysis engine. All engine
//! semantics live in the analyst/engine crates; this crate only maps
//! requests and errors.

pub mod http;
pub mod metrics;
pub mod state;

pub use http::create_router;
pub use state::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upstream AI service unavailable: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<cupidsecure_engine::EngineError> for ServerError {
    fn from(err: cupidsecure_engine::EngineError) -> Self {
        match err {
            cupidsecure_engine::EngineError::InvalidInput(msg) => {
                ServerError::InvalidRequest(msg)
            }
        }
    }
}
