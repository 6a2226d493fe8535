//! Failure record and the terminal error-rendering stage.
//!
//! A handler fails by returning a [`Failure`]. Axum converts it into a
//! placeholder response carrying the record in its extensions; the [`render`]
//! stage, registered innermost in the router, replaces the placeholder with
//! the JSON error envelope. Responses without a stashed record pass through
//! untouched, so the stage is reached only on failure.

use std::backtrace::Backtrace;

use axum::{
    body::Body,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use super::state::AppState;
use crate::protocol::ErrorBody;

/// Ephemeral record of a failed request.
///
/// Carries a human-readable message, an optional pre-assigned HTTP status,
/// and an optional diagnostic trace. Created wherever a handler signals
/// failure; consumed exactly once by [`render`].
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
    status: Option<StatusCode>,
    trace: Option<String>,
}

impl Failure {
    /// Create a [`Failure`] with the given message and no pre-assigned status.
    ///
    /// A backtrace is captured at the construction site as the diagnostic trace.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            trace: Some(Backtrace::force_capture().to_string()),
        }
    }

    /// Pre-assign the HTTP status to emit for this failure.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Replace the captured diagnostic trace.
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// The failure message shown to callers.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The status code to emit: the pre-assigned status when one was set,
    /// `500 Internal Server Error` otherwise.
    pub fn status_code(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<anyhow::Error> for Failure {
    /// Adopt an [`anyhow::Error`]: the root message becomes the failure
    /// message and the full error chain becomes the diagnostic trace.
    fn from(err: anyhow::Error) -> Self {
        let trace = format!("{err:?}");
        Self {
            message: err.to_string(),
            status: None,
            trace: Some(trace),
        }
    }
}

impl IntoResponse for Failure {
    /// Stamp the resolved status and stash the record for [`render`].
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = self.status_code();
        response.extensions_mut().insert(self);
        response
    }
}

/// Terminal stage of the middleware chain.
///
/// Inspects every outgoing response; when an upstream handler failed, the
/// stashed [`Failure`] is logged and rendered into the
/// `{message, statusCode, stack}` envelope at the resolved status. The
/// `stack` field carries the diagnostic trace outside production mode and is
/// `null` in production. Exactly one response is written per failing request;
/// the stage itself is infallible.
pub async fn render(State(state): State<AppState>, response: Response) -> Response {
    let Some(failure) = response.extensions().get::<Failure>().cloned() else {
        return response;
    };

    let status = failure.status_code();
    error!(status = status.as_u16(), message = %failure.message, "request failed");

    let stack = if state.config.is_production() {
        None
    } else {
        failure.trace
    };

    let body = ErrorBody {
        message: failure.message,
        status_code: status.as_u16(),
        stack,
    };
    (status, Json(body)).into_response()
}
