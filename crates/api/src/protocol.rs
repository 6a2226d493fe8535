//! Request and response types exposed by the API.
//!
//! These types are serialised as JSON over the public HTTP surface.

use serde::{Deserialize, Serialize};

/// Fixed payload text returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the StudySphere API";

// ---------------------------------------------------------------------------
// Welcome route
// ---------------------------------------------------------------------------

/// Response body for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    /// Fixed welcome text.
    pub message: String,
}

impl WelcomeResponse {
    /// Construct the canonical welcome payload.
    pub fn new() -> Self {
        Self {
            message: WELCOME_MESSAGE.into(),
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Error envelope
// ---------------------------------------------------------------------------

/// Standard error response body returned for any failed request.
///
/// The shape is fixed: every failure, regardless of origin, is flattened to
/// these three fields. `stack` is always present and is `null` in production.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub message: String,
    /// HTTP status code mirrored into the body.
    pub status_code: u16,
    /// Diagnostic trace; populated only outside production mode.
    pub stack: Option<String>,
}
