//! Axum request handlers for all service endpoints.
//!
//! Every handler returns `Result<_, Failure>` so that failures travel
//! through the terminal rendering stage in [`super::error`].

use axum::Json;

use super::error::Failure;
use crate::protocol::WelcomeResponse;

/// `GET /` — welcome route.
///
/// Returns the fixed welcome payload with status `200 OK`.
pub async fn welcome() -> Result<Json<WelcomeResponse>, Failure> {
    Ok(Json(WelcomeResponse::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::WELCOME_MESSAGE;

    #[tokio::test]
    async fn welcome_returns_fixed_payload() {
        let Json(body) = welcome().await.unwrap();
        assert_eq!(body.message, WELCOME_MESSAGE);
    }
}
