//! Axum router construction.

use axum::{
    extract::DefaultBodyLimit, middleware::map_response_with_state, routing::get, Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use super::{error, handlers, middleware, state::AppState};

/// Build the application [`Router`] with all routes and middleware attached.
///
/// Layers are registered innermost first: the failure renderer wraps the
/// routes directly and every later layer wraps it, giving the request-side
/// order trace → security headers → compression → cookie parsing → body
/// limit → CORS → handler. Unmatched paths fall through to the framework's
/// default 404.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .layer(map_response_with_state(state.clone(), error::render))
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(middleware::BODY_LIMIT))
        .layer(CookieManagerLayer::new())
        .layer(CompressionLayer::new())
        .layer(middleware::strict_transport_security())
        .layer(middleware::referrer_policy())
        .layer(middleware::frame_options())
        .layer(middleware::content_type_options())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
