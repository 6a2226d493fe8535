//! StudySphere API server: configuration loading, middleware chain, welcome
//! route, and the JSON error envelope.

pub mod config;
pub mod protocol;
pub mod server;
pub mod telemetry;
