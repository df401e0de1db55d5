//! Liveness endpoint.

use axum::{http::StatusCode, routing::get, Router};

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> StatusCode {
    StatusCode::OK
}
