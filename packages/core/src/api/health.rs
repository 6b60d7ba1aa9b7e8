use axum::{
    http::{header, HeaderValue},
    response::IntoResponse,
};
use chrono::Local;

use super::response::ApiResponse;

/// Local wall-clock time without offset, e.g. `2024-05-01T09:30:12.123456789`.
pub fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        ApiResponse::ok(local_timestamp()),
    )
}
