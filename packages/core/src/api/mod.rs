//! HTTP surface: handlers, the response envelope and error translation.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod health;
pub mod hello;
pub mod response;
pub mod state;
pub mod users;

pub use error::ApiResult;
pub use response::ApiResponse;
pub use state::AppState;

/// Build the complete router: every route wrapped in error translation,
/// with request tracing outermost.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/ping", get(hello::ping))
        .route("/hello-json", get(hello::hello_json))
        .route("/echo", post(hello::echo))
        .route("/health", get(health::health))
        .route("/db-check", get(users::db_check))
        .route("/users", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .with_state(state);

    error::intercept_errors(routes).layer(TraceLayer::new_for_http())
}
