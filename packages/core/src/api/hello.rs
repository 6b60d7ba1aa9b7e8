//! Passthrough endpoints with no storage behind them.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use super::error::ApiResult;
use super::response::ApiResponse;
use super::state::AppState;

#[derive(Debug, Serialize)]
pub struct HelloJson {
    pub message: &'static str,
}

/// `GET /ping`
pub async fn ping(State(state): State<AppState>) -> ApiResult<String> {
    Ok(ApiResponse::ok(state.hello.ping()))
}

/// `GET /hello-json`
pub async fn hello_json() -> ApiResult<HelloJson> {
    Ok(ApiResponse::ok(HelloJson {
        message: "Hello JSON",
    }))
}

/// `POST /echo` returns the JSON body unchanged. Bodies the `Json`
/// extractor rejects are turned into `INVALID_REQUEST` by the envelope guard.
pub async fn echo(Json(body): Json<Value>) -> ApiResult<Value> {
    Ok(ApiResponse::ok(body))
}
