//! Translation of failures into HTTP responses.
//!
//! This module is the only place that decides an error status. Three paths
//! lead here and all of them end in [`translate`]:
//!
//! - a handler returns `Err(AppError)` ([`IntoResponse`] for [`AppError`])
//! - a handler panics ([`handle_panic`], installed via `CatchPanicLayer`)
//! - the router answers on its own, e.g. unknown route or rejected body
//!   ([`envelope_guard`])
//!
//! Classified errors keep their message. Anything else becomes a 500 with
//! [`INTERNAL_ERROR_MESSAGE`]; the real cause is logged, never sent.

use std::any::Any;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use super::response::{ApiResponse, Enveloped};
use crate::error::{ApiException, AppError, ErrorCode};

/// Handler result: a success envelope or an error for the translator.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Body message for every unclassified failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Upper bound on how much of a framework rejection body is read back.
const MAX_REJECTION_BYTES: usize = 4 * 1024;

/// Status for each error code. No wildcard arm: a new code does not
/// compile until it has a status here.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::UserNotFound => StatusCode::NOT_FOUND,
        ErrorCode::DuplicateResource => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Classify an error into a status and a failure envelope.
pub fn translate(error: &AppError) -> (StatusCode, ApiResponse<()>) {
    match error {
        AppError::Api(exception) => {
            tracing::debug!(
                code = %exception.kind(),
                reason = exception.message(),
                "Request failed with classified error"
            );
            classified(exception)
        }
        other => {
            tracing::error!(error = %other, "Unclassified error while handling request");
            internal_failure()
        }
    }
}

fn classified(exception: &ApiException) -> (StatusCode, ApiResponse<()>) {
    let code = exception.kind();
    (status_for(code), ApiResponse::fail(code, exception.message()))
}

fn internal_failure() -> (StatusCode, ApiResponse<()>) {
    let code = ErrorCode::InternalError;
    (status_for(code), ApiResponse::fail(code, INTERNAL_ERROR_MESSAGE))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        translate(&self).into_response()
    }
}

impl IntoResponse for ApiException {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

/// `CatchPanicLayer` callback: log the payload, answer with the generic
/// internal failure.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else {
        "non-string panic payload"
    };

    tracing::error!(panic = detail, "Request handler panicked");
    internal_failure().into_response()
}

/// Middleware that re-routes responses the framework produced on its own
/// (no matching route, wrong method, body rejected by an extractor)
/// through the translator.
///
/// Client errors become `INVALID_REQUEST` carrying the rejection text,
/// server errors become the generic internal failure.
pub async fn envelope_guard(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;
    if response.extensions().get::<Enveloped>().is_some() {
        return response;
    }

    let status = response.status();
    if status.is_client_error() {
        let reason = match rejection_text(response).await {
            Some(text) => text,
            None => format!(
                "{}: {} {}",
                status.canonical_reason().unwrap_or("Client error"),
                method,
                path
            ),
        };
        ApiException::invalid_request(reason).into_response()
    } else if status.is_server_error() {
        AppError::unexpected(format!("{} returned by {} {}", status, method, path)).into_response()
    } else {
        response
    }
}

async fn rejection_text(response: Response) -> Option<String> {
    let bytes = axum::body::to_bytes(response.into_body(), MAX_REJECTION_BYTES)
        .await
        .ok()?;
    let text = String::from_utf8_lossy(&bytes).trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Wrap every route and the fallback of `router` in the translation layers.
pub fn intercept_errors<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(middleware::from_fn(envelope_guard))
        .layer(CatchPanicLayer::custom(handle_panic))
}
