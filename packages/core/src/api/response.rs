//! Uniform JSON envelope for every response body.
//!
//! ```json
//! { "success": true,  "message": "OK",          "data": 1,    "code": null }
//! { "success": false, "message": "user 42 ...", "data": null, "code": "USER_NOT_FOUND" }
//! ```
//!
//! An envelope is built once through [`ApiResponse::ok`],
//! [`ApiResponse::ok_with_message`] or [`ApiResponse::fail`] and never
//! changed afterwards.

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{AppError, ErrorCode};

const DEFAULT_SUCCESS_MESSAGE: &str = "OK";

/// Response extension attached to every enveloped response. The envelope
/// guard uses it to tell our own bodies apart from framework defaults.
#[derive(Debug, Clone, Copy)]
pub struct Enveloped;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    message: String,
    data: Option<T>,
    code: Option<ErrorCode>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self::ok_with_message(DEFAULT_SUCCESS_MESSAGE, data)
    }

    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            code: None,
        }
    }

    pub fn fail(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            code: Some(code),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }
}

/// A payload that cannot be serialized is an unclassified failure and goes
/// through the translator like any other.
impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let body = match serde_json::to_vec(&self) {
            Ok(body) => body,
            Err(err) => {
                return AppError::unexpected(format!("Failed to serialize response body: {}", err))
                    .into_response();
            }
        };

        let mut response = (
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            body,
        )
            .into_response();
        response.extensions_mut().insert(Enveloped);
        response
    }
}
