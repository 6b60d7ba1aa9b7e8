//! Error types shared by every layer of the server.
//!
//! [`ApiException`] is the classified failure raised by services when a
//! request cannot be fulfilled for a reason the client should know about.
//! Everything else (database faults, I/O, configuration problems) travels
//! as one of the other [`AppError`] variants and is reported to clients as
//! a generic internal error by [`crate::api::error`].

use serde::Serialize;
use thiserror::Error;

/// Closed set of application error categories.
///
/// Serialized with the upper-case name clients see in the `code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidRequest,
    UserNotFound,
    DuplicateResource,
    InternalError,
}

impl ErrorCode {
    /// Every variant, in declaration order.
    pub const ALL: [ErrorCode; 4] = [
        ErrorCode::InvalidRequest,
        ErrorCode::UserNotFound,
        ErrorCode::DuplicateResource,
        ErrorCode::InternalError,
    ];

    /// The wire name of this code, e.g. `USER_NOT_FOUND`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::DuplicateResource => "DUPLICATE_RESOURCE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified failure carrying an [`ErrorCode`] and a message meant for
/// the client.
///
/// Services construct it and return it with `?`; nothing between the
/// service and the HTTP edge inspects or rewrites it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiException {
    code: ErrorCode,
    message: String,
}

impl ApiException {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UserNotFound, message)
    }

    pub fn duplicate_resource(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicateResource, message)
    }

    pub fn kind(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Unified application error.
///
/// Handlers return `Result<_, AppError>`; the `From` impls let `?` lift
/// errors from every layer without losing a classification.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiException),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// The classified exception, if this error carries one.
    pub fn as_api_exception(&self) -> Option<&ApiException> {
        match self {
            AppError::Api(exception) => Some(exception),
            _ => None,
        }
    }
}
