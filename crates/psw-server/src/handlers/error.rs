//! Error responses
//!
//! Client mistakes get a status and a small JSON body; backend failures
//! never reach this type.

use crate::constants::{ERROR_CODE_INTERNAL, ERROR_CODE_NOT_FOUND, ERROR_CODE_PRECONDITION_FAILED};
use psw_domain::error::Error;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::Serialize;

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// What a handler returns instead of its payload
pub type HandlerError = (Status, Json<ErrorResponse>);

/// 412 for parameters that cannot be served
pub fn precondition_failed(message: impl Into<String>) -> HandlerError {
    (
        Status::PreconditionFailed,
        Json(ErrorResponse::new(message, ERROR_CODE_PRECONDITION_FAILED)),
    )
}

/// 404 for a capture that does not exist
pub fn not_found(resource: &str) -> HandlerError {
    (
        Status::NotFound,
        Json(ErrorResponse::new(
            format!("{resource} not found"),
            ERROR_CODE_NOT_FOUND,
        )),
    )
}

/// 500 for anything else
pub fn internal(message: impl Into<String>) -> HandlerError {
    (
        Status::InternalServerError,
        Json(ErrorResponse::new(message, ERROR_CODE_INTERNAL)),
    )
}

/// Map a request validation error to its response
pub fn from_error(error: &Error) -> HandlerError {
    match error {
        Error::InvalidArgument { message } => precondition_failed(message.clone()),
        Error::NotFound { resource } => not_found(resource),
        other => internal(other.to_string()),
    }
}
