//! Figure Error Types
//!
//! Three user-visible error classes (malformed input, not found, store
//! failure), each mapped to a fixed status and a short static JSON body.
//! Underlying causes are logged server-side and never leave the process.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::kind::ErrorKind;
use serde::Serialize;
use thiserror::Error;

/// Figure-specific result type alias
pub type FigureResult<T> = Result<T, FigureError>;

/// Store operation that failed, for the static failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Fetch,
    Insert,
    Update,
    Delete,
}

impl StoreOp {
    /// The fixed message reported to the caller on a 500.
    pub const fn failure_message(&self) -> &'static str {
        match self {
            StoreOp::Fetch => "Error fetching data",
            StoreOp::Insert => "Insert failed",
            StoreOp::Update => "Update failed",
            StoreOp::Delete => "Delete failed",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            StoreOp::Fetch => "fetch",
            StoreOp::Insert => "insert",
            StoreOp::Update => "update",
            StoreOp::Delete => "delete",
        }
    }
}

/// Figure-specific error variants
#[derive(Debug, Error)]
pub enum FigureError {
    /// Path identifier is not a syntactically valid store identifier
    #[error("Invalid ID")]
    InvalidId(#[source] uuid::Error),

    /// Request body could not be parsed into the record shape
    #[error("Invalid JSON")]
    InvalidBody(#[source] JsonRejection),

    /// No record matched a direct lookup
    #[error("Figure not found")]
    NotFound,

    /// The store call itself failed (connectivity, query, decode)
    #[error("{}", .op.failure_message())]
    Store {
        op: StoreOp,
        #[source]
        source: sqlx::Error,
    },
}

impl FigureError {
    /// Wrap a store failure with the operation that caused it
    pub fn store(op: StoreOp, source: sqlx::Error) -> Self {
        FigureError::Store { op, source }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FigureError::InvalidId(_) | FigureError::InvalidBody(_) => ErrorKind::BadRequest,
            FigureError::NotFound => ErrorKind::NotFound,
            FigureError::Store { .. } => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// The fixed message returned to the caller
    pub fn message(&self) -> &'static str {
        match self {
            FigureError::InvalidId(_) => "Invalid ID",
            FigureError::InvalidBody(_) => "Invalid JSON",
            FigureError::NotFound => "Figure not found",
            FigureError::Store { op, .. } => op.failure_message(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            FigureError::Store { op, source } => {
                tracing::error!(op = op.as_str(), error = %source, "figure store error");
            }
            FigureError::InvalidId(source) => {
                tracing::debug!(error = %source, "rejected malformed identifier");
            }
            FigureError::InvalidBody(source) => {
                tracing::debug!(error = %source, "rejected unparsable body");
            }
            FigureError::NotFound => {
                tracing::debug!("figure lookup matched no record");
            }
        }
    }
}

/// Error body shape shared by every error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl IntoResponse for FigureError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // Static message only; the cause stays in the server log
        (status, Json(ErrorBody { error: self.message() })).into_response()
    }
}
