//! Unified error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::error;

use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// The error type returned by the site's fallible operations.
///
/// Unmatched routes are not errors: the router answers them with a plain
/// `404 Not found` response. Everything here that reaches a handler boundary
/// becomes a generic `500 Server error`; the detail only goes to the log.
#[derive(Debug, Error)]
pub enum Error {
    /// A data document is missing or unreadable.
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// A data document is not valid JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse { path: PathBuf, source: serde_json::Error },

    /// A recognized top-level key holds something other than a list.
    #[error("expected a list under `{key}` in {}", .path.display())]
    Shape { path: PathBuf, key: String },

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("configuration error: {message}")]
    Config { message: String },

    /// Binding the listener or accepting a connection failed.
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        Response::builder()
            .status(Status::InternalServerError)
            .text("Server error")
    }
}
