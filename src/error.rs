//! Check-in error types with HTTP status code mapping.
//!
//! [`CheckinError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code. Error responses carry a short
//! plain-text line rather than a structured body: the only clients of this
//! surface are phone browsers showing one of the two result fragments.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Server-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum CheckinError {
    /// Roster file could not be read, parsed, or written.
    #[error("roster storage unavailable: {0}")]
    Storage(String),

    /// Inbound check-in request lacks one of the required form fields.
    #[error("invalid form submission: {0}")]
    MissingField(String),

    /// HTML template rendering failed.
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    /// Entry QR code could not be encoded or written.
    #[error("qr code generation failed: {0}")]
    Qr(String),
}

impl CheckinError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Template(_) | Self::Qr(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CheckinError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}
