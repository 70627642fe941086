//! Error types for Libcat server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors raised by a catalog store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Author {family_name}, {first_name} not found")]
    AuthorNotFound {
        family_name: String,
        first_name: String,
    },

    #[error("Genre {0} not found")]
    GenreNotFound(String),

    #[error("Catalog is full")]
    CatalogFull,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The `id` query parameter is missing or malformed
    #[error("Invalid ID.")]
    InvalidId,

    /// Book creation fields are missing or malformed
    #[error("Invalid Inputs")]
    InvalidInputs,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

/// HTML-escape text that may carry user-controlled content before it is
/// echoed back in a response body.
pub fn escape(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidId | AppError::InvalidInputs => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, escape(msg)),
        };

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_encodes_markup() {
        let escaped = escape(r#"<a>&"b"'c'"#);
        assert!(escaped.starts_with("&lt;a&gt;&amp;&quot;b&quot;"));
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('\''));
    }

    #[test]
    fn store_error_messages() {
        let err = StoreError::AuthorNotFound {
            family_name: "Doe".to_string(),
            first_name: "Jane".to_string(),
        };
        assert_eq!(err.to_string(), "Author Doe, Jane not found");
        assert_eq!(
            StoreError::GenreNotFound("Poetry".to_string()).to_string(),
            "Genre Poetry not found"
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(AppError::InvalidId.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidInputs.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::NotFound("Book 1 not found".to_string()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal("boom".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
