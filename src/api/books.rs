//! Book endpoints: details lookup and creation

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookSummary},
    AppState,
};

use super::sanitizers::{SanitizedBookDetails, SanitizedId};

/// Routes mounted under `/book_dtls`
pub fn book_details_routes() -> Router<AppState> {
    Router::new().route("/", get(get_book_details))
}

/// Routes mounted under `/newbook`
pub fn create_book_routes() -> Router<AppState> {
    Router::new().route("/", post(create_book))
}

/// Get a book's title, author name and copies
#[utoipa::path(
    get,
    path = "/book_dtls",
    tag = "books",
    params(
        ("id" = String, Query, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookSummary),
        (status = 400, description = "Invalid ID."),
        (status = 404, description = "Book not found"),
        (status = 500, description = "Error fetching book")
    )
)]
pub async fn get_book_details(
    State(state): State<AppState>,
    SanitizedId(id): SanitizedId,
) -> AppResult<Json<BookSummary>> {
    match state.services.catalog.get_book_summary(id).await {
        Ok(Some(summary)) => Ok(Json(summary)),
        Ok(None) => Err(AppError::NotFound(format!("Book {} not found", id))),
        Err(e) => {
            tracing::error!("Error fetching book {}: {}", id, e);
            Err(AppError::Internal(format!("Error fetching book {}", id)))
        }
    }
}

/// Create a book for an existing author and genre
#[utoipa::path(
    post,
    path = "/newbook",
    tag = "books",
    request_body(
        content = crate::models::BookDetailsRequest,
        content_type = "application/x-www-form-urlencoded",
        description = "Author, genre and title of the new book (JSON is accepted too)"
    ),
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Invalid Inputs"),
        (status = 500, description = "Error creating book")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    SanitizedBookDetails(details): SanitizedBookDetails,
) -> AppResult<Json<Book>> {
    if !details.is_complete() {
        return Err(AppError::InvalidInputs);
    }

    match state.services.catalog.create_book(&details).await {
        Ok(book) => {
            tracing::info!("Created book {} ({})", book.id, book.title);
            Ok(Json(book))
        }
        Err(e) => {
            tracing::error!("Error creating book: {}", e);
            Err(AppError::Internal(format!("Error creating book: {}", e)))
        }
    }
}
