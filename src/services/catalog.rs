//! Catalog service: book details and book creation

use std::sync::Arc;

use crate::{
    error::StoreError,
    models::{Book, BookDetailsRequest, BookId, BookSummary},
    repository::BookStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn BookStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Fetch a book and its copies concurrently.
    /// `None` when the book does not exist; copies fetched alongside are dropped.
    /// The first failing lookup fails the whole call.
    pub async fn get_book_summary(&self, id: BookId) -> Result<Option<BookSummary>, StoreError> {
        let (book, copies) = tokio::try_join!(
            self.store.get_book(id),
            self.store.get_book_instances(id),
        )?;

        Ok(book.map(|book| BookSummary::new(book, copies)))
    }

    /// Create a book for an existing author and genre
    pub async fn create_book(&self, details: &BookDetailsRequest) -> Result<Book, StoreError> {
        self.store
            .save_book_of_existing_author_and_genre(
                &details.family_name,
                &details.first_name,
                &details.genre_name,
                &details.book_title,
            )
            .await
    }

    /// Check that the catalog store is reachable
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
