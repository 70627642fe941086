//! Repository layer for catalog data access

pub mod books;
pub mod memory;

use async_trait::async_trait;

use crate::{
    error::StoreError,
    models::{Book, BookId, BookInstance},
};

pub use books::BooksRepository;
pub use memory::MemoryBookStore;

/// Catalog persistence used by the book handlers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Get a book with its author and genre, `None` if no such book exists
    async fn get_book(&self, id: BookId) -> Result<Option<Book>, StoreError>;

    /// Get every copy of a book
    async fn get_book_instances(&self, book_id: BookId) -> Result<Vec<BookInstance>, StoreError>;

    /// Create a book for an author and a genre that must already exist.
    /// Fails with `AuthorNotFound` or `GenreNotFound` otherwise; neither is created.
    async fn save_book_of_existing_author_and_genre(
        &self,
        family_name: &str,
        first_name: &str,
        genre_name: &str,
        title: &str,
    ) -> Result<Book, StoreError>;

    /// Check that the backing storage is reachable
    async fn ping(&self) -> Result<(), StoreError>;
}
