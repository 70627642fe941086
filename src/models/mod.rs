//! Data models for Libcat

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookDetailsRequest, BookId, BookSummary};
pub use book_instance::{BookInstance, BookInstanceStatus};
pub use genre::Genre;
