//! In-memory catalog store, used for local runs without PostgreSQL and in tests

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::{
    error::StoreError,
    models::{Author, Book, BookId, BookInstance, BookInstanceStatus, Genre},
};

use super::BookStore;

#[derive(Debug, Default)]
struct Catalog {
    authors: BTreeMap<i32, Author>,
    genres: BTreeMap<i32, Genre>,
    books: BTreeMap<BookId, Book>,
    instances: BTreeMap<i32, BookInstance>,
}

impl Catalog {
    fn next_book_id(&self) -> Option<BookId> {
        match self.books.keys().next_back() {
            Some(last) => last.successor(),
            None => Some(BookId::FIRST),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBookStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an author, returning its id
    pub async fn add_author(&self, family_name: &str, first_name: &str) -> i32 {
        let mut catalog = self.catalog.write().await;
        let id = catalog.authors.len() as i32 + 1;
        catalog.authors.insert(id, Author::new(id, family_name, first_name));
        id
    }

    /// Register a genre, returning its id
    pub async fn add_genre(&self, name: &str) -> i32 {
        let mut catalog = self.catalog.write().await;
        let id = catalog.genres.len() as i32 + 1;
        catalog.genres.insert(
            id,
            Genre {
                id,
                name: name.to_string(),
            },
        );
        id
    }

    /// Add a book for already registered author and genre
    pub async fn add_book(&self, title: &str, author_id: i32, genre_id: i32) -> Option<BookId> {
        let mut catalog = self.catalog.write().await;
        let author = catalog.authors.get(&author_id)?.clone();
        let genre = catalog.genres.get(&genre_id)?.clone();
        let id = catalog.next_book_id()?;
        catalog.books.insert(
            id,
            Book {
                id,
                title: title.to_string(),
                summary: None,
                isbn: None,
                author,
                genre,
            },
        );
        Some(id)
    }

    /// Add a copy of a book, returning the instance id
    pub async fn add_instance(
        &self,
        book_id: BookId,
        imprint: &str,
        status: BookInstanceStatus,
        due_back: Option<NaiveDate>,
    ) -> i32 {
        let mut catalog = self.catalog.write().await;
        let id = catalog.instances.len() as i32 + 1;
        catalog.instances.insert(
            id,
            BookInstance {
                id,
                book_id,
                imprint: imprint.to_string(),
                status,
                due_back,
            },
        );
        id
    }

    pub async fn book_count(&self) -> usize {
        self.catalog.read().await.books.len()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn get_book(&self, id: BookId) -> Result<Option<Book>, StoreError> {
        Ok(self.catalog.read().await.books.get(&id).cloned())
    }

    async fn get_book_instances(&self, book_id: BookId) -> Result<Vec<BookInstance>, StoreError> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .instances
            .values()
            .filter(|instance| instance.book_id == book_id)
            .cloned()
            .collect())
    }

    async fn save_book_of_existing_author_and_genre(
        &self,
        family_name: &str,
        first_name: &str,
        genre_name: &str,
        title: &str,
    ) -> Result<Book, StoreError> {
        let mut catalog = self.catalog.write().await;

        let author = catalog
            .authors
            .values()
            .find(|author| author.matches(family_name, first_name))
            .cloned()
            .ok_or_else(|| StoreError::AuthorNotFound {
                family_name: family_name.to_string(),
                first_name: first_name.to_string(),
            })?;

        let genre = catalog
            .genres
            .values()
            .find(|genre| genre.name == genre_name)
            .cloned()
            .ok_or_else(|| StoreError::GenreNotFound(genre_name.to_string()))?;

        let id = catalog.next_book_id().ok_or(StoreError::CatalogFull)?;
        let book = Book {
            id,
            title: title.to_string(),
            summary: None,
            isbn: None,
            author,
            genre,
        };
        catalog.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
