//! Books repository backed by PostgreSQL

use async_trait::async_trait;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use crate::{
    error::StoreError,
    models::{Author, Book, BookId, BookInstance, BookInstanceStatus, Genre},
};

use super::BookStore;

fn decode_book_id(column: &str, id: i32) -> Result<BookId, sqlx::Error> {
    BookId::try_from(id).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

fn row_to_book(row: &PgRow) -> Result<Book, sqlx::Error> {
    Ok(Book {
        id: decode_book_id("id", row.try_get("id")?)?,
        title: row.try_get("title")?,
        summary: row.try_get("summary")?,
        isbn: row.try_get("isbn")?,
        author: Author::new(
            row.try_get("author_id")?,
            row.try_get::<String, _>("family_name")?,
            row.try_get::<String, _>("first_name")?,
        ),
        genre: Genre {
            id: row.try_get("genre_id")?,
            name: row.try_get("genre_name")?,
        },
    })
}

fn row_to_instance(row: &PgRow) -> Result<BookInstance, sqlx::Error> {
    let status: String = row.try_get("status")?;
    Ok(BookInstance {
        id: row.try_get("id")?,
        book_id: decode_book_id("book_id", row.try_get("book_id")?)?,
        imprint: row.try_get("imprint")?,
        status: BookInstanceStatus::from(status.as_str()),
        due_back: row.try_get("due_back")?,
    })
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Find an author by exact family and first name
    async fn find_author(&self, family_name: &str, first_name: &str) -> Result<Option<Author>, StoreError> {
        let row = sqlx::query(
            "SELECT id, family_name, first_name FROM authors WHERE family_name = $1 AND first_name = $2",
        )
        .bind(family_name)
        .bind(first_name)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Author::new(
                row.try_get("id")?,
                row.try_get::<String, _>("family_name")?,
                row.try_get::<String, _>("first_name")?,
            ))),
            None => Ok(None),
        }
    }

    /// Find a genre by exact name
    async fn find_genre(&self, name: &str) -> Result<Option<Genre>, StoreError> {
        let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(genre)
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn get_book(&self, id: BookId) -> Result<Option<Book>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT b.id, b.title, b.summary, b.isbn,
                   a.id AS author_id, a.family_name, a.first_name,
                   g.id AS genre_id, g.name AS genre_name
            FROM books b
            JOIN authors a ON b.author_id = a.id
            JOIN genres g ON b.genre_id = g.id
            WHERE b.id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_book).transpose()?)
    }

    async fn get_book_instances(&self, book_id: BookId) -> Result<Vec<BookInstance>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, book_id, imprint, status, due_back
            FROM book_instances
            WHERE book_id = $1
            ORDER BY id
            "#,
        )
        .bind(book_id.get())
        .fetch_all(&self.pool)
        .await?;

        let instances = rows
            .iter()
            .map(row_to_instance)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(instances)
    }

    async fn save_book_of_existing_author_and_genre(
        &self,
        family_name: &str,
        first_name: &str,
        genre_name: &str,
        title: &str,
    ) -> Result<Book, StoreError> {
        let author = self
            .find_author(family_name, first_name)
            .await?
            .ok_or_else(|| StoreError::AuthorNotFound {
                family_name: family_name.to_string(),
                first_name: first_name.to_string(),
            })?;

        let genre = self
            .find_genre(genre_name)
            .await?
            .ok_or_else(|| StoreError::GenreNotFound(genre_name.to_string()))?;

        let row = sqlx::query(
            r#"
            INSERT INTO books (title, author_id, genre_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, summary, isbn
            "#,
        )
        .bind(title)
        .bind(author.id)
        .bind(genre.id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Created book id={} for author id={}", row.try_get::<i32, _>("id")?, author.id);

        Ok(Book {
            id: decode_book_id("id", row.try_get("id")?)?,
            title: row.try_get("title")?,
            summary: row.try_get("summary")?,
            isbn: row.try_get("isbn")?,
            author,
            genre,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
