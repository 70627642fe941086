//! Book model and related types

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use super::{author::Author, book_instance::BookInstance, genre::Genre};

/// Identifier of a book, always a positive integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "i32", into = "i32")]
pub struct BookId(i32);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid book id {0}")]
pub struct InvalidBookId(pub i32);

impl BookId {
    pub const FIRST: BookId = BookId(1);

    /// Parse an untrusted identifier. Surrounding whitespace is ignored;
    /// anything but a positive `i32` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match trimmed.parse::<i32>() {
            Ok(id) if id > 0 => Some(Self(id)),
            _ => None,
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// The next id, `None` on overflow
    pub fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl TryFrom<i32> for BookId {
    type Error = InvalidBookId;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(InvalidBookId(id))
        }
    }
}

impl From<BookId> for i32 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Full book record, as returned after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub summary: Option<String>,
    pub isbn: Option<String>,
    pub author: Author,
    pub genre: Genre,
}

/// Book details response: title, author display name and every copy
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub title: String,
    pub author: String,
    pub copies: Vec<BookInstance>,
}

impl BookSummary {
    pub fn new(book: Book, copies: Vec<BookInstance>) -> Self {
        Self {
            title: book.title,
            author: book.author.name,
            copies,
        }
    }
}

/// Fields for creating a book of an existing author and genre.
/// Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BookDetailsRequest {
    /// Author family name
    #[validate(length(max = 100))]
    pub family_name: String,
    /// Author first name
    #[validate(length(max = 100))]
    pub first_name: String,
    /// Name of an existing genre
    #[validate(length(max = 100))]
    pub genre_name: String,
    #[validate(length(max = 200))]
    pub book_title: String,
}

impl BookDetailsRequest {
    /// Trim surrounding whitespace from every field
    pub fn trimmed(self) -> Self {
        Self {
            family_name: self.family_name.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            genre_name: self.genre_name.trim().to_string(),
            book_title: self.book_title.trim().to_string(),
        }
    }

    /// Apply `f` to every field
    pub fn map_fields(self, f: impl Fn(&str) -> String) -> Self {
        Self {
            family_name: f(&self.family_name),
            first_name: f(&self.first_name),
            genre_name: f(&self.genre_name),
            book_title: f(&self.book_title),
        }
    }

    /// All four fields are present
    pub fn is_complete(&self) -> bool {
        !self.family_name.is_empty()
            && !self.first_name.is_empty()
            && !self.genre_name.is_empty()
            && !self.book_title.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_id_accepts_positive_integers() {
        assert_eq!(BookId::parse("42").map(BookId::get), Some(42));
        assert_eq!(BookId::parse("  7 ").map(BookId::get), Some(7));
    }

    #[test]
    fn book_id_rejects_malformed_input() {
        for raw in ["", "   ", "0", "-3", "+3", "abc", "1e3", "12<script>", "99999999999"] {
            assert_eq!(BookId::parse(raw), None, "{raw:?} should be rejected");
        }
    }

    #[test]
    fn book_id_deserialization_keeps_ids_positive() {
        assert_eq!(serde_json::from_str::<BookId>("7").unwrap().get(), 7);
        assert!(serde_json::from_str::<BookId>("0").is_err());
        assert!(serde_json::from_str::<BookId>("-5").is_err());
        assert_eq!(serde_json::to_string(&BookId::FIRST).unwrap(), "1");
    }

    #[test]
    fn details_request_completeness() {
        let request = BookDetailsRequest {
            family_name: "Doe".to_string(),
            first_name: "Jane".to_string(),
            genre_name: "Fiction".to_string(),
            book_title: String::new(),
        };
        assert!(!request.is_complete());

        let request = BookDetailsRequest {
            book_title: "X".to_string(),
            ..request
        };
        assert!(request.is_complete());
    }

    #[test]
    fn details_request_defaults_missing_fields() {
        let request: BookDetailsRequest =
            serde_json::from_str(r#"{"familyName": " Doe ", "bookTitle": "X"}"#).unwrap();
        let request = request.trimmed();
        assert_eq!(request.family_name, "Doe");
        assert_eq!(request.first_name, "");
        assert!(!request.is_complete());
    }
}
