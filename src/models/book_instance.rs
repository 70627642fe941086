//! Book instance (physical copy) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::BookId;

/// Lending status of a copy. DB stores the variant name as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum BookInstanceStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

impl BookInstanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookInstanceStatus::Available => "Available",
            BookInstanceStatus::Maintenance => "Maintenance",
            BookInstanceStatus::Loaned => "Loaned",
            BookInstanceStatus::Reserved => "Reserved",
        }
    }
}

impl From<&str> for BookInstanceStatus {
    fn from(s: &str) -> Self {
        match s {
            "Available" => BookInstanceStatus::Available,
            "Loaned" => BookInstanceStatus::Loaned,
            "Reserved" => BookInstanceStatus::Reserved,
            _ => BookInstanceStatus::Maintenance,
        }
    }
}

impl std::fmt::Display for BookInstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lendable copy of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookInstance {
    pub id: i32,
    pub book_id: BookId,
    pub imprint: String,
    pub status: BookInstanceStatus,
    /// Date the copy is due back, when loaned
    pub due_back: Option<NaiveDate>,
}
