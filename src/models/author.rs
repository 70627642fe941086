//! Author model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i32,
    pub family_name: String,
    pub first_name: String,
    /// Display name, `"<family name>, <first name>"`
    #[serde(default)]
    pub name: String,
}

impl Author {
    pub fn new(id: i32, family_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        let mut author = Self {
            id,
            family_name: family_name.into(),
            first_name: first_name.into(),
            name: String::new(),
        };
        author.name = author.display_name();
        author
    }

    /// Full name used in book summaries
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Whether this author matches the given family and first name
    pub fn matches(&self, family_name: &str, first_name: &str) -> bool {
        self.family_name == family_name && self.first_name == first_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_joins_family_and_first_name() {
        let author = Author::new(1, "Doe", "Jane");
        assert_eq!(author.name, "Doe, Jane");
        assert!(author.matches("Doe", "Jane"));
        assert!(!author.matches("Jane", "Doe"));
    }
}
