//! Error types for book record validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Required fields of a book record, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookField {
    /// Caller-supplied identifier.
    Id,
    /// Book title.
    Title,
    /// Book author.
    Author,
    /// Publication year.
    Year,
    /// Book genre.
    Genre,
}

impl BookField {
    /// Returns the field name as it appears in serialised records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
            Self::Genre => "genre",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors returned while constructing book domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookDomainError {
    /// A required field is absent or empty.
    #[error("required book field '{0}' is missing or empty")]
    MissingField(BookField),
}
