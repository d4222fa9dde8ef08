//! Identifier type for book records.

use super::{BookDomainError, BookField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied book identifier.
///
/// Identifiers are opaque strings; the only constraint is that they are not
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookId(String);

impl BookId {
    /// Creates a validated book identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BookDomainError::MissingField`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, BookDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(BookDomainError::MissingField(BookField::Id));
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BookId {
    type Error = BookDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for BookId {
    type Error = BookDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BookId> for String {
    fn from(value: BookId) -> Self {
        value.0
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for BookId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BookId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
