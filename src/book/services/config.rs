//! Store configuration and the default seed catalogue.

use crate::book::{
    domain::{Book, BookCandidate, BookDomainError, BookId},
    ports::BookRepositoryError,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors returned while validating a store configuration.
#[derive(Debug, Error)]
pub enum StoreConfigError {
    /// A seed record failed validation.
    #[error("invalid seed book at index {index}: {source}")]
    InvalidSeedBook {
        /// Position of the record in the seed list.
        index: usize,
        /// Validation failure.
        source: BookDomainError,
    },

    /// Two seed records share an identifier.
    #[error("duplicate seed book identifier: {0}")]
    DuplicateSeedBook(BookId),

    /// The configuration document could not be parsed.
    #[error("invalid store configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The repository rejected a seed write.
    #[error(transparent)]
    Repository(BookRepositoryError),
}

/// Configuration for a book store instance.
///
/// # Examples
///
/// ```
/// use bookstore::book::services::StoreConfig;
///
/// let config = StoreConfig::from_json_str(
///     r#"{"seed": [{"id": "1", "title": "Dune", "author": "Frank Herbert",
///                   "year": 1965, "genre": "Science Fiction"}]}"#,
/// )
/// .expect("valid configuration");
/// assert_eq!(config.seed.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Records loaded into the store on construction, in order.
    #[serde(default)]
    pub seed: Vec<BookCandidate>,
}

impl StoreConfig {
    /// Creates a configuration with no seed records.
    #[must_use]
    pub const fn empty() -> Self {
        Self { seed: Vec::new() }
    }

    /// Creates a configuration with the given seed records.
    #[must_use]
    pub fn with_seed(seed: impl IntoIterator<Item = BookCandidate>) -> Self {
        Self {
            seed: seed.into_iter().collect(),
        }
    }

    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError::Parse`] when the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, StoreConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates every seed record and checks identifiers are unique.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError::InvalidSeedBook`] for the first invalid
    /// record or [`StoreConfigError::DuplicateSeedBook`] for the first
    /// repeated identifier.
    pub fn seed_books(&self) -> Result<Vec<Book>, StoreConfigError> {
        let mut seen = HashSet::new();
        let mut books = Vec::with_capacity(self.seed.len());
        for (index, candidate) in self.seed.iter().enumerate() {
            let book = Book::try_from(candidate.clone())
                .map_err(|source| StoreConfigError::InvalidSeedBook { index, source })?;
            if !seen.insert(book.id().clone()) {
                return Err(StoreConfigError::DuplicateSeedBook(book.id().clone()));
            }
            books.push(book);
        }
        Ok(books)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::with_seed([
            BookCandidate::new("1", "1984", "George Orwell", 1949, "Dystopian"),
            BookCandidate::new("2", "To Kill a Mockingbird", "Harper Lee", 1960, "Fiction"),
            BookCandidate::new(
                "3",
                "The Great Gatsby",
                "F. Scott Fitzgerald",
                1925,
                "Classic",
            ),
        ])
    }
}
