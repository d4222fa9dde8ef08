//! Repository port for book storage and lookup.

use crate::book::domain::{Book, BookId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for book repository operations.
pub type BookRepositoryResult<T> = Result<T, BookRepositoryError>;

/// Ordered book storage contract.
///
/// Implementations keep records in insertion order and never hold two
/// records with the same identifier.
pub trait BookRepository: Send + Sync {
    /// Returns every stored book in store order.
    ///
    /// # Errors
    ///
    /// Returns [`BookRepositoryError::Persistence`] when the backing store is
    /// unavailable.
    fn list(&self) -> BookRepositoryResult<Vec<Book>>;

    /// Finds a book by identifier.
    ///
    /// Returns `None` when the book does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BookRepositoryError::Persistence`] when the backing store is
    /// unavailable.
    fn find_by_id(&self, id: &BookId) -> BookRepositoryResult<Option<Book>>;

    /// Appends a new book to the end of the store.
    ///
    /// # Errors
    ///
    /// Returns [`BookRepositoryError::DuplicateBook`] when a book with the
    /// same identifier already exists.
    fn insert(&self, book: &Book) -> BookRepositoryResult<()>;

    /// Replaces the book stored under `id` with `book`, keeping its position.
    ///
    /// The replacement may carry a different identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BookRepositoryError::NotFound`] when no book is stored under
    /// `id`, or [`BookRepositoryError::DuplicateBook`] when the replacement
    /// identifier belongs to another stored book.
    fn replace(&self, id: &BookId, book: &Book) -> BookRepositoryResult<()>;

    /// Removes the book stored under `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`BookRepositoryError::NotFound`] when no book is stored under
    /// `id`.
    fn remove(&self, id: &BookId) -> BookRepositoryResult<Book>;
}

/// Errors returned by book repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BookRepositoryError {
    /// A book with the same identifier already exists.
    #[error("duplicate book identifier: {0}")]
    DuplicateBook(BookId),

    /// The book was not found.
    #[error("book not found: {0}")]
    NotFound(BookId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BookRepositoryError {
    /// Wraps a storage-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
