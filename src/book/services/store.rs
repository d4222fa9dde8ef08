//! Service layer for book listing, creation, replacement and removal.

use crate::book::{
    adapters::memory::InMemoryBookRepository,
    domain::{Book, BookCandidate, BookDomainError, BookId},
    ports::{BookRepository, BookRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::config::{StoreConfig, StoreConfigError};

/// Classification of book store failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookErrorKind {
    /// Input is missing a required field.
    InvalidData,
    /// No book exists under the requested identifier.
    NotFound,
    /// The identifier is already taken by another book.
    DuplicateId,
    /// The backing store failed.
    Internal,
}

/// Service-level errors for book store operations.
#[derive(Debug, Error)]
pub enum BookStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BookDomainError),
    /// The requested identifier does not name a stored book.
    #[error("book not found: {0}")]
    UnknownBook(String),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BookRepositoryError),
}

impl BookStoreError {
    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> BookErrorKind {
        match self {
            Self::Domain(_) => BookErrorKind::InvalidData,
            Self::UnknownBook(_) | Self::Repository(BookRepositoryError::NotFound(_)) => {
                BookErrorKind::NotFound
            }
            Self::Repository(BookRepositoryError::DuplicateBook(_)) => BookErrorKind::DuplicateId,
            Self::Repository(BookRepositoryError::Persistence(_)) => BookErrorKind::Internal,
        }
    }
}

/// Result type for book store service operations.
pub type BookStoreResult<T> = Result<T, BookStoreError>;

/// Book store orchestration service.
///
/// Every operation validates its input before touching the repository; a
/// rejected call leaves the store unchanged.
#[derive(Clone)]
pub struct BookStoreService<R>
where
    R: BookRepository,
{
    repository: Arc<R>,
}

impl<R> BookStoreService<R>
where
    R: BookRepository,
{
    /// Creates a service over an existing repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a service over `repository` and loads the configured seed
    /// books into it, in order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError`] when a seed record is invalid, two seed
    /// records share an identifier, or the repository rejects a write.
    pub fn seeded(repository: Arc<R>, config: &StoreConfig) -> Result<Self, StoreConfigError> {
        let books = config.seed_books()?;
        for book in &books {
            repository.insert(book).map_err(|err| match err {
                BookRepositoryError::DuplicateBook(id) => StoreConfigError::DuplicateSeedBook(id),
                other => StoreConfigError::Repository(other),
            })?;
        }
        info!(count = books.len(), "seeded book store");
        Ok(Self::new(repository))
    }

    /// Returns every stored book in store order.
    ///
    /// # Errors
    ///
    /// Returns [`BookStoreError::Repository`] when the repository read fails.
    pub fn list(&self) -> BookStoreResult<Vec<Book>> {
        Ok(self.repository.list()?)
    }

    /// Retrieves a book by identifier.
    ///
    /// Returns `Ok(None)` when no book is stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BookStoreError::Repository`] when the repository read fails.
    pub fn find(&self, id: &str) -> BookStoreResult<Option<Book>> {
        let Ok(book_id) = BookId::new(id) else {
            return Ok(None);
        };
        Ok(self.repository.find_by_id(&book_id)?)
    }

    /// Validates `candidate` and appends it to the store.
    ///
    /// # Errors
    ///
    /// Returns [`BookStoreError::Domain`] when a required field is missing,
    /// checked before the duplicate identifier check that yields
    /// [`BookRepositoryError::DuplicateBook`].
    pub fn add(&self, candidate: BookCandidate) -> BookStoreResult<Book> {
        let result = Book::try_from(candidate)
            .map_err(BookStoreError::from)
            .and_then(|book| {
                self.repository.insert(&book)?;
                Ok(book)
            });
        match &result {
            Ok(book) => debug!(book_id = %book.id(), "book added"),
            Err(err) => warn!(error = %err, "rejected book addition"),
        }
        result
    }

    /// Replaces the book stored under `id` with `candidate`.
    ///
    /// Existence of `id` is checked before `candidate` is validated. The
    /// replacement keeps the original position and its own identifier
    /// becomes authoritative.
    ///
    /// # Errors
    ///
    /// Returns [`BookStoreError::UnknownBook`] when `id` is not stored,
    /// [`BookStoreError::Domain`] when `candidate` is incomplete, or
    /// [`BookRepositoryError::DuplicateBook`] when the new identifier belongs
    /// to another book.
    pub fn update(&self, id: &str, candidate: BookCandidate) -> BookStoreResult<Book> {
        let result = self.require(id).and_then(|existing| {
            let book = Book::try_from(candidate)?;
            self.repository.replace(existing.id(), &book)?;
            Ok(book)
        });
        match &result {
            Ok(book) => debug!(book_id = id, new_book_id = %book.id(), "book updated"),
            Err(err) => warn!(book_id = id, error = %err, "rejected book update"),
        }
        result
    }

    /// Removes the book stored under `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`BookStoreError::UnknownBook`] when `id` is not stored.
    pub fn delete(&self, id: &str) -> BookStoreResult<Book> {
        let result = self.require(id).and_then(|existing| {
            self.repository
                .remove(existing.id())
                .map_err(BookStoreError::from)
        });
        match &result {
            Ok(_) => debug!(book_id = id, "book deleted"),
            Err(err) => warn!(book_id = id, error = %err, "rejected book deletion"),
        }
        result
    }

    fn require(&self, id: &str) -> BookStoreResult<Book> {
        self.find(id)?
            .ok_or_else(|| BookStoreError::UnknownBook(id.to_owned()))
    }
}

impl BookStoreService<InMemoryBookRepository> {
    /// Creates a service over a fresh in-memory repository loaded with the
    /// configured seed books.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError`] when the seed catalogue is invalid.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreConfigError> {
        Self::seeded(Arc::new(InMemoryBookRepository::new()), config)
    }
}
