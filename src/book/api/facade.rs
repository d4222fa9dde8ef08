//! Envelope-returning facade over [`BookStoreService`].

use crate::book::{
    domain::BookCandidate,
    ports::BookRepository,
    services::{BookStoreResult, BookStoreService},
};

use super::response::{BookResponse, ResponseStatus};

/// Book store API.
///
/// Wraps the typed service and reports every outcome, including failures,
/// as a [`BookResponse`].
///
/// # Examples
///
/// ```
/// use bookstore::book::{
///     api::BookApi,
///     domain::BookCandidate,
///     services::{BookStoreService, StoreConfig},
/// };
///
/// let service = BookStoreService::from_config(&StoreConfig::default()).expect("valid seed");
/// let api = BookApi::new(service);
///
/// let incomplete = BookCandidate::default().with_id("5").with_title("Incomplete Book");
/// let response = api.add_book(incomplete);
/// assert_eq!(response.status.code(), 400);
/// assert_eq!(response.error.as_deref(), Some("Invalid Book Data!"));
/// ```
#[derive(Clone)]
pub struct BookApi<R>
where
    R: BookRepository,
{
    service: BookStoreService<R>,
}

impl<R> BookApi<R>
where
    R: BookRepository,
{
    /// Creates an API over `service`.
    #[must_use]
    pub const fn new(service: BookStoreService<R>) -> Self {
        Self { service }
    }

    /// Returns the wrapped service.
    #[must_use]
    pub const fn service(&self) -> &BookStoreService<R> {
        &self.service
    }

    /// Lists every stored book.
    #[must_use]
    pub fn get_books(&self) -> BookResponse {
        respond(self.service.list(), |books| {
            BookResponse::with_data(ResponseStatus::Ok, books)
        })
    }

    /// Adds a new book.
    #[must_use]
    pub fn add_book(&self, candidate: BookCandidate) -> BookResponse {
        respond(self.service.add(candidate), |_| {
            BookResponse::with_message(ResponseStatus::Created, "Book added successfully.")
        })
    }

    /// Replaces the book stored under `id`.
    #[must_use]
    pub fn update_book(&self, id: &str, candidate: BookCandidate) -> BookResponse {
        respond(self.service.update(id, candidate), |_| {
            BookResponse::with_message(ResponseStatus::Ok, "Book updated successfully.")
        })
    }

    /// Removes the book stored under `id`.
    #[must_use]
    pub fn delete_book(&self, id: &str) -> BookResponse {
        respond(self.service.delete(id), |_| {
            BookResponse::with_message(ResponseStatus::Ok, "Book deleted successfully.")
        })
    }
}

fn respond<T>(
    result: BookStoreResult<T>,
    on_success: impl FnOnce(T) -> BookResponse,
) -> BookResponse {
    match result {
        Ok(value) => on_success(value),
        Err(err) => BookResponse::from(&err),
    }
}
