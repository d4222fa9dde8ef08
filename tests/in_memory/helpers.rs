//! Shared test helpers for in-memory book store integration tests.

use bookstore::book::{
    adapters::memory::InMemoryBookRepository,
    api::BookApi,
    domain::{Book, BookCandidate},
    services::{BookStoreService, StoreConfig},
};
use rstest::fixture;

/// API over the in-memory repository.
pub type TestApi = BookApi<InMemoryBookRepository>;

/// Provides an API over a store seeded with the default catalogue.
///
/// # Panics
///
/// Panics if the default seed catalogue is invalid.
#[fixture]
pub fn api() -> TestApi {
    BookApi::new(BookStoreService::from_config(&StoreConfig::default()).expect("valid seed"))
}

/// Returns a complete candidate for `id`.
#[must_use]
pub fn sample(id: &str) -> BookCandidate {
    BookCandidate::new(id, format!("Title {id}"), "Sample Author", 2001, "Sample Genre")
}

/// Lists the books currently held by `api`.
///
/// # Errors
///
/// Returns an error if the listing response carries no data.
pub fn books(api: &TestApi) -> Result<Vec<Book>, eyre::Report> {
    let response = api.get_books();
    response
        .data
        .ok_or_else(|| eyre::eyre!("listing response carried no data: {:?}", response.error))
}
