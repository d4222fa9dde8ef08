//! Shared world state for book store BDD scenarios.

use bookstore::book::{
    adapters::memory::InMemoryBookRepository,
    api::{BookApi, BookResponse},
    services::{BookStoreService, StoreConfig, StoreConfigError},
};
use rstest::fixture;

/// API type used by the BDD world.
pub type TestBookApi = BookApi<InMemoryBookRepository>;

/// Scenario world for book store behaviour tests.
pub struct BookWorld {
    pub api: Option<TestBookApi>,
    pub last_response: Option<BookResponse>,
}

impl BookWorld {
    /// Creates a world with no store and no recorded response.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            api: None,
            last_response: None,
        }
    }

    /// Replaces the store with one built from `config`.
    pub fn seed(&mut self, config: &StoreConfig) -> Result<(), StoreConfigError> {
        self.api = Some(BookApi::new(BookStoreService::from_config(config)?));
        Ok(())
    }

    /// Returns the scenario API, failing when no store has been seeded.
    pub fn api(&self) -> Result<&TestBookApi, eyre::Report> {
        self.api
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing book store in scenario world"))
    }

    /// Returns the most recent operation response.
    pub fn last_response(&self) -> Result<&BookResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing response in scenario world"))
    }
}

impl Default for BookWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BookWorld {
    BookWorld::default()
}
