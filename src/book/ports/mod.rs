//! Port contracts for the book store.
//!
//! Ports define infrastructure-agnostic interfaces used by book services.

pub mod repository;

pub use repository::{BookRepository, BookRepositoryError, BookRepositoryResult};
