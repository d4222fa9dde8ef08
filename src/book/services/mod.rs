//! Application services for the book store.

mod config;
mod store;

pub use config::{StoreConfig, StoreConfigError};
pub use store::{BookErrorKind, BookStoreError, BookStoreResult, BookStoreService};
