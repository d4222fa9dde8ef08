//! Domain model for book records.
//!
//! Raw input arrives as a [`BookCandidate`] and becomes a [`Book`] only
//! through validation, so every record that reaches a repository has all of
//! its required fields.

mod book;
mod error;
mod ids;

pub use book::{Book, BookCandidate};
pub use error::{BookDomainError, BookField};
pub use ids::BookId;
