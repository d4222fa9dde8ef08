//! In-memory adapters for the book store.

mod book;

pub use book::InMemoryBookRepository;
