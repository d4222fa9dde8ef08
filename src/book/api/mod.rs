//! Envelope API for the book store.
//!
//! [`BookApi`] is the caller-facing surface: each operation returns a
//! [`BookResponse`] with a status code and either a payload, a message or an
//! error string. Errors never escape as `Err` values at this layer.

mod facade;
mod response;

pub use facade::BookApi;
pub use response::{
    BOOK_ALREADY_EXISTS, BOOK_NOT_FOUND, BookResponse, INTERNAL_STORE_ERROR, INVALID_BOOK_DATA,
    ResponseStatus,
};
