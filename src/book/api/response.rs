//! Uniform response envelope returned by every book store operation.

use crate::book::{
    domain::Book,
    services::{BookErrorKind, BookStoreError},
};
use serde::Serialize;

/// Error text for incomplete book input.
pub const INVALID_BOOK_DATA: &str = "Invalid Book Data!";
/// Error text for unknown book identifiers.
pub const BOOK_NOT_FOUND: &str = "Book Not Found!";
/// Error text for identifiers already taken by another book.
pub const BOOK_ALREADY_EXISTS: &str = "Book Already Exists!";
/// Error text for storage failures.
pub const INTERNAL_STORE_ERROR: &str = "Internal Store Error!";

/// Status codes carried by a [`BookResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u16")]
pub enum ResponseStatus {
    /// The request succeeded.
    Ok,
    /// A record was created.
    Created,
    /// The input was invalid.
    BadRequest,
    /// The target record does not exist.
    NotFound,
    /// The request conflicts with an existing record.
    Conflict,
    /// The store failed.
    InternalError,
}

impl ResponseStatus {
    /// Returns the numeric status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::InternalError => 500,
        }
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok | Self::Created)
    }
}

impl From<ResponseStatus> for u16 {
    fn from(status: ResponseStatus) -> Self {
        status.code()
    }
}

/// Response envelope.
///
/// Successful responses carry `data` or `message`; failures carry `error`.
/// Absent members are omitted when serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookResponse {
    /// Outcome status.
    pub status: ResponseStatus,
    /// Payload for listing operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Book>>,
    /// Human-readable success message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Human-readable failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BookResponse {
    /// Creates a success response carrying `data`.
    #[must_use]
    pub const fn with_data(status: ResponseStatus, data: Vec<Book>) -> Self {
        Self {
            status,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Creates a success response carrying a message.
    #[must_use]
    pub fn with_message(status: ResponseStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Creates a failure response.
    #[must_use]
    pub fn failure(status: ResponseStatus, error: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Returns `true` when the status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl From<&BookStoreError> for BookResponse {
    fn from(err: &BookStoreError) -> Self {
        match err.kind() {
            BookErrorKind::InvalidData => {
                Self::failure(ResponseStatus::BadRequest, INVALID_BOOK_DATA)
            }
            BookErrorKind::NotFound => Self::failure(ResponseStatus::NotFound, BOOK_NOT_FOUND),
            BookErrorKind::DuplicateId => {
                Self::failure(ResponseStatus::Conflict, BOOK_ALREADY_EXISTS)
            }
            BookErrorKind::Internal => {
                Self::failure(ResponseStatus::InternalError, INTERNAL_STORE_ERROR)
            }
        }
    }
}
