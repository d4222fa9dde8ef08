//! Book records and the raw candidate shape they are parsed from.

use super::{BookDomainError, BookField, BookId};
use serde::{Deserialize, Serialize};

/// Unvalidated book input.
///
/// Every field is optional so that partial or malformed payloads can be
/// represented and rejected by [`Book::try_from`] instead of failing at the
/// deserialisation boundary.
///
/// # Examples
///
/// ```
/// use bookstore::book::domain::{Book, BookCandidate};
///
/// let candidate: BookCandidate =
///     serde_json::from_str(r#"{"id": "5", "title": "Incomplete Book"}"#).expect("valid JSON");
/// assert!(Book::try_from(candidate).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookCandidate {
    /// Caller-supplied identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Book title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Book author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Book genre.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl BookCandidate {
    /// Creates a candidate with every field populated.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            title: Some(title.into()),
            author: Some(author.into()),
            year: Some(year),
            genre: Some(genre.into()),
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the publication year.
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the genre.
    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}

impl From<Book> for BookCandidate {
    fn from(book: Book) -> Self {
        Self {
            id: Some(book.id.into()),
            title: Some(book.title),
            author: Some(book.author),
            year: Some(book.year),
            genre: Some(book.genre),
        }
    }
}

/// A validated book record.
///
/// All five fields are present and text fields are non-empty. Serialises to
/// exactly the keys `id`, `title`, `author`, `year` and `genre`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookCandidate")]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    year: i32,
    genre: String,
}

impl Book {
    /// Creates a validated book record.
    ///
    /// # Errors
    ///
    /// Returns [`BookDomainError::MissingField`] for the first empty text
    /// field, checked in the order title, author, genre.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Result<Self, BookDomainError> {
        Ok(Self {
            id,
            title: non_empty(Some(title.into()), BookField::Title)?,
            author: non_empty(Some(author.into()), BookField::Author)?,
            year,
            genre: non_empty(Some(genre.into()), BookField::Genre)?,
        })
    }

    /// Returns the book identifier.
    #[must_use]
    pub const fn id(&self) -> &BookId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the publication year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the genre.
    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }
}

impl TryFrom<BookCandidate> for Book {
    type Error = BookDomainError;

    fn try_from(candidate: BookCandidate) -> Result<Self, Self::Error> {
        let id = BookId::new(non_empty(candidate.id, BookField::Id)?)?;
        let title = non_empty(candidate.title, BookField::Title)?;
        let author = non_empty(candidate.author, BookField::Author)?;
        let year = candidate
            .year
            .ok_or(BookDomainError::MissingField(BookField::Year))?;
        let genre = non_empty(candidate.genre, BookField::Genre)?;
        Ok(Self {
            id,
            title,
            author,
            year,
            genre,
        })
    }
}

fn non_empty(value: Option<String>, field: BookField) -> Result<String, BookDomainError> {
    value
        .filter(|text| !text.is_empty())
        .ok_or(BookDomainError::MissingField(field))
}
