//! In-memory repository backed by an ordered vector of books.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::book::{
    domain::{Book, BookId},
    ports::{BookRepository, BookRepositoryError, BookRepositoryResult},
};

/// Thread-safe in-memory book repository.
///
/// Books are kept in insertion order and looked up by linear scan. Clones
/// share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl InMemoryBookRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> BookRepositoryResult<RwLockReadGuard<'_, Vec<Book>>> {
        self.books
            .read()
            .map_err(|err| lock_error(&err))
    }

    fn write(&self) -> BookRepositoryResult<RwLockWriteGuard<'_, Vec<Book>>> {
        self.books
            .write()
            .map_err(|err| lock_error(&err))
    }
}

fn lock_error(err: &impl ToString) -> BookRepositoryError {
    BookRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn position_of(books: &[Book], id: &BookId) -> Option<usize> {
    books.iter().position(|book| book.id() == id)
}

impl BookRepository for InMemoryBookRepository {
    fn list(&self) -> BookRepositoryResult<Vec<Book>> {
        Ok(self.read()?.clone())
    }

    fn find_by_id(&self, id: &BookId) -> BookRepositoryResult<Option<Book>> {
        let books = self.read()?;
        Ok(books.iter().find(|book| book.id() == id).cloned())
    }

    fn insert(&self, book: &Book) -> BookRepositoryResult<()> {
        let mut books = self.write()?;
        if position_of(&books, book.id()).is_some() {
            return Err(BookRepositoryError::DuplicateBook(book.id().clone()));
        }
        books.push(book.clone());
        Ok(())
    }

    fn replace(&self, id: &BookId, book: &Book) -> BookRepositoryResult<()> {
        let mut books = self.write()?;
        let index =
            position_of(&books, id).ok_or_else(|| BookRepositoryError::NotFound(id.clone()))?;

        // A renamed record must not collide with any other stored record.
        if book.id() != id && position_of(&books, book.id()).is_some() {
            return Err(BookRepositoryError::DuplicateBook(book.id().clone()));
        }

        let slot = books
            .get_mut(index)
            .ok_or_else(|| BookRepositoryError::NotFound(id.clone()))?;
        *slot = book.clone();
        Ok(())
    }

    fn remove(&self, id: &BookId) -> BookRepositoryResult<Book> {
        let mut books = self.write()?;
        let index =
            position_of(&books, id).ok_or_else(|| BookRepositoryError::NotFound(id.clone()))?;
        Ok(books.remove(index))
    }
}
