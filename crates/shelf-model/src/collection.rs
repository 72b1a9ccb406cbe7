//! The persisted collection document

use crate::book::Book;
use serde::{Deserialize, Serialize};

/// Entire persisted state: `{ "books": [ … ] }`
///
/// Read and rewritten as a whole on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCollection {
    /// Records in creation order
    pub books: Vec<Book>,
}

impl BookCollection {
    /// Empty collection
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap an existing sequence
    #[inline]
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Unwrap into the record sequence
    #[inline]
    #[must_use]
    pub fn into_books(self) -> Vec<Book> {
        self.books
    }
}
