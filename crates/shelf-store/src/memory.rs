//! In-memory store

use crate::error::StoreError;
use crate::store::BookStore;
use async_trait::async_trait;
use parking_lot::Mutex;
use shelf_model::Book;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Collection held in memory; counts writes so tests can assert on them
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: Mutex<Vec<Book>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    /// Empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `books`
    #[must_use]
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
            writes: AtomicUsize::new(0),
        }
    }

    /// Copy of the current contents
    #[must_use]
    pub fn snapshot(&self) -> Vec<Book> {
        self.books.lock().clone()
    }

    /// Number of `write_all` calls so far
    #[inline]
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn read_all(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.snapshot())
    }

    async fn write_all(&self, books: &[Book]) -> Result<(), StoreError> {
        *self.books.lock() = books.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
