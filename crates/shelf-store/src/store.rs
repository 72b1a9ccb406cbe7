//! Storage seam

use crate::error::StoreError;
use async_trait::async_trait;
use shelf_model::Book;

/// Whole-snapshot access to the book collection
///
/// There are no partial updates: callers read everything, change it, and
/// write everything back. Implementations do not coordinate concurrent
/// writers; [`Library`](crate::Library) does that.
#[async_trait]
pub trait BookStore: Send + Sync + 'static {
    /// Read every record in creation order
    async fn read_all(&self) -> Result<Vec<Book>, StoreError>;

    /// Replace the stored collection with `books`
    async fn write_all(&self, books: &[Book]) -> Result<(), StoreError>;
}
