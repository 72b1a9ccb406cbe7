//! Book creation and listing
//!
//! [`Library`] owns the only write path into a [`BookStore`]. A save is a
//! read-modify-write of the whole collection, so saves are serialized through
//! a single async mutex; two concurrent saves in one process can never read
//! the same snapshot and hand out the same id.

use crate::error::StoreError;
use crate::store::BookStore;
use shelf_model::{next_id, Book, BookDraft, BookId, ValidationErrors};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Result of [`Library::save`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Draft was valid and is now persisted
    Created(Book),
    /// Draft failed validation; nothing was written
    Invalid(ValidationErrors),
}

impl SaveOutcome {
    /// True when a record was persisted
    #[inline]
    #[must_use]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Validation, id assignment and persistence over an injected store
pub struct Library {
    store: Arc<dyn BookStore>,
    writer: Mutex<()>,
}

impl Library {
    /// Library over `store`
    #[must_use]
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self {
            store,
            writer: Mutex::new(()),
        }
    }

    /// Every record in creation order
    pub async fn list(&self) -> Result<Vec<Book>, StoreError> {
        self.store.read_all().await
    }

    /// Validate `draft` and, if valid, persist it under the next id
    ///
    /// On [`SaveOutcome::Invalid`] the messages are also left on the draft.
    /// Store failures are returned as errors and leave the draft untouched.
    pub async fn save(&self, draft: &mut BookDraft) -> Result<SaveOutcome, StoreError> {
        if !draft.is_valid() {
            tracing::debug!(errors = ?draft.errors(), "rejected book draft");
            return Ok(SaveOutcome::Invalid(draft.errors().clone()));
        }

        let _writer = self.writer.lock().await;

        let mut books = self.store.read_all().await?;
        let id = next_id(&books).ok_or(StoreError::IdSpaceExhausted {
            max: BookId(u64::MAX),
        })?;
        let book = draft.clone().into_book(id);
        books.push(book.clone());
        self.store.write_all(&books).await?;

        tracing::info!(id = %book.id, title = %book.title, "created book");
        Ok(SaveOutcome::Created(book))
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library").finish_non_exhaustive()
    }
}
