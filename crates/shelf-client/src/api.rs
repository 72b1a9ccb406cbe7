//! Books API seam

use crate::error::ClientError;
use async_trait::async_trait;
use shelf_model::{Book, ValidationErrors};

/// Result of a create call the view knows how to handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// 201: the stored record
    Created(Book),
    /// 422: per-field messages
    Rejected(ValidationErrors),
}

/// Calls the view makes against the server
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksApi: Send + Sync {
    /// Fetch the whole collection
    async fn list(&self) -> Result<Vec<Book>, ClientError>;

    /// Submit a new record
    async fn create(&self, title: &str) -> Result<CreateOutcome, ClientError>;
}
