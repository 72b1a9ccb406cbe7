//! JSON envelopes for the `/api/v1/books` endpoints
//!
//! Both the server and the client build their bodies from these types, so the
//! list key (`books`) cannot drift between the two sides.

use crate::book::Book;
use crate::errors::ValidationErrors;
use serde::{Deserialize, Serialize};

/// Path of the books resource
pub const BOOKS_PATH: &str = "/api/v1/books";

/// `GET` response: `{ "books": [ … ] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooksEnvelope {
    /// Every record, in creation order
    pub books: Vec<Book>,
}

/// `POST` success response: `{ "book": { … } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEnvelope {
    /// The created record
    pub book: Book,
}

/// `POST` validation failure: `{ "errors": { … } }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorsEnvelope {
    /// Per-field messages
    pub errors: ValidationErrors,
}

/// Any other failure: `{ "error": "…" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Human-readable reason
    pub error: String,
}

/// `POST` request body: `{ "book": { "title": … } }`
///
/// A missing `book` object deserializes to empty params, which then fail
/// validation like a blank title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookRequest {
    /// Submitted fields
    #[serde(default)]
    pub book: BookParams,
}

impl CreateBookRequest {
    /// Request carrying a title
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            book: BookParams {
                title: Some(title.into()),
            },
        }
    }
}

/// Fields accepted from a create request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookParams {
    /// Title; `null` and absent are both treated as blank
    #[serde(default)]
    pub title: Option<String>,
}
