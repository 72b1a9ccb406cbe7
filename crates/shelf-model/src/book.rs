//! Persisted book records

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Book identifier, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl BookId {
    /// Identifier immediately after this one, `None` at `u64::MAX`
    #[inline]
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted book
///
/// Only produced by [`BookDraft::into_book`](crate::BookDraft::into_book) or by
/// deserializing a stored collection. Records are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique id
    pub id: BookId,
    /// Non-empty title
    pub title: String,
}

impl Book {
    /// Create a book with a known id
    #[inline]
    #[must_use]
    pub fn new(id: BookId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
