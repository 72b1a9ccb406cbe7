//! Transient records and their validation
//!
//! A [`BookDraft`] is what a create request turns into before it has an id.
//! Validation populates the draft's own error map so callers can report it
//! after a failed save.

use crate::book::{Book, BookId};
use crate::errors::ValidationErrors;
use crate::wire::BookParams;

/// Fields that must hold a non-empty value
pub const REQUIRED_FIELDS: &[&str] = &["title"];

/// Message attached to a missing or empty required field
pub const BLANK_MESSAGE: &str = "can't be blank";

/// A book that has not been persisted yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    title: Option<String>,
    errors: ValidationErrors,
}

impl BookDraft {
    /// Draft with a title
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            errors: ValidationErrors::new(),
        }
    }

    /// Draft with no title at all
    #[inline]
    #[must_use]
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Title as submitted
    #[inline]
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Errors from the last [`is_valid`](Self::is_valid) call
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Check every required field, replacing the error map
    ///
    /// An empty or missing value yields [`BLANK_MESSAGE`] under the field name.
    pub fn is_valid(&mut self) -> bool {
        self.errors.clear();
        for field in REQUIRED_FIELDS {
            if self.field(field).map_or(true, str::is_empty) {
                self.errors.add(*field, BLANK_MESSAGE);
            }
        }
        self.errors.is_empty()
    }

    /// Turn a valid draft into a persisted-shape record
    ///
    /// Callers validate first; an unvalidated blank title is carried through
    /// as an empty string.
    #[must_use]
    pub fn into_book(self, id: BookId) -> Book {
        Book::new(id, self.title.unwrap_or_default())
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => self.title(),
            _ => None,
        }
    }
}

impl From<BookParams> for BookDraft {
    fn from(params: BookParams) -> Self {
        Self {
            title: params.title,
            errors: ValidationErrors::new(),
        }
    }
}
