//! Book list view state
//!
//! Holds what a page showing the collection would hold: the records and the
//! current form errors. The collection is fetched once on mount; after that
//! the list only grows through successful submissions, without refetching.

use crate::api::{BooksApi, CreateOutcome};
use shelf_model::{Book, ValidationErrors};
use std::fmt;

/// What happened to a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Stored and appended to the list
    Created(Book),
    /// Server rejected the fields; error state replaced
    Rejected,
    /// Transport or unexpected status; state untouched
    Failed,
}

/// Client-side list of books plus form errors
#[derive(Debug)]
pub struct BookListView<A> {
    api: A,
    books: Vec<Book>,
    errors: ValidationErrors,
    mounted: bool,
}

impl<A: BooksApi> BookListView<A> {
    /// Unmounted view with empty state
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            books: Vec::new(),
            errors: ValidationErrors::new(),
            mounted: false,
        }
    }

    /// Records currently shown
    #[inline]
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Form errors from the last rejected submission
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[inline]
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Load the collection; only the first call fetches
    ///
    /// Returns `true` when the list was replaced. On failure the error is
    /// logged and the state is left as it was.
    pub async fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;

        match self.api.list().await {
            Ok(books) => {
                tracing::debug!(count = books.len(), "loaded books");
                self.books = books;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load books");
                false
            }
        }
    }

    /// Submit the form with `title`
    pub async fn submit(&mut self, title: &str) -> SubmitStatus {
        match self.api.create(title).await {
            Ok(CreateOutcome::Created(book)) => {
                self.errors.clear();
                self.books.push(book.clone());
                SubmitStatus::Created(book)
            }
            Ok(CreateOutcome::Rejected(errors)) => {
                self.errors = errors;
                SubmitStatus::Rejected
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create book");
                SubmitStatus::Failed
            }
        }
    }

    /// Plain-text rendering: one line per book, then one per error message
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<A> fmt::Display for BookListView<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.books.is_empty() {
            writeln!(f, "(no books)")?;
        }
        for book in &self.books {
            writeln!(f, "#{} {}", book.id, book.title)?;
        }
        for (field, messages) in self.errors.iter() {
            for message in messages {
                writeln!(f, "{field} {message}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBooksApi;
    use crate::error::ClientError;
    use shelf_model::{BookId, BLANK_MESSAGE};

    fn blank_title() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add("title", BLANK_MESSAGE);
        errors
    }

    #[tokio::test]
    async fn mount_replaces_list_once() {
        let mut api = MockBooksApi::new();
        api.expect_list()
            .times(1)
            .returning(|| Ok(vec![Book::new(BookId(1), "Dune")]));
        let mut view = BookListView::new(api);

        assert!(view.mount().await);
        assert!(!view.mount().await);
        assert_eq!(view.books(), &[Book::new(BookId(1), "Dune")]);
        assert!(view.is_mounted());
    }

    #[tokio::test]
    async fn mount_failure_keeps_state() {
        let mut api = MockBooksApi::new();
        api.expect_list()
            .times(1)
            .returning(|| Err(ClientError::UnexpectedStatus { status: 500 }));
        let mut view = BookListView::new(api);

        assert!(!view.mount().await);
        assert!(view.books().is_empty());
    }

    #[tokio::test]
    async fn rejected_submit_replaces_errors() {
        let mut api = MockBooksApi::new();
        api.expect_create()
            .times(1)
            .returning(|_| Ok(CreateOutcome::Rejected(blank_title())));
        let mut view = BookListView::new(api);

        assert_eq!(view.submit("").await, SubmitStatus::Rejected);
        assert_eq!(view.errors(), &blank_title());
        assert!(view.books().is_empty());
    }

    #[tokio::test]
    async fn created_submit_clears_errors_and_appends() {
        let mut api = MockBooksApi::new();
        let mut seq = mockall::Sequence::new();
        api.expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CreateOutcome::Rejected(blank_title())));
        api.expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|title| Ok(CreateOutcome::Created(Book::new(BookId(4), title))));
        let mut view = BookListView::new(api);

        view.submit("").await;
        let status = view.submit("Emma").await;

        assert_eq!(status, SubmitStatus::Created(Book::new(BookId(4), "Emma")));
        assert!(view.errors().is_empty());
        assert_eq!(view.books(), &[Book::new(BookId(4), "Emma")]);
    }

    #[tokio::test]
    async fn failed_submit_changes_nothing() {
        let mut api = MockBooksApi::new();
        api.expect_create()
            .returning(|_| Err(ClientError::UnexpectedStatus { status: 503 }));
        let mut view = BookListView::new(api);

        assert_eq!(view.submit("Dune").await, SubmitStatus::Failed);
        assert!(view.books().is_empty());
        assert!(view.errors().is_empty());
    }

    #[tokio::test]
    async fn render_lists_books_and_errors() {
        let mut api = MockBooksApi::new();
        api.expect_list()
            .returning(|| Ok(vec![Book::new(BookId(1), "Dune")]));
        api.expect_create()
            .returning(|_| Ok(CreateOutcome::Rejected(blank_title())));
        let mut view = BookListView::new(api);

        view.mount().await;
        view.submit("").await;

        assert_eq!(view.render(), "#1 Dune\ntitle can't be blank\n");
    }

    #[test]
    fn display_matches_render() {
        let view = BookListView::new(MockBooksApi::new());
        assert_eq!(format!("{view}"), view.render());
    }

    #[test]
    fn render_empty() {
        let view = BookListView::new(MockBooksApi::new());
        assert_eq!(view.render(), "(no books)\n");
    }
}
