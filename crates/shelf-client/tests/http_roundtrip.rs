//! End-to-end tests: the view and HTTP client against a real server.
//!
//! A server is bound on an ephemeral port for each test, so these exercise
//! routing, the wire envelopes and the view's state transitions together.

use pretty_assertions::assert_eq;
use shelf_client::{BookListView, BooksApi, ClientError, CreateOutcome, HttpBooksApi, SubmitStatus};
use shelf_model::{Book, BookId, BLANK_MESSAGE};
use shelf_test_utils::{base_url, failing_library, memory_library, memory_library_with, sample_books, spawn_server};
use std::net::TcpListener;

/// Mount on an empty store, then create: list grows, ids start at 1.
#[tokio::test]
async fn mount_then_create() {
    let (store, library) = memory_library();
    let addr = spawn_server(library);
    let mut view = BookListView::new(HttpBooksApi::new(&base_url(addr)));

    assert!(view.mount().await);
    assert!(view.books().is_empty());

    let status = view.submit("Dune").await;

    assert_eq!(status, SubmitStatus::Created(Book::new(BookId(1), "Dune")));
    assert_eq!(view.books(), &[Book::new(BookId(1), "Dune")]);
    assert_eq!(store.snapshot(), vec![Book::new(BookId(1), "Dune")]);
}

/// A blank submission fills the view's errors and leaves the store alone.
#[tokio::test]
async fn blank_submission_sets_errors() {
    let (store, library) = memory_library_with(sample_books(&["Dune"]));
    let addr = spawn_server(library);
    let mut view = BookListView::new(HttpBooksApi::new(&base_url(addr)));
    view.mount().await;

    assert_eq!(view.submit("").await, SubmitStatus::Rejected);

    assert_eq!(
        view.errors().get("title").unwrap(),
        &[BLANK_MESSAGE.to_string()]
    );
    assert_eq!(view.books(), sample_books(&["Dune"]).as_slice());
    assert_eq!(store.write_count(), 0);
}

/// A later success clears errors left by an earlier rejection.
#[tokio::test]
async fn success_after_rejection_clears_errors() {
    let (_store, library) = memory_library();
    let addr = spawn_server(library);
    let mut view = BookListView::new(HttpBooksApi::new(&base_url(addr)));
    view.mount().await;

    view.submit("").await;
    assert!(!view.errors().is_empty());

    view.submit("Emma").await;
    assert!(view.errors().is_empty());
    assert_eq!(view.books().len(), 1);
}

/// A fresh view sees records created by an earlier one, in creation order.
#[tokio::test]
async fn second_view_sees_earlier_creates() {
    let (_store, library) = memory_library();
    let addr = spawn_server(library);
    let api = HttpBooksApi::new(&base_url(addr));

    let mut first = BookListView::new(api.clone());
    first.mount().await;
    first.submit("Dune").await;
    first.submit("Emma").await;

    let mut second = BookListView::new(api);
    assert!(second.mount().await);
    assert_eq!(second.books(), sample_books(&["Dune", "Emma"]).as_slice());
}

/// Server-side failures are reported as unexpected statuses and leave the
/// view's state unchanged.
#[tokio::test]
async fn server_error_leaves_state() {
    let addr = spawn_server(failing_library());
    let api = HttpBooksApi::new(&base_url(addr));

    let err = api.list().await.unwrap_err();
    assert!(matches!(err, ClientError::UnexpectedStatus { status: 500 }));

    let mut view = BookListView::new(api);
    assert!(!view.mount().await);
    assert_eq!(view.submit("Dune").await, SubmitStatus::Failed);
    assert!(view.books().is_empty());
    assert!(view.errors().is_empty());
}

/// Nothing listening: transport errors are logged, not surfaced as panics.
#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let api = HttpBooksApi::new(&base_url(addr));

    assert!(matches!(
        api.create("Dune").await,
        Err(ClientError::Transport(_))
    ));

    let mut view = BookListView::new(api);
    assert!(!view.mount().await);
}

#[tokio::test]
async fn create_returns_stored_record() {
    let (_store, library) = memory_library_with(sample_books(&["Dune", "Emma"]));
    let addr = spawn_server(library);
    let api = HttpBooksApi::new(&base_url(addr));

    let outcome = api.create("Ulysses").await.unwrap();

    assert_eq!(outcome, CreateOutcome::Created(Book::new(BookId(3), "Ulysses")));
}
