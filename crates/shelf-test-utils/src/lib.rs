//! Testing utilities for the Shelf workspace
//!
//! Shared fixtures: seeded stores, a store that always fails, and a server
//! bound to an ephemeral port.

#![allow(missing_docs)]

use async_trait::async_trait;
use shelf_model::{Book, BookId};
use shelf_store::{BookStore, JsonFileStore, Library, MemoryStore, StoreError};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tempfile::TempDir;

/// Request body limit used by test servers
pub const TEST_MAX_BODY_BYTES: u64 = 1024;

/// Books with ids 1..=n in the given title order
pub fn sample_books(titles: &[&str]) -> Vec<Book> {
    titles
        .iter()
        .zip(1u64..)
        .map(|(title, id)| Book::new(BookId(id), *title))
        .collect()
}

pub fn memory_library() -> (Arc<MemoryStore>, Arc<Library>) {
    memory_library_with(Vec::new())
}

pub fn memory_library_with(books: Vec<Book>) -> (Arc<MemoryStore>, Arc<Library>) {
    let store = Arc::new(MemoryStore::with_books(books));
    let library = Arc::new(Library::new(Arc::clone(&store) as Arc<dyn BookStore>));
    (store, library)
}

/// Library over an initialized JSON document inside a fresh temp dir
///
/// Keep the returned [`TempDir`] alive for as long as the library is used.
pub async fn file_library() -> (TempDir, JsonFileStore, Arc<Library>) {
    let dir = TempDir::new().expect("create temp dir");
    let store = JsonFileStore::new(dir.path().join("books.json"));
    store
        .ensure_initialized()
        .await
        .expect("initialize collection document");
    let library = Arc::new(Library::new(Arc::new(store.clone())));
    (dir, store, library)
}

/// Store whose every operation fails with an IO error
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl BookStore for FailingStore {
    async fn read_all(&self) -> Result<Vec<Book>, StoreError> {
        Err(broken())
    }

    async fn write_all(&self, _books: &[Book]) -> Result<(), StoreError> {
        Err(broken())
    }
}

fn broken() -> StoreError {
    StoreError::io_error(
        "unavailable.json",
        std::io::Error::new(std::io::ErrorKind::Other, "disk unavailable"),
    )
}

pub fn failing_library() -> Arc<Library> {
    Arc::new(Library::new(Arc::new(FailingStore)))
}

/// Serve `library` on 127.0.0.1 with an OS-assigned port
///
/// The server runs on the current tokio runtime until the test ends.
pub fn spawn_server(library: Arc<Library>) -> SocketAddr {
    let routes = shelf_server::routes(library, TEST_MAX_BODY_BYTES);
    let (addr, server) = warp::serve(routes).bind_ephemeral((Ipv4Addr::LOCALHOST, 0));
    tokio::spawn(server);
    addr
}

/// `http://host:port` for a spawned server
pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{addr}")
}
