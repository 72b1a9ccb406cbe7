//! Shelf Store
//!
//! Persistence for book records:
//! - [`BookStore`]: whole-document read/write, injected wherever storage is needed
//! - [`JsonFileStore`]: the on-disk JSON document
//! - [`MemoryStore`]: in-memory stand-in for tests
//! - [`Library`]: validation, id assignment and persistence behind one writer
//!
//! # Example
//!
//! ```rust,ignore
//! use shelf_model::BookDraft;
//! use shelf_store::{JsonFileStore, Library, SaveOutcome};
//! use std::sync::Arc;
//!
//! let store = JsonFileStore::new("data/books.json");
//! store.ensure_initialized().await?;
//! let library = Library::new(Arc::new(store));
//!
//! let mut draft = BookDraft::new("Dune");
//! if let SaveOutcome::Created(book) = library.save(&mut draft).await? {
//!     println!("created #{}", book.id);
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod json_file;
mod library;
mod memory;
mod store;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use library::{Library, SaveOutcome};
pub use memory::MemoryStore;
pub use store::BookStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
