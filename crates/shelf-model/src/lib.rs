//! Shelf Model
//!
//! Book records and the rules that govern them.
//!
//! # Core Concepts
//!
//! - [`Book`]: A persisted record with an assigned [`BookId`] and a title
//! - [`BookDraft`]: A transient record built from a request payload; validates itself
//! - [`ValidationErrors`]: Field name to ordered list of messages
//! - [`BookCollection`]: The whole persisted document
//! - [`next_id`]: Id assignment over the current collection
//! - [`wire`]: JSON envelopes shared by server and client
//!
//! # Example
//!
//! ```rust
//! use shelf_model::{next_id, Book, BookDraft, BookId};
//!
//! let existing = vec![Book::new(BookId(1), "Dune")];
//! let mut draft = BookDraft::new("Hyperion");
//! assert!(draft.is_valid());
//!
//! let book = draft.into_book(next_id(&existing).unwrap());
//! assert_eq!(book.id, BookId(2));
//! ```

#![warn(unreachable_pub)]

mod book;
mod collection;
mod draft;
mod errors;
mod id;
pub mod wire;

pub use book::{Book, BookId};
pub use collection::BookCollection;
pub use draft::{BookDraft, BLANK_MESSAGE, REQUIRED_FIELDS};
pub use errors::ValidationErrors;
pub use id::{next_id, SEED_ID};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
