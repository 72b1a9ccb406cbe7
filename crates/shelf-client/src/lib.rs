//! Shelf Client
//!
//! Client side of the books API:
//! - [`BooksApi`]: list/create calls, mockable in tests
//! - [`HttpBooksApi`]: the `reqwest` implementation
//! - [`BookListView`]: record list and error state, loaded once on mount and
//!   updated by form submissions
//!
//! # Example
//!
//! ```rust,ignore
//! use shelf_client::{BookListView, HttpBooksApi, SubmitStatus};
//!
//! let mut view = BookListView::new(HttpBooksApi::new("http://127.0.0.1:3000"));
//! view.mount().await;
//! if let SubmitStatus::Rejected = view.submit("").await {
//!     println!("{}", view.render());
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod api;
mod error;
mod http;
mod view;

pub use api::{BooksApi, CreateOutcome};
pub use error::ClientError;
pub use http::HttpBooksApi;
pub use view::{BookListView, SubmitStatus};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
