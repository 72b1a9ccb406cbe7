//! Filter assembly

use crate::handlers;
use crate::rejection::handle_rejection;
use shelf_store::Library;
use std::convert::Infallible;
use std::sync::Arc;
use warp::{Filter, Rejection, Reply};

/// Complete application: books endpoints, error bodies and request tracing
pub fn routes(
    library: Arc<Library>,
    max_body_bytes: u64,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    books(library, max_body_bytes)
        .recover(handle_rejection)
        .with(warp::trace::request())
}

/// `GET` and `POST` on `/api/v1/books`
pub fn books(
    library: Arc<Library>,
    max_body_bytes: u64,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    list_books(Arc::clone(&library)).or(create_book(library, max_body_bytes))
}

fn list_books(
    library: Arc<Library>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "v1" / "books")
        .and(warp::get())
        .and(with_library(library))
        .and_then(handlers::list_books)
}

fn create_book(
    library: Arc<Library>,
    max_body_bytes: u64,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "v1" / "books")
        .and(warp::post())
        .and(warp::body::content_length_limit(max_body_bytes))
        .and(warp::body::json())
        .and(with_library(library))
        .and_then(handlers::create_book)
}

fn with_library(
    library: Arc<Library>,
) -> impl Filter<Extract = (Arc<Library>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&library))
}
