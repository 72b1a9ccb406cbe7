//! Request handlers

use crate::error::ServerError;
use shelf_model::wire::{BookEnvelope, BooksEnvelope, CreateBookRequest, ErrorsEnvelope};
use shelf_model::BookDraft;
use shelf_store::{Library, SaveOutcome};
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::{self, Response};
use warp::{Rejection, Reply};

pub(crate) async fn list_books(library: Arc<Library>) -> Result<Response, Rejection> {
    let books = library.list().await.map_err(reject)?;
    Ok(reply::with_status(reply::json(&BooksEnvelope { books }), StatusCode::OK).into_response())
}

pub(crate) async fn create_book(
    request: CreateBookRequest,
    library: Arc<Library>,
) -> Result<Response, Rejection> {
    let mut draft = BookDraft::from(request.book);

    let response = match library.save(&mut draft).await.map_err(reject)? {
        SaveOutcome::Created(book) => {
            reply::with_status(reply::json(&BookEnvelope { book }), StatusCode::CREATED)
                .into_response()
        }
        SaveOutcome::Invalid(errors) => reply::with_status(
            reply::json(&ErrorsEnvelope { errors }),
            StatusCode::UNPROCESSABLE_ENTITY,
        )
        .into_response(),
    };
    Ok(response)
}

fn reject(err: shelf_store::StoreError) -> Rejection {
    warp::reject::custom(ServerError::from(err))
}
