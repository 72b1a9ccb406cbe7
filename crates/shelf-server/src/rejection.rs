//! Rejection → JSON error body

use crate::error::ServerError;
use shelf_model::wire::ErrorMessage;
use std::convert::Infallible;
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::reject::{LengthRequired, MethodNotAllowed, PayloadTooLarge, UnsupportedMediaType};
use warp::{Rejection, Reply};

pub(crate) async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = classify(&err);
    let body = warp::reply::json(&ErrorMessage {
        error: message.to_string(),
    });
    Ok(warp::reply::with_status(body, status))
}

fn classify(err: &Rejection) -> (StatusCode, &'static str) {
    if err.is_not_found() {
        return (StatusCode::NOT_FOUND, "not found");
    }

    // Store failures come first: a failed GET also carries the POST
    // branch's method rejection.
    if let Some(e) = err.find::<ServerError>() {
        tracing::error!(error = %e, "request failed");
        return (StatusCode::INTERNAL_SERVER_ERROR, "internal server error");
    }

    if let Some(e) = err.find::<BodyDeserializeError>() {
        tracing::debug!(error = %e, "unreadable request body");
        (StatusCode::BAD_REQUEST, "invalid request body")
    } else if err.find::<PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "request body too large")
    } else if err.find::<LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "content length required")
    } else if err.find::<UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "expected application/json")
    } else if err.find::<MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
    } else {
        tracing::error!(rejection = ?err, "unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}
