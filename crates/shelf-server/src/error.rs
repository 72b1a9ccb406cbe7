//! Error types for the HTTP layer

use shelf_store::StoreError;
use std::net::SocketAddr;

/// Server failure
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Collection document could not be read or written
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Listen address unavailable
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: warp::Error,
    },
}

impl warp::reject::Reject for ServerError {}
