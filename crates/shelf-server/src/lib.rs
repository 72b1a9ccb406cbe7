//! Shelf Server
//!
//! Two endpoints over a [`Library`](shelf_store::Library):
//! - `GET /api/v1/books` → `200 { "books": [...] }`
//! - `POST /api/v1/books` → `201 { "book": {...} }` or `422 { "errors": {...} }`
//!
//! # Example
//!
//! ```rust,ignore
//! use shelf_server::{serve, ServerConfig};
//!
//! let config = ServerConfig::new().with_data_file("data/books.json");
//! serve(config, async { tokio::signal::ctrl_c().await.ok(); }).await?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
mod handlers;
mod rejection;
pub mod routes;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::ServerError;
pub use routes::routes;

use shelf_store::{JsonFileStore, Library};
use std::future::Future;
use std::sync::Arc;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Open the configured document and serve until `shutdown` resolves
///
/// # Errors
/// - [`ServerError::Store`] if the data file cannot be created
/// - [`ServerError::Bind`] if the address is unavailable
pub async fn serve<F>(config: ServerConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let store = JsonFileStore::new(&config.data_file);
    store.ensure_initialized().await?;
    let library = Arc::new(Library::new(Arc::new(store)));

    let (addr, server) = warp::serve(routes(library, config.max_body_bytes))
        .try_bind_with_graceful_shutdown(config.bind_addr, shutdown)
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr,
            source,
        })?;

    tracing::info!(
        %addr,
        data_file = %config.data_file.display(),
        "shelf server listening"
    );
    server.await;
    tracing::info!("shelf server stopped");
    Ok(())
}
