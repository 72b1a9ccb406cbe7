//! Server configuration

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Largest accepted request body, in bytes
pub const DEFAULT_MAX_BODY_BYTES: u64 = 16 * 1024;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default listen address: loopback on [`DEFAULT_PORT`]
#[inline]
#[must_use]
pub fn default_bind_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT))
}

/// Default document location, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/books.json";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: SocketAddr,
    /// Collection document
    pub data_file: PathBuf,
    /// Request body limit for creates
    pub max_body_bytes: u64,
    /// Emit JSON log lines instead of plain text
    pub log_json: bool,
}

impl ServerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With listen address
    #[inline]
    #[must_use]
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// With collection document path
    #[inline]
    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// With request body limit
    #[inline]
    #[must_use]
    pub fn with_max_body_bytes(mut self, bytes: u64) -> Self {
        self.max_body_bytes = bytes;
        self
    }

    /// With JSON logs
    #[inline]
    #[must_use]
    pub fn with_log_json(mut self, enabled: bool) -> Self {
        self.log_json = enabled;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_json: false,
        }
    }
}
