use anyhow::Context;
use clap::Parser;
use shelf_server::config::{default_bind_addr, DEFAULT_DATA_FILE, DEFAULT_MAX_BODY_BYTES};
use shelf_server::{serve, telemetry, ServerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Serve book records over HTTP
#[derive(Debug, Parser)]
#[command(name = "shelf-server", version, about)]
struct Args {
    /// Listen address
    #[arg(long, env = "SHELF_BIND", default_value_t = default_bind_addr())]
    bind: SocketAddr,

    /// Collection document; created empty if missing
    #[arg(long, env = "SHELF_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Request body limit in bytes
    #[arg(long, env = "SHELF_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: u64,

    /// Emit JSON log lines
    #[arg(long, env = "SHELF_LOG_JSON")]
    log_json: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        ServerConfig::new()
            .with_bind_addr(args.bind)
            .with_data_file(args.data_file)
            .with_max_body_bytes(args.max_body_bytes)
            .with_log_json(args.log_json)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from(Args::parse());
    telemetry::init_tracing(config.log_json).context("failed to install tracing subscriber")?;

    serve(config, shutdown_signal())
        .await
        .context("shelf server failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
