//! The `serve` command: run the HTTP assessment API

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::server;
use crate::storage::MemStorage;

/// Load configuration, apply CLI overrides, and serve until interrupted
pub fn serve_api(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let mut config = ServerConfig::load(config_path.map(|p| p.as_path()))?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let store = Arc::new(MemStorage::new());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::run(&config, store))
}
