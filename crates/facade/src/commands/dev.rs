//! Live preview server command.

use std::path::Path;

use anyhow::Result;
use facade_server::{DevServer, DevServerConfig};

/// Run the dev server.
pub async fn run(config: &Path, port: u16, open: bool) -> Result<()> {
    tracing::info!("Starting preview server on port {}", port);

    let config = DevServerConfig {
        site_file: config.to_path_buf(),
        port,
        open,
        ..Default::default()
    };

    DevServer::new(config).start().await?;

    Ok(())
}
