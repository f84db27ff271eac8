//! `portal-attendance serve`: run the attendance API.

use crate::acquisition::http_client::PortalClient;
use crate::config::{PortalConfig, ServerConfig};
use crate::server;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Start the server and block until shutdown.
pub async fn run(portal: PortalConfig, server_config: ServerConfig) -> Result<()> {
    info!(
        "starting portal-attendance v{} against {}",
        env!("CARGO_PKG_VERSION"),
        portal.base_url
    );

    let client = PortalClient::new(&portal)?;
    info!("attendance endpoint: {}", client.endpoint());

    server::serve(&server_config, Arc::new(client)).await?;

    info!("portal-attendance stopped");
    Ok(())
}
