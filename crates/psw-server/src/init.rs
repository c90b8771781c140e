//! Server Initialization
//!
//! Configuration, logging, wiring, serving, and the flush of pending
//! renderings once Rocket has stopped.

use crate::http::HttpServer;
use crate::state::WebState;
use anyhow::Context;
use psw_infrastructure::config::{AppConfig, ConfigLoader};
use psw_infrastructure::di::init_app;
use psw_infrastructure::logging::init_logging;
use std::path::Path;
use tracing::info;

/// Command line values that take precedence over the configuration
#[derive(Debug, Clone, Default)]
pub struct ServerOverrides {
    /// Bind address
    pub host: Option<String>,
    /// Listen port
    pub port: Option<u16>,
}

impl ServerOverrides {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

/// Run the pcap search web server
///
/// Returns once Rocket has shut down and every pending rendering has been
/// deleted.
pub async fn run(config_path: Option<&Path>, overrides: ServerOverrides) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    overrides.apply(&mut config);
    init_logging(config.logging.clone()).context("Failed to initialize logging")?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        pcap_dir = %config.backend.pcap_dir.display(),
        "Starting pcap search web server"
    );

    let server_config = config.server.clone();
    let context = init_app(config).context("Failed to initialize application")?;
    let server = HttpServer::new(server_config, WebState::from_context(&context));

    let served = server.launch().await;
    context.shutdown().await;
    served.context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

fn load_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load().context("Failed to load configuration")
}
