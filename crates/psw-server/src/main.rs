//! pcap-search-web server binary

use clap::Parser;
use psw_server::{ServerOverrides, run};
use std::path::PathBuf;

/// Command line interface
#[derive(Parser, Debug)]
#[command(name = "psw-server")]
#[command(about = "Search and browse captured network traffic from a browser")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bind address, overriding `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port, overriding `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let overrides = ServerOverrides {
        host: cli.host,
        port: cli.port,
    };
    run(cli.config.as_deref(), overrides).await
}
