//! Ark MCP Video Server
//!
//! MCP server for video generation using Volcengine Ark Seedance.

use ark_mcp_common::tracing::{DEFAULT_LEVEL, init_tracing};
use ark_mcp_common::{Config, McpServerBuilder, TransportArgs};
use ark_mcp_video::VideoServer;
use anyhow::Result;
use clap::Parser;

/// Command-line arguments for the video server.
#[derive(Parser, Debug)]
#[command(name = "ark-mcp-video")]
#[command(about = "MCP server for video generation using Volcengine Ark Seedance")]
#[command(version)]
struct Args {
    /// Transport configuration
    #[command(flatten)]
    transport: TransportArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(DEFAULT_LEVEL);

    let args = Args::parse();

    let config = Config::from_env()?;
    if config.api_key.is_none() {
        tracing::warn!("DOUBAO_API_KEY is not set; generate_video calls will fail until it is");
    }
    tracing::info!(base_url = %config.base_url, "Configuration loaded");

    let server = VideoServer::new(config);

    let transport = args.transport.into_transport()?;
    McpServerBuilder::new(server)
        .with_transport(transport)
        .run()
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
