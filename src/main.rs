//! hcloud-mcp - main entry point.
//!
//! Starts an MCP server on stdio exposing Hetzner Cloud resources as
//! tools. Startup order: resolve configuration, build the HTTP client,
//! assemble and filter the tool catalog, then serve until stdin closes.

use clap::Parser;
use hcloud_mcp::client::CloudClient;
use hcloud_mcp::mcp::McpServer;
use hcloud_mcp::tools::{self, filter_catalog, AccessMode, ToolRegistry};
use hcloud_mcp::types::config::{self, DEFAULT_ENDPOINT};
use hcloud_mcp::{Config, Error};
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "hcloud-mcp", version, about = "MCP server for the Hetzner Cloud API")]
struct Cli {
    /// Hetzner Cloud API token (falls back to HCLOUD_TOKEN, then a .env
    /// file next to the binary).
    #[arg(long)]
    token: Option<String>,

    /// Global access mode: read_only or read_write.
    #[arg(long, default_value = "read_only")]
    access_mode: String,

    /// Cloud API endpoint override.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    hcloud_mcp::observability::init_tracing();

    let access_mode = AccessMode::from_str(&cli.access_mode)?;
    let token = config::resolve_token(cli.token)?;

    let config = Config {
        access_mode,
        api: hcloud_mcp::types::ApiConfig {
            endpoint: cli.endpoint,
            token,
            ..Default::default()
        },
    };

    let client = Arc::new(CloudClient::new(&config.api)?);
    let catalog = filter_catalog(tools::full_catalog(&client), config.access_mode);
    let registry = ToolRegistry::bind(catalog)?;

    tracing::info!(
        mode = %config.access_mode,
        tools = registry.len(),
        endpoint = %config.api.endpoint,
        "hcloud-mcp starting on stdio"
    );

    McpServer::new(registry).serve().await
}
