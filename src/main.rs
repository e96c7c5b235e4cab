//! MCP Server Entry Point
//!
//! This is the main entry point for the MCP server. It parses flags,
//! initializes logging, loads configuration, and starts the server with the
//! selected transport.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use rae_mcp_server::core::transport::DEFAULT_PORT;
use rae_mcp_server::core::{Config, McpServer, TransportConfig, TransportService};

/// MCP server for the RAE dictionary API.
#[derive(Debug, Parser)]
#[command(name = "rae-mcp-server", version, about)]
struct Cli {
    /// Transport type (stdio or sse)
    #[arg(short = 't', long, env = "MCP_TRANSPORT", default_value = "stdio")]
    transport: String,

    /// Port for the SSE server
    #[arg(long, env = "MCP_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env fallbacks
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let (config, warnings) = Config::from_env_with_warnings();
    init_logging(&config.logging.level);
    for warning in &warnings {
        warn!("{}", warning);
    }

    let transport = match TransportConfig::parse(&cli.transport, cli.port) {
        Ok(transport) => transport,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let config = config.with_transport(transport);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config)?;

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for the stdio transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
