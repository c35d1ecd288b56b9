//! Contact List - Main entry point
//!
//! Runs the contact list MCP server over stdio.

use anyhow::Result;
use contact_list::{Config, ContactListServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logging goes to stderr only; stdout carries MCP traffic
    let filter =
        EnvFilter::try_new(Config::log_directive()).unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!(
                "Configuration loaded: log level {}, default category {}, max {} search results, confidence threshold {}",
                cfg.log_level, cfg.default_category, cfg.max_match_results, cfg.match_confidence_threshold
            );
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let server = ContactListServer::new(&config);

    info!("Starting MCP server with stdio transport");
    if let Err(e) = contact_list::server::run_server(server).await {
        error!("Server stopped with error: {}", e);
        return Err(e);
    }

    info!("Contact list server shutdown complete");
    Ok(())
}
