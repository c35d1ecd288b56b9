//! MCP server for the contact list.
//!
//! This module exposes the contact-list screen to MCP clients. The client
//! plays the user: it fills the form, submits it and answers the delete
//! confirmation.

pub mod handlers;

pub use handlers::ContactListServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact list server with stdio transport.
///
/// This function starts the MCP server and runs it until the client
/// disconnects. It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: ContactListServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
