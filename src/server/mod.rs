//! MCP server for Clean Truck Check.
//!
//! This module provides the MCP protocol server that exposes VIN checks and
//! contact routing to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::CleanTruckCheckServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server with stdio transport until the client disconnects.
pub async fn run_server(server: CleanTruckCheckServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
