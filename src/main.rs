//! GitHub Project Manager MCP Server
//!
//! Exposes GitHub issue, pull request, and project operations as MCP tools
//! by shelling out to the GitHub CLI (`gh`).
//!
//! # Requirements
//!
//! - GitHub CLI (`gh`) must be installed and in PATH
//! - A credential must be available: GITHUB_TOKEN, GH_TOKEN, or an existing
//!   `gh auth login`
//!
//! # Usage
//!
//! Run directly:
//! ```bash
//! gh-project-manager-mcp
//! ```
//!
//! Or configure in `.mcp.json`:
//! ```json
//! {
//!   "mcpServers": {
//!     "gh-project-manager": {
//!       "command": "./target/release/gh-project-manager-mcp"
//!     }
//!   }
//! }
//! ```

use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gh_project_manager_mcp::gh;
use gh_project_manager_mcp::GhProjectManagerServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive("gh_project_manager_mcp=info".parse()?))
        .init();

    tracing::info!("Starting GitHub Project Manager MCP Server");

    // Startup credential check (warning only - errors surface per-tool)
    if let Err(e) = gh::check_gh_available().await {
        tracing::warn!("gh credential check failed: {}", e);
    }

    // Create the MCP server with all tools
    let server = GhProjectManagerServer::new();

    // Create stdio transport and serve
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    // Wait for shutdown
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
