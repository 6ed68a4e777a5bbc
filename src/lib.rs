//! GitHub Project Manager MCP Library
//!
//! MCP tools for GitHub issues, pull requests, and projects via the `gh`
//! CLI.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use gh_project_manager_mcp::GhProjectManagerServer;
//!
//! let server = GhProjectManagerServer::new();
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Features
//! - Issues: create, get, list, close, comment, delete, edit, reopen
//! - Pull requests: create, list, view, checkout, close, comment, diff,
//!   edit, ready, reopen, review, status, update-branch, merge
//! - Projects: fields, items, and views
//!
//! # Requirements
//! - `gh` CLI installed and authenticated (`gh auth login` or
//!   GITHUB_TOKEN/GH_TOKEN)

pub mod config;
pub mod gh;
pub mod handlers;
pub mod params;
pub mod server;

// Re-export main server type
pub use server::GhProjectManagerServer;

// Re-export parameter types for direct API usage
pub use params::*;
