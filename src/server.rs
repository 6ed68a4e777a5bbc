//! MCP server implementation
//!
//! Exposes the issue, pull request, and project handlers as MCP tools.
//! Tool methods are thin: deserialize parameters, delegate to the handler,
//! and project the uniform response envelope into `CallToolResult` content.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::Value;

use crate::handlers::{self, ToolContext};
use crate::params::*;

/// The GitHub Project Manager MCP server
///
/// Wraps the GitHub CLI (`gh`) to provide MCP tools for issues, pull
/// requests, and projects. Requires `gh` to be installed; authentication
/// comes from GITHUB_TOKEN/GH_TOKEN or an existing `gh auth login`.
#[derive(Clone)]
pub struct GhProjectManagerServer {
    ctx: Arc<ToolContext>,
    tool_router: ToolRouter<Self>,
}

/// Project a handler's response envelope into MCP content.
///
/// Failures ride inside the content as `status: FAILED` envelopes with the
/// result marked as an error; only serialization trouble becomes a
/// protocol-level error.
fn to_call_result(value: Value) -> Result<CallToolResult, McpError> {
    let failed = value.get("status").and_then(Value::as_str) == Some("FAILED");
    let text = serde_json::to_string_pretty(&value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    let content = vec![Content::text(text)];
    Ok(if failed {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    })
}

#[tool_router]
impl GhProjectManagerServer {
    pub fn new() -> Self {
        Self::with_context(ToolContext::new())
    }

    /// Build a server around an explicit context (custom resolver/runner).
    pub fn with_context(ctx: ToolContext) -> Self {
        Self {
            ctx: Arc::new(ctx),
            tool_router: Self::tool_router(),
        }
    }

    // ========================================================================
    // Issue tools
    // ========================================================================

    #[tool(description = "Create a GitHub issue")]
    async fn create_issue(
        &self,
        Parameters(params): Parameters<IssueCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::create_issue(&self.ctx, params).await)
    }

    #[tool(description = "Get details of a specific GitHub issue by number")]
    async fn get_issue(
        &self,
        Parameters(params): Parameters<IssueViewParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::get_issue(&self.ctx, params).await)
    }

    #[tool(description = "List GitHub issues with optional filtering")]
    async fn list_issues(
        &self,
        Parameters(params): Parameters<IssueListParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::list_issues(&self.ctx, params).await)
    }

    #[tool(description = "Close a GitHub issue, optionally with a comment and reason")]
    async fn close_issue(
        &self,
        Parameters(params): Parameters<IssueCloseParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::close_issue(&self.ctx, params).await)
    }

    #[tool(description = "Add a comment to a GitHub issue")]
    async fn comment_issue(
        &self,
        Parameters(params): Parameters<IssueCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::comment_issue(&self.ctx, params).await)
    }

    #[tool(description = "Delete a GitHub issue (requires admin rights)")]
    async fn delete_issue(
        &self,
        Parameters(params): Parameters<IssueDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::delete_issue(&self.ctx, params).await)
    }

    #[tool(description = "Edit issue metadata: title, body, assignees, labels, projects, milestone")]
    async fn edit_issue(
        &self,
        Parameters(params): Parameters<IssueEditParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::edit_issue(&self.ctx, params).await)
    }

    #[tool(description = "Reopen a closed GitHub issue")]
    async fn reopen_issue(
        &self,
        Parameters(params): Parameters<IssueReopenParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::reopen_issue(&self.ctx, params).await)
    }

    // ========================================================================
    // Pull request tools
    // ========================================================================

    #[tool(description = "Create a GitHub pull request")]
    async fn create_pull_request(
        &self,
        Parameters(params): Parameters<PrCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::create_pull_request(&self.ctx, params).await)
    }

    #[tool(description = "List pull requests in a repository")]
    async fn list_pull_requests(
        &self,
        Parameters(params): Parameters<PrListParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::list_pull_requests(&self.ctx, params).await)
    }

    #[tool(description = "View details of a GitHub pull request")]
    async fn view_pull_request(
        &self,
        Parameters(params): Parameters<PrViewParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::view_pull_request(&self.ctx, params).await)
    }

    #[tool(description = "Check out a pull request branch locally")]
    async fn checkout_pull_request(
        &self,
        Parameters(params): Parameters<PrCheckoutParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::checkout_pull_request(&self.ctx, params).await)
    }

    #[tool(description = "Close a GitHub pull request")]
    async fn close_pull_request(
        &self,
        Parameters(params): Parameters<PrCloseParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::close_pull_request(&self.ctx, params).await)
    }

    #[tool(description = "Add a comment to a pull request")]
    async fn comment_pull_request(
        &self,
        Parameters(params): Parameters<PrCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::comment_pull_request(&self.ctx, params).await)
    }

    #[tool(description = "View the diff of a pull request")]
    async fn diff_pull_request(
        &self,
        Parameters(params): Parameters<PrDiffParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::diff_pull_request(&self.ctx, params).await)
    }

    #[tool(description = "Edit fields of a pull request")]
    async fn edit_pull_request(
        &self,
        Parameters(params): Parameters<PrEditParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::edit_pull_request(&self.ctx, params).await)
    }

    #[tool(description = "Mark a draft pull request as ready for review")]
    async fn ready_pull_request(
        &self,
        Parameters(params): Parameters<PrReadyParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::ready_pull_request(&self.ctx, params).await)
    }

    #[tool(description = "Reopen a closed pull request")]
    async fn reopen_pull_request(
        &self,
        Parameters(params): Parameters<PrReopenParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::reopen_pull_request(&self.ctx, params).await)
    }

    #[tool(description = "Submit a review on a pull request: approve, request_changes, or comment")]
    async fn review_pull_request(
        &self,
        Parameters(params): Parameters<PrReviewParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::review_pull_request(&self.ctx, params).await)
    }

    #[tool(description = "Get PR status relevant to the current user and branch")]
    async fn status_pull_request(&self) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::status_pull_request(&self.ctx).await)
    }

    #[tool(description = "Update a pull request branch with the latest base branch changes")]
    async fn update_branch_pull_request(
        &self,
        Parameters(params): Parameters<PrUpdateBranchParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::update_branch_pull_request(&self.ctx, params).await)
    }

    #[tool(description = "Merge a pull request (merge, squash, or rebase)")]
    async fn merge_pull_request(
        &self,
        Parameters(params): Parameters<PrMergeParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::merge_pull_request(&self.ctx, params).await)
    }

    // ========================================================================
    // Project tools
    // ========================================================================

    #[tool(description = "Create a custom field in a GitHub project")]
    async fn create_project_field(
        &self,
        Parameters(params): Parameters<ProjectFieldCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::create_project_field(&self.ctx, params).await)
    }

    #[tool(description = "Delete a field from a GitHub project")]
    async fn delete_project_field(
        &self,
        Parameters(params): Parameters<ProjectFieldDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::delete_project_field(&self.ctx, params).await)
    }

    #[tool(description = "List fields in a GitHub project")]
    async fn list_project_fields(
        &self,
        Parameters(params): Parameters<ProjectFieldListParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::list_project_fields(&self.ctx, params).await)
    }

    #[tool(description = "Add an existing issue or pull request to a GitHub project")]
    async fn add_project_item(
        &self,
        Parameters(params): Parameters<ProjectItemAddParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::add_project_item(&self.ctx, params).await)
    }

    #[tool(description = "Archive or unarchive a project item")]
    async fn archive_project_item(
        &self,
        Parameters(params): Parameters<ProjectItemArchiveParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::archive_project_item(&self.ctx, params).await)
    }

    #[tool(description = "Delete an item from a GitHub project")]
    async fn delete_project_item(
        &self,
        Parameters(params): Parameters<ProjectItemDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::delete_project_item(&self.ctx, params).await)
    }

    #[tool(description = "Edit a project item's field value")]
    async fn edit_project_item(
        &self,
        Parameters(params): Parameters<ProjectItemEditParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::edit_project_item(&self.ctx, params).await)
    }

    #[tool(description = "List items in a GitHub project")]
    async fn list_project_items(
        &self,
        Parameters(params): Parameters<ProjectItemListParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::list_project_items(&self.ctx, params).await)
    }

    #[tool(description = "View details of a GitHub project")]
    async fn view_project(
        &self,
        Parameters(params): Parameters<ProjectViewParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::view_project(&self.ctx, params).await)
    }

    #[tool(description = "Create a draft issue item directly in a project")]
    async fn create_project_item(
        &self,
        Parameters(params): Parameters<ProjectItemCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        to_call_result(handlers::create_project_item(&self.ctx, params).await)
    }
}

impl Default for GhProjectManagerServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl rmcp::ServerHandler for GhProjectManagerServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "GitHub Project Manager MCP Server - provides tools for managing \
                 GitHub issues, pull requests, and projects through the gh CLI. \
                 Requires gh to be installed; set GITHUB_TOKEN/GH_TOKEN or run \
                 'gh auth login' first. GH_REPO_OWNER and GH_REPO_NAME supply \
                 default repository coordinates."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_maps_to_success_result() {
        let result = to_call_result(json!({"status": "SUCCESS", "raw": {"a": 1}})).unwrap();
        assert!(!result.is_error.unwrap_or(false));
    }

    #[test]
    fn failed_envelope_maps_to_error_result() {
        let result =
            to_call_result(json!({"status": "FAILED", "code": "GH_COMMAND_FAILED"})).unwrap();
        assert!(result.is_error.unwrap_or(false));
    }
}
