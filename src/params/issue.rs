//! Issue-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueCreateParams {
    #[schemars(description = "Issue title")]
    pub title: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Issue body in markdown (falls back to the configured default)")]
    pub body: Option<String>,
    #[schemars(description = "Assignee username (@me for self)")]
    pub assignee: Option<String>,
    #[schemars(description = "Labels to apply")]
    pub labels: Option<Vec<String>>,
    #[schemars(description = "Project to add the issue to")]
    pub project: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueViewParams {
    #[schemars(description = "Issue number")]
    pub issue_number: u64,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueListParams {
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Issue state filter (open, closed, all)")]
    pub state: Option<String>,
    #[schemars(description = "Filter by assignee username")]
    pub assignee: Option<String>,
    #[schemars(description = "Filter by creator username")]
    pub creator: Option<String>,
    #[schemars(description = "Filter by mentioned username")]
    pub mentioned: Option<String>,
    #[schemars(description = "Filter by labels")]
    pub labels: Option<Vec<String>>,
    #[schemars(description = "Filter by milestone")]
    pub milestone: Option<String>,
    #[schemars(description = "Maximum number of issues to return (default: 30)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueCloseParams {
    #[schemars(description = "Issue number or URL")]
    pub issue_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Comment to add when closing")]
    pub comment: Option<String>,
    #[schemars(description = "Close reason (completed, not planned, duplicate)")]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueCommentParams {
    #[schemars(description = "Issue number or URL")]
    pub issue_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Comment text (exclusive with body_file)")]
    pub body: Option<String>,
    #[schemars(description = "Path to a file containing the comment (exclusive with body)")]
    pub body_file: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueDeleteParams {
    #[schemars(description = "Issue number or URL")]
    pub issue_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Skip the confirmation prompt")]
    pub skip_confirmation: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueEditParams {
    #[schemars(description = "Issue number or URL")]
    pub issue_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "New issue title")]
    pub title: Option<String>,
    #[schemars(description = "New issue body")]
    pub body: Option<String>,
    #[schemars(description = "Assignees to add")]
    pub add_assignees: Option<Vec<String>>,
    #[schemars(description = "Assignees to remove")]
    pub remove_assignees: Option<Vec<String>>,
    #[schemars(description = "Labels to add")]
    pub add_labels: Option<Vec<String>>,
    #[schemars(description = "Labels to remove")]
    pub remove_labels: Option<Vec<String>>,
    #[schemars(description = "Projects to add")]
    pub add_projects: Option<Vec<String>>,
    #[schemars(description = "Projects to remove")]
    pub remove_projects: Option<Vec<String>>,
    #[schemars(description = "Milestone to set (name or number)")]
    pub milestone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueReopenParams {
    #[schemars(description = "Issue number or URL")]
    pub issue_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Comment to add when reopening")]
    pub comment: Option<String>,
}
