//! Pull-request-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PrCreateParams {
    #[schemars(description = "Base branch to merge into")]
    pub base_branch: String,
    #[schemars(description = "Head branch with changes")]
    pub head: String,
    #[schemars(description = "Pull request title")]
    pub title: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Pull request body in markdown (falls back to the configured default)")]
    pub body: Option<String>,
    #[schemars(description = "Create as draft PR")]
    pub draft: Option<bool>,
    #[schemars(description = "Labels to add")]
    pub labels: Option<Vec<String>>,
    #[schemars(description = "Project to add the PR to")]
    pub project_title: Option<String>,
    #[schemars(description = "Reviewers to request")]
    pub reviewers: Option<Vec<String>>,
    #[schemars(description = "Assignee username (@me for self)")]
    pub assignee: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PrListParams {
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "PR state filter (open, closed, merged, all)")]
    pub state: Option<String>,
    #[schemars(description = "Filter by labels")]
    pub labels: Option<Vec<String>>,
    #[schemars(description = "Filter by assignee")]
    pub assignee: Option<String>,
    #[schemars(description = "Filter by PR author")]
    pub author: Option<String>,
    #[schemars(description = "Filter by base branch")]
    pub base_branch: Option<String>,
    #[schemars(description = "Filter by head branch")]
    pub head: Option<String>,
    #[schemars(description = "Maximum number of PRs to return (default: 30)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PrViewParams {
    #[schemars(description = "Pull request number or URL")]
    pub pr_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PrCheckoutParams {
    #[schemars(description = "Pull request number or URL")]
    pub pr_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Name for the local branch (default is the PR head ref)")]
    pub checkout_branch_name: Option<String>,
    #[schemars(description = "Checkout in detached HEAD state")]
    pub detach: Option<bool>,
    #[schemars(description = "Update all submodules after checkout")]
    pub recurse_submodules: Option<bool>,
    #[schemars(description = "Force checkout even with local changes")]
    pub force: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PrCloseParams {
    #[schemars(description = "Pull request number or URL")]
    pub pr_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Comment to add when closing")]
    pub comment: Option<String>,
    #[schemars(description = "Delete the head branch after closing")]
    pub delete_branch: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PrCommentParams {
    #[schemars(description = "Pull request number or URL")]
    pub pr_identifier: String,
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
pub struct PrDiffParams {
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Pull request number or URL (current branch's PR if omitted)")]
    pub pr_identifier: Option<String>,
    #[schemars(description = "Color output (auto, always, never)")]
    pub color: Option<String>,
    #[schemars(description = "Format the diff as a patch")]
    pub patch: Option<bool>,
    #[schemars(description = "Only show names of changed files")]
    pub name_only: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PrEditParams {
    #[schemars(description = "Pull request number or URL")]
    pub pr_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "New PR title")]
    pub title: Option<String>,
    #[schemars(description = "New PR body")]
    pub body: Option<String>,
    #[schemars(description = "New base branch")]
    pub base_branch: Option<String>,
    #[schemars(description = "Assignees to add")]
    pub add_assignees: Option<Vec<String>>,
    #[schemars(description = "Assignees to remove")]
    pub remove_assignees: Option<Vec<String>>,
    #[schemars(description = "Reviewers to add")]
    pub add_reviewers: Option<Vec<String>>,
    #[schemars(description = "Reviewers to remove")]
    pub remove_reviewers: Option<Vec<String>>,
    #[schemars(description = "Labels to add")]
    pub add_labels: Option<Vec<String>>,
    #[schemars(description = "Labels to remove")]
    pub remove_labels: Option<Vec<String>>,
    #[schemars(description = "Projects to add")]
    pub add_projects: Option<Vec<String>>,
    #[schemars(description = "Projects to remove")]
    pub remove_projects: Option<Vec<String>>,
    #[schemars(description = "Milestone to set")]
    pub milestone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PrReadyParams {
    #[schemars(description = "Pull request number or URL")]
    pub pr_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PrReopenParams {
    #[schemars(description = "Pull request number or URL")]
    pub pr_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Comment to add when reopening")]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PrReviewParams {
    #[schemars(description = "Pull request number or URL")]
    pub pr_identifier: String,
    #[schemars(description = "Review action (approve, request_changes, comment)")]
    pub action: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Review text (exclusive with body_file)")]
    pub body: Option<String>,
    #[schemars(description = "Path to a file containing the review (exclusive with body)")]
    pub body_file: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PrUpdateBranchParams {
    #[schemars(description = "Pull request number or URL")]
    pub pr_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Rebase onto the base branch instead of merging")]
    pub rebase: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PrMergeParams {
    #[schemars(description = "Pull request number or URL")]
    pub pr_identifier: String,
    #[schemars(description = "Repository owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Repository name (falls back to GH_REPO_NAME)")]
    pub repo: Option<String>,
    #[schemars(description = "Merge method (merge, squash, rebase); falls back to the configured default")]
    pub merge_method: Option<String>,
    #[schemars(description = "Delete the head branch after merging (default: true)")]
    pub delete_branch: Option<bool>,
}
