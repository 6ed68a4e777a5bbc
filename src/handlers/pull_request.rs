//! Pull request handler implementations

use serde_json::Value;

use crate::gh::{GhError, OutputShape};
use crate::params::{
    PrCheckoutParams, PrCloseParams, PrCommentParams, PrCreateParams, PrDiffParams, PrEditParams,
    PrListParams, PrMergeParams, PrReadyParams, PrReopenParams, PrReviewParams,
    PrUpdateBranchParams, PrViewParams,
};

use super::{
    argv, body_args, fail, push_flag, require_repo, resolve_bool, resolve_limit, resolve_list,
    resolve_string, run, ToolContext,
};

const PR_LIST_FIELDS: &str = "number,title,state,url,labels,assignees,author,baseRefName,headRefName";
const PR_VIEW_FIELDS: &str = "number,title,state,url,body,createdAt,updatedAt,labels,assignees,author,baseRefName,headRefName,comments,reviews";
const PR_STATUS_FIELDS: &str = "createdBy,mentioned,reviewRequested";

const VALID_COLOR_OPTIONS: [&str; 3] = ["auto", "always", "never"];
const VALID_MERGE_METHODS: [&str; 3] = ["merge", "squash", "rebase"];

/// Create a pull request.
pub async fn create_pull_request(ctx: &ToolContext, params: PrCreateParams) -> Value {
    if params.base_branch.is_empty() {
        return fail(GhError::required_param("base_branch"));
    }
    if params.head.is_empty() {
        return fail(GhError::required_param("head"));
    }
    if params.title.is_empty() {
        return fail(GhError::required_param("title"));
    }
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    let body = resolve_string(ctx, "pull_request", "body", params.body);
    let assignee = resolve_string(ctx, "pull_request", "assignee", params.assignee);
    let draft = resolve_bool(ctx, "pull_request", "draft", params.draft, false);
    let labels = resolve_list(ctx, "pull_request", "labels", params.labels);
    let reviewers = resolve_list(ctx, "pull_request", "reviewers", params.reviewers);

    let mut args = argv(&[
        "pr",
        "create",
        "--repo",
        &slug,
        "--base",
        &params.base_branch,
        "--head",
        &params.head,
        "--title",
        &params.title,
    ]);
    if let Some(body) = body.filter(|b| !b.is_empty()) {
        push_flag(&mut args, "--body", body);
    }
    if draft {
        args.push("--draft".to_string());
    }
    for label in labels.unwrap_or_default() {
        push_flag(&mut args, "--label", label);
    }
    if let Some(project) = params.project_title.filter(|p| !p.is_empty()) {
        push_flag(&mut args, "--project", project);
    }
    if let Some(assignee) = assignee.filter(|a| !a.is_empty()) {
        push_flag(&mut args, "--assignee", assignee);
    }
    for reviewer in reviewers.unwrap_or_default() {
        push_flag(&mut args, "--reviewer", reviewer);
    }

    run(ctx, args, OutputShape::BareUrl).await
}

/// List pull requests with optional filters.
pub async fn list_pull_requests(ctx: &ToolContext, params: PrListParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    let state = resolve_string(ctx, "pull_request", "state", params.state);
    let limit = resolve_limit(ctx, "pull_request", "limit", params.limit);

    let mut args = argv(&["pr", "list", "--repo", &slug]);
    if let Some(limit) = limit {
        push_flag(&mut args, "--limit", limit.to_string());
    }
    push_flag(&mut args, "--json", PR_LIST_FIELDS);
    if let Some(state) = state.filter(|s| !s.is_empty()) {
        push_flag(&mut args, "--state", state);
    }
    if let Some(assignee) = params.assignee.filter(|a| !a.is_empty()) {
        push_flag(&mut args, "--assignee", assignee);
    }
    if let Some(author) = params.author.filter(|a| !a.is_empty()) {
        push_flag(&mut args, "--author", author);
    }
    if let Some(base) = params.base_branch.filter(|b| !b.is_empty()) {
        push_flag(&mut args, "--base", base);
    }
    if let Some(head) = params.head.filter(|h| !h.is_empty()) {
        push_flag(&mut args, "--head", head);
    }
    if let Some(labels) = params.labels.filter(|l| !l.is_empty()) {
        push_flag(&mut args, "--label", labels.join(","));
    }

    run(ctx, args, OutputShape::JsonArray).await
}

/// View details of a pull request.
pub async fn view_pull_request(ctx: &ToolContext, params: PrViewParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    if params.pr_identifier.is_empty() {
        return fail(GhError::required_param("pr_identifier"));
    }

    let args = argv(&[
        "pr",
        "view",
        &params.pr_identifier,
        "--repo",
        &slug,
        "--json",
        PR_VIEW_FIELDS,
    ]);

    run(ctx, args, OutputShape::JsonObject).await
}

/// Check out a pull request branch locally.
pub async fn checkout_pull_request(ctx: &ToolContext, params: PrCheckoutParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    if params.pr_identifier.is_empty() {
        return fail(GhError::required_param("pr_identifier"));
    }

    let mut args = argv(&["pr", "checkout", &params.pr_identifier, "--repo", &slug]);
    if let Some(branch) = params.checkout_branch_name.filter(|b| !b.is_empty()) {
        push_flag(&mut args, "--branch", branch);
    }
    if params.detach == Some(true) {
        args.push("--detach".to_string());
    }
    if params.recurse_submodules == Some(true) {
        args.push("--recurse-submodules".to_string());
    }
    if params.force == Some(true) {
        args.push("--force".to_string());
    }

    run(ctx, args, OutputShape::PlainText).await
}

/// Close a pull request.
pub async fn close_pull_request(ctx: &ToolContext, params: PrCloseParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    if params.pr_identifier.is_empty() {
        return fail(GhError::required_param("pr_identifier"));
    }

    let mut args = argv(&["pr", "close", &params.pr_identifier, "--repo", &slug]);
    if let Some(comment) = params.comment.filter(|c| !c.is_empty()) {
        push_flag(&mut args, "--comment", comment);
    }
    if params.delete_branch == Some(true) {
        args.push("--delete-branch".to_string());
    }

    run(ctx, args, OutputShape::PlainText).await
}

/// Add a comment to a pull request.
pub async fn comment_pull_request(ctx: &ToolContext, params: PrCommentParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    if params.pr_identifier.is_empty() {
        return fail(GhError::required_param("pr_identifier"));
    }
    let (flag, value) = match body_args(params.body, params.body_file) {
        Ok(pair) => pair,
        Err(err) => return fail(err),
    };

    let mut args = argv(&["pr", "comment", &params.pr_identifier, "--repo", &slug]);
    push_flag(&mut args, flag, value);

    run(ctx, args, OutputShape::BareUrl).await
}

/// View the diff of a pull request.
pub async fn diff_pull_request(ctx: &ToolContext, params: PrDiffParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    let color = params.color.map(|c| c.to_lowercase());
    if let Some(ref color) = color {
        if !VALID_COLOR_OPTIONS.contains(&color.as_str()) {
            return fail(GhError::invalid_param(color, &VALID_COLOR_OPTIONS));
        }
    }

    let mut args = argv(&["pr", "diff"]);
    if let Some(identifier) = params.pr_identifier.filter(|i| !i.is_empty()) {
        args.push(identifier);
    }
    push_flag(&mut args, "--repo", slug);
    if let Some(color) = color {
        push_flag(&mut args, "--color", color);
    }
    if params.patch == Some(true) {
        args.push("--patch".to_string());
    }
    if params.name_only == Some(true) {
        args.push("--name-only".to_string());
    }

    run(ctx, args, OutputShape::PlainText).await
}

/// Edit fields of a pull request.
pub async fn edit_pull_request(ctx: &ToolContext, params: PrEditParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    if params.pr_identifier.is_empty() {
        return fail(GhError::required_param("pr_identifier"));
    }
    // Body is never defaulted here: an edit only touches what the caller
    // asked to change. The base branch may still come from config.
    let body = params.body;
    let base = resolve_string(ctx, "pull_request", "base", params.base_branch);

    let has_changes = params.title.is_some()
        || body.is_some()
        || base.is_some()
        || params.add_assignees.is_some()
        || params.remove_assignees.is_some()
        || params.add_reviewers.is_some()
        || params.remove_reviewers.is_some()
        || params.add_labels.is_some()
        || params.remove_labels.is_some()
        || params.add_projects.is_some()
        || params.remove_projects.is_some()
        || params.milestone.is_some();
    if !has_changes {
        return fail(GhError::required_param("change parameter (title, body, etc.)"));
    }

    let mut args = argv(&["pr", "edit", &params.pr_identifier, "--repo", &slug]);
    if let Some(title) = params.title.filter(|t| !t.is_empty()) {
        push_flag(&mut args, "--title", title);
    }
    if let Some(body) = body.filter(|b| !b.is_empty()) {
        push_flag(&mut args, "--body", body);
    }
    if let Some(base) = base.filter(|b| !b.is_empty()) {
        push_flag(&mut args, "--base", base);
    }
    if let Some(milestone) = params.milestone.filter(|m| !m.is_empty()) {
        push_flag(&mut args, "--milestone", milestone);
    }
    for (flag, values) in [
        ("--add-assignee", params.add_assignees),
        ("--remove-assignee", params.remove_assignees),
        ("--add-reviewer", params.add_reviewers),
        ("--remove-reviewer", params.remove_reviewers),
        ("--add-label", params.add_labels),
        ("--remove-label", params.remove_labels),
        ("--add-project", params.add_projects),
        ("--remove-project", params.remove_projects),
    ] {
        for value in values.unwrap_or_default() {
            push_flag(&mut args, flag, value);
        }
    }

    run(ctx, args, OutputShape::PlainText).await
}

/// Mark a draft pull request as ready for review.
pub async fn ready_pull_request(ctx: &ToolContext, params: PrReadyParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    if params.pr_identifier.is_empty() {
        return fail(GhError::required_param("pr_identifier"));
    }

    let args = argv(&["pr", "ready", &params.pr_identifier, "--repo", &slug]);

    run(ctx, args, OutputShape::PlainText).await
}

/// Reopen a closed pull request.
pub async fn reopen_pull_request(ctx: &ToolContext, params: PrReopenParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    if params.pr_identifier.is_empty() {
        return fail(GhError::required_param("pr_identifier"));
    }

    let mut args = argv(&["pr", "reopen", &params.pr_identifier, "--repo", &slug]);
    if let Some(comment) = params.comment.filter(|c| !c.is_empty()) {
        push_flag(&mut args, "--comment", comment);
    }

    run(ctx, args, OutputShape::PlainText).await
}

/// Submit a review on a pull request.
pub async fn review_pull_request(ctx: &ToolContext, params: PrReviewParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    if params.pr_identifier.is_empty() {
        return fail(GhError::required_param("pr_identifier"));
    }
    if params.action.is_empty() {
        return fail(GhError::required_param("action"));
    }

    let action = params.action.to_lowercase();
    let action_flag = match action.as_str() {
        "approve" => "--approve",
        "comment" => "--comment",
        "request_changes" => "--request-changes",
        _ => {
            return fail(GhError::invalid_param(
                &action,
                &["approve", "comment", "request_changes"],
            ))
        }
    };

    let has_body = params.body.is_some() || params.body_file.is_some();
    if has_body && action == "approve" {
        return fail(GhError::invalid_param(
            "body with approve action",
            &["no body allowed for approve"],
        ));
    }
    if !has_body && action == "comment" {
        return fail(GhError::required_param("body or body_file"));
    }

    let mut args = argv(&["pr", "review", &params.pr_identifier, "--repo", &slug]);
    args.push(action_flag.to_string());
    if has_body {
        let (flag, value) = match body_args(params.body, params.body_file) {
            Ok(pair) => pair,
            Err(err) => return fail(err),
        };
        push_flag(&mut args, flag, value);
    }

    run(ctx, args, OutputShape::PlainText).await
}

/// PR status relevant to the current user.
pub async fn status_pull_request(ctx: &ToolContext) -> Value {
    let args = argv(&["pr", "status", "--json", PR_STATUS_FIELDS]);
    run(ctx, args, OutputShape::JsonObject).await
}

/// Update a pull request branch from its base branch.
pub async fn update_branch_pull_request(ctx: &ToolContext, params: PrUpdateBranchParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    if params.pr_identifier.is_empty() {
        return fail(GhError::required_param("pr_identifier"));
    }

    let mut args = argv(&["pr", "update-branch", &params.pr_identifier, "--repo", &slug]);
    if params.rebase == Some(true) {
        args.push("--rebase".to_string());
    }

    run(ctx, args, OutputShape::PlainText).await
}

/// Merge a pull request.
pub async fn merge_pull_request(ctx: &ToolContext, params: PrMergeParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    if params.pr_identifier.is_empty() {
        return fail(GhError::required_param("pr_identifier"));
    }

    let method = resolve_string(ctx, "pull_request", "merge_method", params.merge_method)
        .unwrap_or_else(|| "merge".to_string())
        .to_lowercase();
    if !VALID_MERGE_METHODS.contains(&method.as_str()) {
        return fail(GhError::invalid_param(&method, &VALID_MERGE_METHODS));
    }
    let delete_branch = resolve_bool(ctx, "pull_request", "delete_branch", params.delete_branch, true);

    let mut args = argv(&["pr", "merge", &params.pr_identifier, "--repo", &slug]);
    args.push(format!("--{method}"));
    if delete_branch {
        args.push("--delete-branch".to_string());
    }

    run(ctx, args, OutputShape::PlainText).await
}
