//! Issue handler implementations
//!
//! Semantics follow `gh issue` subcommands: list/view request `--json` with
//! a fixed field set, create/comment return the resource URL, the rest are
//! plain confirmation output.

use serde_json::Value;

use crate::gh::{GhError, OutputShape};
use crate::params::{
    IssueCloseParams, IssueCommentParams, IssueCreateParams, IssueDeleteParams, IssueEditParams,
    IssueListParams, IssueReopenParams, IssueViewParams,
};

use super::{
    argv, body_args, fail, push_flag, require_repo, resolve_limit, resolve_list, resolve_string,
    run, ToolContext,
};

const ISSUE_LIST_FIELDS: &str = "number,title,state,url,createdAt,updatedAt,labels,assignees";
const ISSUE_VIEW_FIELDS: &str =
    "number,title,state,url,body,createdAt,updatedAt,labels,assignees,comments,author,closedAt";

const VALID_CLOSE_REASONS: [&str; 3] = ["completed", "not planned", "duplicate"];

/// Create a GitHub issue.
pub async fn create_issue(ctx: &ToolContext, params: IssueCreateParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    let body = resolve_string(ctx, "issue", "body", params.body);
    let assignee = resolve_string(ctx, "issue", "assignee", params.assignee);
    let labels = resolve_list(ctx, "issue", "labels", params.labels);
    let project = resolve_string(ctx, "issue", "project", params.project);

    let mut args = argv(&["issue", "create", "--repo", &slug, "--title", &params.title]);
    if let Some(body) = body.filter(|b| !b.is_empty()) {
        push_flag(&mut args, "--body", body);
    }
    if let Some(assignee) = assignee.filter(|a| !a.is_empty()) {
        push_flag(&mut args, "--assignee", assignee);
    }
    if let Some(labels) = labels.filter(|l| !l.is_empty()) {
        push_flag(&mut args, "--label", labels.join(","));
    }
    if let Some(project) = project.filter(|p| !p.is_empty()) {
        push_flag(&mut args, "--project", project);
    }

    run(ctx, args, OutputShape::BareUrl).await
}

/// View a specific issue by number.
pub async fn get_issue(ctx: &ToolContext, params: IssueViewParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };

    let args = argv(&[
        "issue",
        "view",
        &params.issue_number.to_string(),
        "--json",
        ISSUE_VIEW_FIELDS,
        "--repo",
        &slug,
    ]);

    run(ctx, args, OutputShape::JsonObject).await
}

/// List issues with optional filters.
pub async fn list_issues(ctx: &ToolContext, params: IssueListParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    let state = resolve_string(ctx, "issue", "state", params.state);
    let limit = resolve_limit(ctx, "issue", "limit", params.limit);

    let mut args = argv(&["issue", "list", "--json", ISSUE_LIST_FIELDS, "--repo", &slug]);
    if let Some(state) = state.filter(|s| !s.is_empty()) {
        push_flag(&mut args, "--state", state);
    }
    if let Some(assignee) = params.assignee.filter(|a| !a.is_empty()) {
        push_flag(&mut args, "--assignee", assignee);
    }
    if let Some(creator) = params.creator.filter(|c| !c.is_empty()) {
        push_flag(&mut args, "--author", creator);
    }
    if let Some(mentioned) = params.mentioned.filter(|m| !m.is_empty()) {
        push_flag(&mut args, "--mention", mentioned);
    }
    if let Some(milestone) = params.milestone.filter(|m| !m.is_empty()) {
        push_flag(&mut args, "--milestone", milestone);
    }
    for label in params.labels.unwrap_or_default() {
        push_flag(&mut args, "--label", label);
    }
    if let Some(limit) = limit {
        push_flag(&mut args, "--limit", limit.to_string());
    }

    run(ctx, args, OutputShape::JsonArray).await
}

/// Close an issue, optionally with a comment and a reason.
pub async fn close_issue(ctx: &ToolContext, params: IssueCloseParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };

    let mut args = argv(&["issue", "close", &params.issue_identifier, "--repo", &slug]);
    if let Some(comment) = params.comment.filter(|c| !c.is_empty()) {
        push_flag(&mut args, "--comment", comment);
    }
    if let Some(reason) = params.reason.filter(|r| !r.is_empty()) {
        let reason = reason.to_lowercase();
        if !VALID_CLOSE_REASONS.contains(&reason.as_str()) {
            return fail(GhError::invalid_param(&reason, &VALID_CLOSE_REASONS));
        }
        push_flag(&mut args, "--reason", reason);
    }

    run(ctx, args, OutputShape::PlainText).await
}

/// Add a comment to an issue.
pub async fn comment_issue(ctx: &ToolContext, params: IssueCommentParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };
    let (flag, value) = match body_args(params.body, params.body_file) {
        Ok(pair) => pair,
        Err(err) => return fail(err),
    };

    let mut args = argv(&["issue", "comment", &params.issue_identifier, "--repo", &slug]);
    push_flag(&mut args, flag, value);

    run(ctx, args, OutputShape::BareUrl).await
}

/// Delete an issue (requires admin rights).
pub async fn delete_issue(ctx: &ToolContext, params: IssueDeleteParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };

    let mut args = argv(&["issue", "delete", &params.issue_identifier, "--repo", &slug]);
    if params.skip_confirmation == Some(true) {
        args.push("--yes".to_string());
    }

    run(ctx, args, OutputShape::PlainText).await
}

/// Edit issue metadata.
pub async fn edit_issue(ctx: &ToolContext, params: IssueEditParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };

    let mut args = argv(&["issue", "edit", &params.issue_identifier, "--repo", &slug]);
    if let Some(title) = params.title.filter(|t| !t.is_empty()) {
        push_flag(&mut args, "--title", title);
    }
    if let Some(body) = params.body.filter(|b| !b.is_empty()) {
        push_flag(&mut args, "--body", body);
    }
    for (flag, values) in [
        ("--add-assignee", params.add_assignees),
        ("--remove-assignee", params.remove_assignees),
        ("--add-label", params.add_labels),
        ("--remove-label", params.remove_labels),
        ("--add-project", params.add_projects),
        ("--remove-project", params.remove_projects),
    ] {
        if let Some(values) = values.filter(|v| !v.is_empty()) {
            push_flag(&mut args, flag, values.join(","));
        }
    }
    if let Some(milestone) = params.milestone.filter(|m| !m.is_empty()) {
        push_flag(&mut args, "--milestone", milestone);
    }

    run(ctx, args, OutputShape::PlainText).await
}

/// Reopen a closed issue.
pub async fn reopen_issue(ctx: &ToolContext, params: IssueReopenParams) -> Value {
    let slug = match require_repo(ctx, params.owner, params.repo) {
        Ok(slug) => slug,
        Err(err) => return fail(err),
    };

    let mut args = argv(&["issue", "reopen", &params.issue_identifier, "--repo", &slug]);
    if let Some(comment) = params.comment.filter(|c| !c.is_empty()) {
        push_flag(&mut args, "--comment", comment);
    }

    run(ctx, args, OutputShape::PlainText).await
}
