//! Project handler implementations
//!
//! `gh project` subcommands emit JSON when `--format json` is passed, which
//! every read/mutate tool here requests; field-create and field-delete are
//! plain-output commands.

use serde_json::Value;
use tracing::warn;

use crate::gh::{GhError, OutputShape};
use crate::params::{
    ProjectFieldCreateParams, ProjectFieldDeleteParams, ProjectFieldListParams,
    ProjectItemAddParams, ProjectItemArchiveParams, ProjectItemCreateParams,
    ProjectItemDeleteParams, ProjectItemEditParams, ProjectItemListParams, ProjectViewParams,
};

use super::{argv, fail, push_flag, resolve_limit, resolve_string, run, ToolContext};

const VALID_FIELD_DATA_TYPES: [&str; 5] = ["TEXT", "SINGLE_SELECT", "DATE", "NUMBER", "ITERATION"];

/// Create a custom field in a project.
pub async fn create_project_field(ctx: &ToolContext, params: ProjectFieldCreateParams) -> Value {
    let Some(name) = params.name.filter(|n| !n.is_empty()) else {
        return fail(GhError::required_param("name"));
    };
    let Some(data_type) = params.data_type.filter(|d| !d.is_empty()) else {
        return fail(GhError::required_param("data_type"));
    };
    let Some(owner) = resolve_string(ctx, "global", "owner", params.owner).filter(|o| !o.is_empty())
    else {
        return fail(GhError::required_param("owner"));
    };

    let data_type = data_type.to_uppercase();
    if !VALID_FIELD_DATA_TYPES.contains(&data_type.as_str()) {
        return fail(GhError::invalid_param(&data_type, &VALID_FIELD_DATA_TYPES));
    }

    let single_select = data_type == "SINGLE_SELECT";
    let options = params.single_select_options.filter(|o| !o.is_empty());
    if single_select && options.is_none() {
        return fail(GhError::required_param("single_select_options"));
    }
    if !single_select && options.is_some() {
        warn!(%data_type, "single_select_options provided for a non-SINGLE_SELECT field, ignoring");
    }

    let mut args = argv(&[
        "project",
        "field-create",
        &params.project_id,
        "--owner",
        &owner,
        "--name",
        &name,
        "--data-type",
        &data_type,
    ]);
    if single_select {
        if let Some(options) = options {
            push_flag(&mut args, "--single-select-options", options.join(","));
        }
    }

    run(ctx, args, OutputShape::PlainText).await
}

/// Delete a field from a project.
pub async fn delete_project_field(ctx: &ToolContext, params: ProjectFieldDeleteParams) -> Value {
    let args = argv(&["project", "field-delete", &params.field_id]);
    run(ctx, args, OutputShape::PlainText).await
}

/// List fields in a project.
pub async fn list_project_fields(ctx: &ToolContext, params: ProjectFieldListParams) -> Value {
    let owner = resolve_string(ctx, "global", "owner", params.owner);
    let limit = resolve_limit(ctx, "project", "field_list_limit", params.limit);

    let mut args = argv(&["project", "field-list", &params.project_id, "--format", "json"]);
    if let Some(owner) = owner.filter(|o| !o.is_empty()) {
        push_flag(&mut args, "--owner", owner);
    }
    if let Some(limit) = limit {
        push_flag(&mut args, "--limit", limit.to_string());
    }

    run(ctx, args, OutputShape::JsonObject).await
}

/// Add an existing issue or pull request to a project.
pub async fn add_project_item(ctx: &ToolContext, params: ProjectItemAddParams) -> Value {
    let owner = resolve_string(ctx, "global", "owner", params.owner);

    let mut args = argv(&["project", "item-add", &params.project_id, "--format", "json"]);
    if let Some(owner) = owner.filter(|o| !o.is_empty()) {
        push_flag(&mut args, "--owner", owner);
    }

    match (params.issue_id, params.pull_request_id) {
        (None, None) => return fail(GhError::required_param("issue_id or pull_request_id")),
        (Some(_), Some(_)) => {
            return fail(GhError::invalid_param(
                "issue_id and pull_request_id",
                &["issue_id", "pull_request_id"],
            ))
        }
        (Some(issue_id), None) => push_flag(&mut args, "--issue-id", issue_id),
        (None, Some(pr_id)) => push_flag(&mut args, "--pull-request-id", pr_id),
    }

    run(ctx, args, OutputShape::JsonObject).await
}

/// Archive or unarchive a project item.
pub async fn archive_project_item(ctx: &ToolContext, params: ProjectItemArchiveParams) -> Value {
    let project_id = resolve_string(ctx, "project", "project_id", params.project_id);
    let owner = resolve_string(ctx, "global", "owner", params.owner);

    let mut args = argv(&["project", "item-archive", &params.item_id, "--format", "json"]);
    if let Some(owner) = owner.filter(|o| !o.is_empty()) {
        push_flag(&mut args, "--owner", owner);
    }
    if let Some(project_id) = project_id.filter(|p| !p.is_empty()) {
        push_flag(&mut args, "--project-id", project_id);
    }
    if params.undo == Some(true) {
        args.push("--undo".to_string());
    }

    run(ctx, args, OutputShape::JsonObject).await
}

/// Delete an item from a project.
pub async fn delete_project_item(ctx: &ToolContext, params: ProjectItemDeleteParams) -> Value {
    let project_id = resolve_string(ctx, "project", "project_id", params.project_id);
    let owner = resolve_string(ctx, "global", "owner", params.owner);

    let mut args = argv(&["project", "item-delete", &params.item_id, "--format", "json"]);
    if let Some(owner) = owner.filter(|o| !o.is_empty()) {
        push_flag(&mut args, "--owner", owner);
    }
    if let Some(project_id) = project_id.filter(|p| !p.is_empty()) {
        push_flag(&mut args, "--project-id", project_id);
    }

    run(ctx, args, OutputShape::JsonObject).await
}

/// Edit one field value of a project item.
pub async fn edit_project_item(ctx: &ToolContext, params: ProjectItemEditParams) -> Value {
    let clear = params.clear == Some(true);
    let values_provided = [
        params.text_value.is_some(),
        params.number_value.is_some(),
        params.date_value.is_some(),
        params.single_select_option_id.is_some(),
        params.iteration_id.is_some(),
    ];
    let value_count = values_provided.iter().filter(|p| **p).count();

    if clear && value_count > 0 {
        return fail(GhError::invalid_param(
            "clear with value",
            &["clear alone", "exactly one value parameter"],
        ));
    }
    if !clear && value_count == 0 {
        return fail(GhError::required_param("value parameter"));
    }
    if value_count > 1 {
        return fail(GhError::invalid_param(
            "multiple values",
            &["exactly one value parameter"],
        ));
    }
    if let Some(ref date) = params.date_value {
        if !is_iso_date(date) {
            return fail(GhError::invalid_param("date_value", &["YYYY-MM-DD format"]));
        }
    }

    let project_node_id = resolve_string(ctx, "project", "project_node_id", params.project_node_id);

    let mut args = argv(&[
        "project",
        "item-edit",
        "--id",
        &params.item_id,
        "--format",
        "json",
        "--field-id",
        &params.field_id,
    ]);
    if let Some(node_id) = project_node_id.filter(|p| !p.is_empty()) {
        push_flag(&mut args, "--project-id", node_id);
    }

    if clear {
        args.push("--clear".to_string());
    } else if let Some(text) = params.text_value {
        push_flag(&mut args, "--text", text);
    } else if let Some(number) = params.number_value {
        push_flag(&mut args, "--number", number.to_string());
    } else if let Some(date) = params.date_value {
        push_flag(&mut args, "--date", date);
    } else if let Some(option_id) = params.single_select_option_id {
        push_flag(&mut args, "--single-select-option-id", option_id);
    } else if let Some(iteration_id) = params.iteration_id {
        push_flag(&mut args, "--iteration-id", iteration_id);
    }

    run(ctx, args, OutputShape::JsonObject).await
}

/// List items in a project.
pub async fn list_project_items(ctx: &ToolContext, params: ProjectItemListParams) -> Value {
    let owner = resolve_string(ctx, "global", "owner", params.owner);
    let limit = resolve_limit(ctx, "project", "item_list_limit", params.limit);

    let mut args = argv(&["project", "item-list", &params.project_id, "--format", "json"]);
    if let Some(owner) = owner.filter(|o| !o.is_empty()) {
        push_flag(&mut args, "--owner", owner);
    }
    if let Some(limit) = limit {
        push_flag(&mut args, "--limit", limit.to_string());
    }

    run(ctx, args, OutputShape::JsonObject).await
}

/// View details of a project.
pub async fn view_project(ctx: &ToolContext, params: ProjectViewParams) -> Value {
    let owner = resolve_string(ctx, "global", "owner", params.owner);

    let mut args = argv(&["project", "view", &params.project_id, "--format", "json"]);
    if let Some(owner) = owner.filter(|o| !o.is_empty()) {
        push_flag(&mut args, "--owner", owner);
    }

    run(ctx, args, OutputShape::JsonObject).await
}

/// Create a draft issue item directly in a project.
pub async fn create_project_item(ctx: &ToolContext, params: ProjectItemCreateParams) -> Value {
    let Some(owner) = resolve_string(ctx, "global", "owner", params.owner).filter(|o| !o.is_empty())
    else {
        return fail(GhError::required_param("owner"));
    };

    let mut args = argv(&[
        "project",
        "item-create",
        &params.project_id,
        "--format",
        "json",
        "--owner",
        &owner,
        "--title",
        &params.title,
    ]);
    if let Some(body) = params.body.filter(|b| !b.is_empty()) {
        push_flag(&mut args, "--body", body);
    }

    run(ctx, args, OutputShape::JsonObject).await
}

/// Strict YYYY-MM-DD check; month and day ranges only, no calendar logic.
fn is_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let year = s[0..4].parse::<u32>();
    let month = s[5..7].parse::<u32>();
    let day = s[8..10].parse::<u32>();
    matches!(
        (year, month, day),
        (Ok(_), Ok(m), Ok(d)) if (1..=12).contains(&m) && (1..=31).contains(&d)
    )
}
