//! Project-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectFieldCreateParams {
    #[schemars(description = "Project number or ID")]
    pub project_id: String,
    #[schemars(description = "Name of the field to create")]
    pub name: Option<String>,
    #[schemars(description = "Field type (TEXT, SINGLE_SELECT, DATE, NUMBER, ITERATION)")]
    pub data_type: Option<String>,
    #[schemars(description = "Project owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Options for SINGLE_SELECT fields")]
    pub single_select_options: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectFieldDeleteParams {
    #[schemars(description = "ID of the field to delete")]
    pub field_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectFieldListParams {
    #[schemars(description = "Project number or ID")]
    pub project_id: String,
    #[schemars(description = "Project owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Maximum number of fields to return (default: 30)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectItemAddParams {
    #[schemars(description = "Project number or ID")]
    pub project_id: String,
    #[schemars(description = "Project owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "ID of the issue to add (exclusive with pull_request_id)")]
    pub issue_id: Option<String>,
    #[schemars(description = "ID of the pull request to add (exclusive with issue_id)")]
    pub pull_request_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectItemArchiveParams {
    #[schemars(description = "ID of the item to archive or unarchive")]
    pub item_id: String,
    #[schemars(description = "Project ID (falls back to GH_PROJECT_ID)")]
    pub project_id: Option<String>,
    #[schemars(description = "Project owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Unarchive instead of archive")]
    pub undo: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectItemDeleteParams {
    #[schemars(description = "ID of the item to delete")]
    pub item_id: String,
    #[schemars(description = "Project ID (falls back to GH_PROJECT_ID)")]
    pub project_id: Option<String>,
    #[schemars(description = "Project owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectItemEditParams {
    #[schemars(description = "ID of the item to edit")]
    pub item_id: String,
    #[schemars(description = "ID of the field to edit")]
    pub field_id: String,
    #[schemars(description = "Project node ID, e.g. PVT_kwHOARERcs4A4K2N (falls back to GH_PROJECT_NODE_ID)")]
    pub project_node_id: Option<String>,
    #[schemars(description = "Text value to set")]
    pub text_value: Option<String>,
    #[schemars(description = "Number value to set")]
    pub number_value: Option<f64>,
    #[schemars(description = "Date value to set (YYYY-MM-DD)")]
    pub date_value: Option<String>,
    #[schemars(description = "Single-select option ID to set")]
    pub single_select_option_id: Option<String>,
    #[schemars(description = "Iteration ID to set")]
    pub iteration_id: Option<String>,
    #[schemars(description = "Clear the field value instead of setting one")]
    pub clear: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectItemListParams {
    #[schemars(description = "Project number or ID")]
    pub project_id: String,
    #[schemars(description = "Project owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
    #[schemars(description = "Maximum number of items to return (default: 30)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectViewParams {
    #[schemars(description = "Project number or ID")]
    pub project_id: String,
    #[schemars(description = "Project owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectItemCreateParams {
    #[schemars(description = "Project number or ID")]
    pub project_id: String,
    #[schemars(description = "Title of the draft issue")]
    pub title: String,
    #[schemars(description = "Body of the draft issue")]
    pub body: Option<String>,
    #[schemars(description = "Project owner (falls back to GH_REPO_OWNER)")]
    pub owner: Option<String>,
}
