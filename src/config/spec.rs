//! Static parameter configuration
//!
//! One table maps every configurable tool parameter to its environment
//! variable override, its default, and its kind. The table is declared once
//! and never mutated; resolution order lives in [`super::resolver`].

use serde::Serialize;

/// Kind of a configurable parameter, driving env-value coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Plain string, passed through as-is.
    Str,
    /// Base-10 integer.
    Int,
    /// Comma-separated list in the environment variable.
    List,
    /// true/yes/1/t/y or false/no/0/f/n, case-insensitive.
    Bool,
}

/// A resolved parameter value.
///
/// Serializes untagged so it embeds directly into response payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    List(Vec<String>),
    Bool(bool),
}

impl ParamValue {
    /// The string form, for `Str` values only.
    pub fn into_string(self) -> Option<String> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// `None` for non-bool values, including a `Str` left over from a
    /// failed bool coercion.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<String>> {
        match self {
            ParamValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Default value of a parameter, in const-friendly form.
#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    Unset,
    Str(&'static str),
    Int(i64),
    List(&'static [&'static str]),
    Bool(bool),
}

impl DefaultValue {
    pub fn to_value(self) -> Option<ParamValue> {
        match self {
            DefaultValue::Unset => None,
            DefaultValue::Str(s) => Some(ParamValue::Str(s.to_string())),
            DefaultValue::Int(n) => Some(ParamValue::Int(n)),
            DefaultValue::List(items) => Some(ParamValue::List(
                items.iter().map(|s| s.to_string()).collect(),
            )),
            DefaultValue::Bool(b) => Some(ParamValue::Bool(b)),
        }
    }
}

/// Declaration of one configurable tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub category: &'static str,
    pub name: &'static str,
    pub env_var: Option<&'static str>,
    pub default: DefaultValue,
    pub kind: ParamKind,
}

const fn spec(
    category: &'static str,
    name: &'static str,
    env_var: Option<&'static str>,
    default: DefaultValue,
    kind: ParamKind,
) -> ParamSpec {
    ParamSpec {
        category,
        name,
        env_var,
        default,
        kind,
    }
}

/// Every configurable parameter the tool surface reads.
pub static TOOL_PARAM_SPECS: &[ParamSpec] = &[
    // --- global ---
    spec(
        "global",
        "owner",
        Some("GH_REPO_OWNER"),
        DefaultValue::Unset,
        ParamKind::Str,
    ),
    spec(
        "global",
        "repo",
        Some("GH_REPO_NAME"),
        DefaultValue::Unset,
        ParamKind::Str,
    ),
    // --- issue ---
    spec(
        "issue",
        "assignee",
        Some("DEFAULT_ISSUE_ASSIGNEE"),
        DefaultValue::Str("@me"),
        ParamKind::Str,
    ),
    spec(
        "issue",
        "body",
        Some("GH_ISSUE_BODY"),
        DefaultValue::Str("Created via GH Project Manager MCP"),
        ParamKind::Str,
    ),
    spec(
        "issue",
        "labels",
        Some("DEFAULT_ISSUE_LABELS"),
        DefaultValue::Unset,
        ParamKind::List,
    ),
    spec(
        "issue",
        "project",
        Some("DEFAULT_ISSUE_PROJECT"),
        DefaultValue::Unset,
        ParamKind::Str,
    ),
    spec(
        "issue",
        "state",
        Some("DEFAULT_ISSUE_LIST_STATE"),
        DefaultValue::Str("open"),
        ParamKind::Str,
    ),
    spec(
        "issue",
        "limit",
        Some("DEFAULT_ISSUE_LIST_LIMIT"),
        DefaultValue::Int(30),
        ParamKind::Int,
    ),
    // --- pull_request ---
    spec(
        "pull_request",
        "body",
        Some("GH_PR_BODY"),
        DefaultValue::Str("Created via GH Project Manager MCP"),
        ParamKind::Str,
    ),
    spec(
        "pull_request",
        "assignee",
        Some("GH_PR_ASSIGNEE"),
        DefaultValue::Str("@me"),
        ParamKind::Str,
    ),
    spec(
        "pull_request",
        "base",
        Some("GH_PR_BASE_BRANCH"),
        DefaultValue::Unset,
        ParamKind::Str,
    ),
    spec(
        "pull_request",
        "draft",
        Some("DEFAULT_PR_DRAFT"),
        DefaultValue::Bool(false),
        ParamKind::Bool,
    ),
    spec(
        "pull_request",
        "reviewers",
        Some("DEFAULT_PR_REVIEWERS"),
        DefaultValue::Unset,
        ParamKind::List,
    ),
    spec(
        "pull_request",
        "labels",
        Some("DEFAULT_PR_LABELS"),
        DefaultValue::Unset,
        ParamKind::List,
    ),
    spec(
        "pull_request",
        "state",
        Some("DEFAULT_PR_LIST_STATE"),
        DefaultValue::Str("open"),
        ParamKind::Str,
    ),
    spec(
        "pull_request",
        "limit",
        Some("DEFAULT_PR_LIST_LIMIT"),
        DefaultValue::Int(30),
        ParamKind::Int,
    ),
    spec(
        "pull_request",
        "merge_method",
        Some("DEFAULT_PR_MERGE_METHOD"),
        DefaultValue::Str("merge"),
        ParamKind::Str,
    ),
    spec(
        "pull_request",
        "delete_branch",
        Some("DEFAULT_PR_DELETE_BRANCH"),
        DefaultValue::Bool(true),
        ParamKind::Bool,
    ),
    // --- project ---
    spec(
        "project",
        "project_id",
        Some("GH_PROJECT_ID"),
        DefaultValue::Unset,
        ParamKind::Str,
    ),
    spec(
        "project",
        "project_node_id",
        Some("GH_PROJECT_NODE_ID"),
        DefaultValue::Unset,
        ParamKind::Str,
    ),
    spec(
        "project",
        "field_list_limit",
        Some("DEFAULT_PROJECT_FIELD_LIST_LIMIT"),
        DefaultValue::Int(30),
        ParamKind::Int,
    ),
    spec(
        "project",
        "item_list_limit",
        Some("DEFAULT_PROJECT_ITEM_LIST_LIMIT"),
        DefaultValue::Int(30),
        ParamKind::Int,
    ),
];

/// Find the spec for `(category, name)`, if one is declared.
pub fn lookup(category: &str, name: &str) -> Option<&'static ParamSpec> {
    TOOL_PARAM_SPECS
        .iter()
        .find(|s| s.category == category && s.name == name)
}
