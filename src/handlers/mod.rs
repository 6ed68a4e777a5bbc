//! Handler implementations for the MCP tools
//!
//! Organized by domain: issue, pull_request, project. Every handler follows
//! the same path: resolve optional parameters, validate required ones,
//! build the gh argument vector, run it, and normalize the outcome against
//! the subcommand's declared output shape. Handlers always return a JSON
//! envelope, either `{"status":"SUCCESS","raw":...}` or
//! `{"status":"FAILED",...}`, so nothing below the server layer can break
//! a protocol response.

mod issue;
mod project;
mod pull_request;

pub use issue::*;
pub use project::*;
pub use pull_request::*;

use serde_json::{json, Value};

use crate::config::{ParamResolver, ParamValue};
use crate::gh::{normalize, GhError, GhExecutor, GhRunner, OutputShape, Payload};

/// Shared dependencies of every tool handler.
pub struct ToolContext {
    pub resolver: ParamResolver,
    pub runner: Box<dyn GhRunner>,
}

impl Default for ToolContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolContext {
    /// Context backed by the process environment and the real gh binary.
    pub fn new() -> Self {
        Self {
            resolver: ParamResolver::new(),
            runner: Box::new(GhExecutor::new()),
        }
    }

    pub fn with_parts(resolver: ParamResolver, runner: Box<dyn GhRunner>) -> Self {
        Self { resolver, runner }
    }
}

/// Run an argument vector and normalize the outcome into a response value.
pub(crate) async fn run(ctx: &ToolContext, args: Vec<String>, shape: OutputShape) -> Value {
    let outcome = ctx.runner.run(&args).await;
    match normalize(outcome, shape) {
        Ok(payload) => success_response(payload),
        Err(envelope) => envelope.to_value(),
    }
}

pub(crate) fn success_response(payload: Payload) -> Value {
    json!({ "status": "SUCCESS", "raw": payload })
}

pub(crate) fn fail(err: GhError) -> Value {
    err.to_envelope().to_value()
}

/// Seed an argument vector from string literals.
pub(crate) fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn push_flag(args: &mut Vec<String>, flag: &str, value: impl Into<String>) {
    args.push(flag.to_string());
    args.push(value.into());
}

/// Resolve a string parameter through the config chain.
pub(crate) fn resolve_string(
    ctx: &ToolContext,
    category: &str,
    name: &str,
    runtime: Option<String>,
) -> Option<String> {
    ctx.resolver
        .resolve(category, name, runtime.map(ParamValue::Str))
        .and_then(ParamValue::into_string)
}

/// Resolve a list parameter through the config chain.
pub(crate) fn resolve_list(
    ctx: &ToolContext,
    category: &str,
    name: &str,
    runtime: Option<Vec<String>>,
) -> Option<Vec<String>> {
    ctx.resolver
        .resolve(category, name, runtime.map(ParamValue::List))
        .and_then(ParamValue::into_list)
}

/// Resolve a bool parameter; an uncoerced value reads as `default`.
pub(crate) fn resolve_bool(
    ctx: &ToolContext,
    category: &str,
    name: &str,
    runtime: Option<bool>,
    default: bool,
) -> bool {
    ctx.resolver
        .resolve(category, name, runtime.map(ParamValue::Bool))
        .and_then(|v| v.as_bool())
        .unwrap_or(default)
}

/// Resolve a positive limit; non-positive or unparseable values are dropped
/// with a diagnostic.
pub(crate) fn resolve_limit(
    ctx: &ToolContext,
    category: &str,
    name: &str,
    runtime: Option<u32>,
) -> Option<i64> {
    let value = ctx
        .resolver
        .resolve(category, name, runtime.map(|n| ParamValue::Int(n.into())))?;
    match value.as_int() {
        Some(n) if n > 0 => Some(n),
        _ => {
            tracing::warn!(category, name, ?value, "invalid limit, must be a positive integer");
            None
        }
    }
}

/// Resolve owner and repo to an `owner/repo` slug; both are required.
pub(crate) fn require_repo(
    ctx: &ToolContext,
    owner: Option<String>,
    repo: Option<String>,
) -> Result<String, GhError> {
    let owner = resolve_string(ctx, "global", "owner", owner)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| GhError::required_param("owner"))?;
    let repo = resolve_string(ctx, "global", "repo", repo)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| GhError::required_param("repo"))?;
    Ok(format!("{owner}/{repo}"))
}

/// Validate a body/body_file pair: exactly one, and no stdin sentinel.
///
/// Returns the flag and value to append, or the taxonomy error to surface.
pub(crate) fn body_args(
    body: Option<String>,
    body_file: Option<String>,
) -> Result<(&'static str, String), GhError> {
    match (body, body_file) {
        (None, None) => Err(GhError::required_param("body or body_file")),
        (Some(_), Some(_)) => Err(GhError::invalid_param(
            "body and body_file",
            &["body", "body_file"],
        )),
        (Some(body), None) => Ok(("--body", body)),
        (None, Some(file)) if file == "-" => Err(GhError::invalid_param(
            "body_file",
            &["a readable file path (stdin '-' is not supported)"],
        )),
        (None, Some(file)) => Ok(("--body-file", file)),
    }
}
