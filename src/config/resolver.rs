//! Parameter resolution
//!
//! Resolves one `(category, name)` parameter to its effective value:
//! runtime value first, then the declared environment variable, then the
//! static default. Environment lookups go through an [`EnvSource`] handed
//! to the resolver, so tests never mutate the process environment.

use std::collections::HashMap;

use tracing::warn;

use super::spec::{lookup, ParamKind, ParamValue};

/// Read-only source of environment variables.
pub trait EnvSource: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed-map environment, for tests and embedding.
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Resolves tool parameters against the static table and an environment.
///
/// Holds no per-call state; safe to share across concurrent tool calls.
pub struct ParamResolver {
    env: Box<dyn EnvSource>,
}

impl Default for ParamResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamResolver {
    /// Resolver backed by the process environment.
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }

    pub fn with_env(env: impl EnvSource + 'static) -> Self {
        Self { env: Box::new(env) }
    }

    /// Resolve a parameter value.
    ///
    /// Precedence: `runtime` if present (an explicitly empty string or list
    /// is a present value), then the declared environment variable, then
    /// the static default. Unknown `(category, name)` resolves to `None`;
    /// required-parameter checks are the caller's concern.
    pub fn resolve(
        &self,
        category: &str,
        name: &str,
        runtime: Option<ParamValue>,
    ) -> Option<ParamValue> {
        if runtime.is_some() {
            return runtime;
        }

        let spec = lookup(category, name)?;

        if let Some(var) = spec.env_var {
            if let Some(raw) = self.env.get(var) {
                return self.coerce(spec.kind, var, &raw, || spec.default.to_value());
            }
        }

        spec.default.to_value()
    }

    /// Coerce an environment string to the declared kind.
    ///
    /// Runtime values and defaults are already typed; only env values pass
    /// through here. A failed int parse falls back to the default; a failed
    /// bool parse returns the raw string unchanged.
    fn coerce(
        &self,
        kind: ParamKind,
        var: &str,
        raw: &str,
        default: impl FnOnce() -> Option<ParamValue>,
    ) -> Option<ParamValue> {
        match kind {
            ParamKind::Str => Some(ParamValue::Str(raw.to_string())),
            ParamKind::Int => match raw.trim().parse::<i64>() {
                Ok(n) => Some(ParamValue::Int(n)),
                Err(err) => {
                    warn!(%var, value = %raw, %err, "failed to parse int env var, using default");
                    default()
                }
            },
            ParamKind::List => Some(ParamValue::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
            ParamKind::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" | "t" | "y" => Some(ParamValue::Bool(true)),
                "false" | "no" | "0" | "f" | "n" => Some(ParamValue::Bool(false)),
                _ => {
                    warn!(%var, value = %raw, "unrecognized bool env var, returning raw value");
                    Some(ParamValue::Str(raw.to_string()))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(env: MapEnv) -> ParamResolver {
        ParamResolver::with_env(env)
    }

    #[test]
    fn runtime_value_wins_over_env_and_default() {
        let r = resolver(MapEnv::new().set("DEFAULT_ISSUE_ASSIGNEE", "env-user"));
        let got = r.resolve(
            "issue",
            "assignee",
            Some(ParamValue::Str("runtime-user".into())),
        );
        assert_eq!(got, Some(ParamValue::Str("runtime-user".into())));
    }

    #[test]
    fn explicit_empty_string_is_a_present_value() {
        let r = resolver(MapEnv::new().set("DEFAULT_ISSUE_ASSIGNEE", "env-user"));
        let got = r.resolve("issue", "assignee", Some(ParamValue::Str(String::new())));
        assert_eq!(got, Some(ParamValue::Str(String::new())));
    }

    #[test]
    fn explicit_empty_list_is_a_present_value() {
        let r = resolver(MapEnv::new().set("DEFAULT_ISSUE_LABELS", "a,b"));
        let got = r.resolve("issue", "labels", Some(ParamValue::List(vec![])));
        assert_eq!(got, Some(ParamValue::List(vec![])));
    }

    #[test]
    fn env_value_wins_over_default() {
        let r = resolver(MapEnv::new().set("DEFAULT_ISSUE_LIST_STATE", "closed"));
        let got = r.resolve("issue", "state", None);
        assert_eq!(got, Some(ParamValue::Str("closed".into())));
    }

    #[test]
    fn default_applies_when_nothing_else_is_set() {
        let r = resolver(MapEnv::new());
        assert_eq!(
            r.resolve("issue", "limit", None),
            Some(ParamValue::Int(30))
        );
        assert_eq!(
            r.resolve("issue", "assignee", None),
            Some(ParamValue::Str("@me".into()))
        );
        assert_eq!(r.resolve("pull_request", "draft", None), Some(ParamValue::Bool(false)));
        assert_eq!(
            r.resolve("pull_request", "delete_branch", None),
            Some(ParamValue::Bool(true))
        );
    }

    #[test]
    fn unknown_param_resolves_to_none() {
        let r = resolver(MapEnv::new());
        assert_eq!(r.resolve("issue", "no_such_param", None), None);
        assert_eq!(r.resolve("bogus", "limit", None), None);
    }

    #[test]
    fn unknown_param_still_passes_runtime_through() {
        let r = resolver(MapEnv::new());
        let got = r.resolve("bogus", "limit", Some(ParamValue::Int(5)));
        assert_eq!(got, Some(ParamValue::Int(5)));
    }

    #[test]
    fn int_env_value_is_parsed() {
        let r = resolver(MapEnv::new().set("DEFAULT_ISSUE_LIST_LIMIT", "50"));
        assert_eq!(r.resolve("issue", "limit", None), Some(ParamValue::Int(50)));
    }

    #[test]
    fn bad_int_env_value_falls_back_to_default() {
        let r = resolver(MapEnv::new().set("DEFAULT_ISSUE_LIST_LIMIT", "not-a-number"));
        assert_eq!(r.resolve("issue", "limit", None), Some(ParamValue::Int(30)));
    }

    #[test]
    fn list_env_value_is_split_and_trimmed() {
        let r = resolver(MapEnv::new().set("DEFAULT_ISSUE_LABELS", "a, b ,c"));
        assert_eq!(
            r.resolve("issue", "labels", None),
            Some(ParamValue::List(vec!["a".into(), "b".into(), "c".into()]))
        );
    }

    #[test]
    fn empty_list_env_value_is_an_empty_list_not_the_default() {
        let r = resolver(MapEnv::new().set("DEFAULT_PR_REVIEWERS", ""));
        assert_eq!(
            r.resolve("pull_request", "reviewers", None),
            Some(ParamValue::List(vec![]))
        );
    }

    #[test]
    fn list_env_value_drops_empty_segments() {
        let r = resolver(MapEnv::new().set("DEFAULT_ISSUE_LABELS", "a,, ,b"));
        assert_eq!(
            r.resolve("issue", "labels", None),
            Some(ParamValue::List(vec!["a".into(), "b".into()]))
        );
    }

    #[test]
    fn bool_env_values_parse_case_insensitively() {
        for (raw, expected) in [
            ("true", true),
            ("TRUE", true),
            ("Yes", true),
            ("1", true),
            ("t", true),
            ("Y", true),
            ("false", false),
            ("No", false),
            ("0", false),
            ("F", false),
            ("n", false),
        ] {
            let r = resolver(MapEnv::new().set("DEFAULT_PR_DRAFT", raw));
            assert_eq!(
                r.resolve("pull_request", "draft", None),
                Some(ParamValue::Bool(expected)),
                "raw: {raw}"
            );
        }
    }

    #[test]
    fn unrecognized_bool_env_value_is_returned_raw() {
        let r = resolver(MapEnv::new().set("DEFAULT_PR_DRAFT", "maybe"));
        assert_eq!(
            r.resolve("pull_request", "draft", None),
            Some(ParamValue::Str("maybe".into()))
        );
    }
}
