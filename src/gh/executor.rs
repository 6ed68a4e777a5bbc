//! Async executor for gh CLI commands
//!
//! Spawns `gh` with an argument vector, captures stdout/stderr, and
//! classifies every way the invocation can fail. A credential is resolved
//! before anything is spawned: `GITHUB_TOKEN`, then `GH_TOKEN`, then a
//! probe of `gh auth status`. Without one the command is never run.
//!
//! All diagnostics go to stderr via `tracing`; stdout belongs to the MCP
//! protocol stream.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, instrument, warn};

use crate::config::{EnvSource, ProcessEnv};

use super::error::{GhError, GhResult};

/// Environment variable that enables a child-process timeout, in seconds.
pub const COMMAND_TIMEOUT_VAR: &str = "GH_MCP_COMMAND_TIMEOUT_SECS";

const DEFAULT_ERROR_MESSAGE: &str = "GitHub CLI command failed.";

/// How the executor will authenticate the child process.
enum Credential {
    /// A real token, exported to the child as GH_TOKEN.
    Token(String),
    /// gh is already authenticated; rely on its own credential store.
    GhAuth,
}

/// Seam for running gh commands, so tool handlers can be tested against a
/// fake runner.
#[async_trait]
pub trait GhRunner: Send + Sync {
    async fn run(&self, args: &[String]) -> GhResult<String>;
}

/// Executes gh commands against the real binary.
///
/// Holds only configuration; every call spawns and awaits its own child,
/// so a single executor is safe to share across concurrent tool calls.
pub struct GhExecutor {
    program: String,
    timeout: Option<Duration>,
    env: Box<dyn EnvSource>,
}

impl Default for GhExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GhExecutor {
    pub fn new() -> Self {
        Self {
            program: "gh".to_string(),
            timeout: None,
            env: Box::new(ProcessEnv),
        }
    }

    /// Override the binary name. Mainly for tests.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Enforce a timeout on child processes. Unset means wait forever.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the environment source. Mainly for tests.
    pub fn env_source(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Effective timeout: builder value, else the env var, else none.
    fn effective_timeout(&self) -> Option<Duration> {
        if self.timeout.is_some() {
            return self.timeout;
        }
        let raw = self.env.get(COMMAND_TIMEOUT_VAR)?;
        match raw.trim().parse::<u64>() {
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(err) => {
                warn!(value = %raw, %err, "ignoring unparseable {COMMAND_TIMEOUT_VAR}");
                None
            }
        }
    }

    /// Resolve the credential the child will run with.
    ///
    /// Env tokens win; an empty token string counts as unset. When no token
    /// is in the environment, `gh auth status` exiting zero means gh can
    /// authenticate itself.
    async fn resolve_credential(&self) -> Option<Credential> {
        let token = self
            .env
            .get("GITHUB_TOKEN")
            .filter(|t| !t.is_empty())
            .or_else(|| self.env.get("GH_TOKEN").filter(|t| !t.is_empty()));
        if let Some(token) = token {
            debug!("using token from environment");
            return Some(Credential::Token(token));
        }

        let probe = Command::new(&self.program)
            .args(["auth", "status"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;
        match probe {
            Ok(status) if status.success() => {
                debug!("gh auth status successful, relying on existing gh authentication");
                Some(Credential::GhAuth)
            }
            Ok(_) => None,
            Err(err) => {
                debug!(%err, "gh auth status probe failed");
                None
            }
        }
    }

    #[instrument(skip(self), fields(cmd = %args.join(" ")))]
    async fn execute(&self, args: &[String]) -> GhResult<String> {
        let Some(credential) = self.resolve_credential().await else {
            error!("no GitHub credential available, refusing to run gh");
            return Err(GhError::TokenNotFound);
        };

        debug!("executing: {} {}", self.program, args.join(" "));

        let timeout = self.effective_timeout();

        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .env("NO_COLOR", "1")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Credential::Token(token) = &credential {
            cmd.env("GH_TOKEN", token);
        }
        if timeout.is_some() {
            cmd.kill_on_drop(true);
        }

        let child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                error!("gh CLI not found in PATH");
                GhError::CliNotFound
            } else {
                error!(%e, "failed to spawn gh process");
                GhError::Unexpected {
                    message: format!("failed to spawn gh process: {e}"),
                }
            }
        })?;

        let waited = match timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| {
                    error!(timeout_secs = limit.as_secs(), "gh command timed out");
                    GhError::Unexpected {
                        message: format!("gh command timed out after {}s", limit.as_secs()),
                    }
                })?,
            None => child.wait_with_output().await,
        };
        let output = waited.map_err(|e| {
            error!(%e, "failed to read gh process output");
            GhError::Unexpected {
                message: format!("failed to read gh process output: {e}"),
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            error!(code, stderr = %stderr, "gh command failed");
            let detail = if !stderr.is_empty() {
                stderr
            } else if !stdout.is_empty() {
                stdout
            } else {
                DEFAULT_ERROR_MESSAGE.to_string()
            };
            return Err(GhError::CommandFailed {
                code,
                stderr: detail,
            });
        }

        Ok(stdout)
    }
}

#[async_trait]
impl GhRunner for GhExecutor {
    async fn run(&self, args: &[String]) -> GhResult<String> {
        self.execute(args).await
    }
}

/// Check that gh is runnable and a credential is available.
///
/// Used as a startup sanity check; tool calls report their own errors.
pub async fn check_gh_available() -> GhResult<()> {
    let executor = GhExecutor::new();
    executor
        .execute(&["auth".to_string(), "status".to_string()])
        .await
        .map(|_| ())
}
