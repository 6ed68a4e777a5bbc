//! gh CLI wrapper module
//!
//! Credential resolution, process execution, error classification, and
//! output normalization for `gh` invocations.

pub mod error;
pub mod executor;
pub mod normalize;

pub use error::{ErrorEnvelope, GhError, GhResult};
pub use executor::{check_gh_available, GhExecutor, GhRunner, COMMAND_TIMEOUT_VAR};
pub use normalize::{normalize, OutputShape, Payload};
