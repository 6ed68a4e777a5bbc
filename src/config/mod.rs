//! Tool parameter configuration and resolution
//!
//! Every optional tool parameter resolves through the same chain: the
//! runtime value from the MCP request, then a declared environment
//! variable, then a static default.

pub mod resolver;
pub mod spec;

pub use resolver::{EnvSource, MapEnv, ParamResolver, ProcessEnv};
pub use spec::{DefaultValue, ParamKind, ParamSpec, ParamValue, TOOL_PARAM_SPECS};
