// Runners Module
// Step executors behind a uniform contract, looked up by the step's
// `uses` type tag.

pub mod agent;
pub mod http;
pub mod shell;

// Re-export key types
pub use agent::AgentRunner;
pub use http::HttpRunner;
pub use shell::ShellRunner;

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Rendered step parameters, as handed to a runner.
pub type Params = IndexMap<String, Value>;

/// A failure raised by a runner.
///
/// Outcome-level failure (nonzero exit code, HTTP 500) is *not* an
/// error: runners report it through [`RunnerOutcome::success`] and the
/// job carries on. An error here fails the step and its job.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("{0}")]
    Execution(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// What a runner reports back on a completed execution.
#[derive(Debug, Clone)]
pub struct RunnerOutcome {
    /// The runner's own notion of success (exit code zero, 2xx status)
    pub success: bool,
    /// Runner-specific result payload
    pub result: Option<Value>,
}

impl RunnerOutcome {
    pub fn new(success: bool, result: Value) -> Self {
        Self {
            success,
            result: Some(result),
        }
    }
}

/// Trait for step runners
#[async_trait::async_trait]
pub trait Runner: Send + Sync {
    /// Execute a step with fully-rendered parameters and the merged
    /// environment of the enclosing job.
    async fn execute(
        &self,
        params: &Params,
        env: &IndexMap<String, String>,
    ) -> Result<RunnerOutcome, RunnerError>;
}

/// Runner registry: maps `uses` type tags to runner implementations.
pub struct RunnerRegistry {
    runners: HashMap<String, Arc<dyn Runner>>,
}

impl RunnerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            runners: HashMap::new(),
        }
    }

    /// Create a registry with the built-in runners registered under
    /// their canonical tags: `shell`, `http`, `agent`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("shell", Arc::new(ShellRunner::new()));
        registry.register("http", Arc::new(HttpRunner::new()));
        registry.register("agent", Arc::new(AgentRunner::new()));
        registry
    }

    /// Register a runner under a type tag, replacing any previous one.
    pub fn register(&mut self, tag: impl Into<String>, runner: Arc<dyn Runner>) {
        self.runners.insert(tag.into(), runner);
    }

    /// Look up the runner for a type tag.
    pub fn get(&self, tag: &str) -> Option<&Arc<dyn Runner>> {
        self.runners.get(tag)
    }

    /// Check whether a type tag has a registered runner.
    pub fn contains(&self, tag: &str) -> bool {
        self.runners.contains_key(tag)
    }
}

impl Default for RunnerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Fetch a parameter as a string, stringifying scalars the way template
/// output does. Null and absent both count as missing.
pub(crate) fn string_param(params: &Params, key: &str) -> Option<String> {
    match params.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Fetch a numeric parameter, accepting numeric strings.
pub(crate) fn number_param(params: &Params, key: &str) -> Option<f64> {
    match params.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
