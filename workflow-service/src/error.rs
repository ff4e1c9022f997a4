// Service error types
// Fatal structural errors surface here; step-level failures are recorded
// in the run context instead.

use thiserror::Error;

/// Errors returned by the workflow service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The job graph contains a cycle. Names the job at which the cycle
    /// was re-entered during traversal.
    #[error("cyclic job dependency at '{0}'")]
    CyclicDependency(String),

    /// A step references an executor type with no registered runner.
    #[error("unknown step executor '{0}'")]
    UnknownExecutor(String),

    /// Semantic validation failure (empty jobs, bad references, etc.)
    #[error("invalid workflow: {0}")]
    InvalidInput(String),

    /// File could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid YAML
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience result alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
