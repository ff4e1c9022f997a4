// Workflow Service Library
// Core engine for parsing and executing declarative workflow documents

pub mod error;
pub mod execution;
pub mod expression;
pub mod runners;
pub mod workflow;

// Re-export commonly used types
pub use error::{ServiceError, ServiceResult};

// Re-export workflow document types
pub use workflow::{Job, JobNeeds, Step, Workflow, WorkflowParser};

// Re-export expression types
pub use expression::{evaluate, evaluate_condition, render, render_str, ExpressionContext, Value};

// Re-export execution types
pub use execution::{
    progress_channel, resolve_order, EventSender, ExecutionEvent, JobOutcome, ProgressReceiver,
    ProgressSender, RunContext, StepOutcome, WorkflowExecutor,
};

// Re-export runner types
pub use runners::{
    AgentRunner, HttpRunner, Runner, RunnerError, RunnerOutcome, RunnerRegistry, ShellRunner,
};
