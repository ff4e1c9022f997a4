// Execution Module
// Dependency resolution, run-state accumulation, progress events, and
// the workflow executor itself.

pub mod context;
pub mod events;
pub mod executor;
pub mod graph;

pub use context::{JobOutcome, RunContext, StepOutcome};
pub use events::{
    progress_channel, EventSender, ExecutionEvent, ProgressReceiver, ProgressSender,
};
pub use executor::WorkflowExecutor;
pub use graph::resolve_order;
