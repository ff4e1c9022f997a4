// Execution Events
// Progress reporting for workflow execution. The engine emits events on
// an unbounded channel; whoever holds the receiver (the CLI) renders
// them. Sends are fire-and-forget so a dropped receiver never stalls a
// run.

use std::time::Duration;
use tokio::sync::mpsc;

/// Sender for execution progress events
pub type ProgressSender = mpsc::UnboundedSender<ExecutionEvent>;

/// Receiver for execution progress events
pub type ProgressReceiver = mpsc::UnboundedReceiver<ExecutionEvent>;

/// Create a new progress channel
pub fn progress_channel() -> (ProgressSender, ProgressReceiver) {
    mpsc::unbounded_channel()
}

/// Events emitted during workflow execution
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    /// Workflow execution started
    WorkflowStarted {
        workflow_name: String,
        total_jobs: usize,
    },

    /// Workflow execution completed (or short-circuited on failure)
    WorkflowCompleted {
        workflow_name: String,
        success: bool,
        duration: Duration,
    },

    /// Job execution started
    JobStarted { job_id: String, total_steps: usize },

    /// Job execution completed
    JobCompleted {
        job_id: String,
        success: bool,
        duration: Duration,
    },

    /// Job was skipped (guard condition evaluated false)
    JobSkipped { job_id: String },

    /// Step execution started
    StepStarted {
        job_id: String,
        step_name: String,
        step_index: usize,
    },

    /// Step execution completed
    StepCompleted {
        job_id: String,
        step_name: String,
        step_index: usize,
        success: bool,
        duration: Duration,
        error: Option<String>,
    },

    /// Step was skipped (guard condition evaluated false)
    StepSkipped {
        job_id: String,
        step_name: String,
        step_index: usize,
    },

    /// An output binding was captured
    OutputCaptured {
        job_id: String,
        name: String,
        value: String,
    },
}

/// Helper trait for sending events, ignoring errors (fire-and-forget)
pub trait EventSender {
    fn send_event(&self, event: ExecutionEvent);
}

impl EventSender for ProgressSender {
    fn send_event(&self, event: ExecutionEvent) {
        let _ = self.send(event);
    }
}

impl EventSender for Option<ProgressSender> {
    fn send_event(&self, event: ExecutionEvent) {
        if let Some(sender) = self {
            let _ = sender.send(event);
        }
    }
}
