// Workflow document model and parser

pub mod models;
pub mod parser;

pub use models::{Job, JobNeeds, Step, Workflow};
pub use parser::WorkflowParser;
