use crate::execution::graph::resolve_order;
use crate::workflow::models::Workflow;
use crate::{ServiceError, ServiceResult};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parser for workflow YAML files.
pub struct WorkflowParser;

impl WorkflowParser {
    /// Parse a workflow from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ServiceResult<Workflow> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a workflow from a YAML string.
    pub fn parse(content: &str) -> ServiceResult<Workflow> {
        let workflow: Workflow = serde_yaml::from_str(content)?;
        Ok(workflow)
    }

    /// Parse and validate a workflow from a YAML string.
    pub fn parse_and_validate(content: &str) -> ServiceResult<Workflow> {
        let workflow = Self::parse(content)?;
        Self::validate(&workflow)?;
        Ok(workflow)
    }

    /// Validate a parsed workflow for semantic correctness.
    ///
    /// Stricter than execution: running a workflow tolerates unknown
    /// `needs` references and duplicate step names (see the resolver
    /// and engine docs), but `validate` reports them so authors get a
    /// diagnostic before a run silently does the tolerant thing.
    pub fn validate(workflow: &Workflow) -> ServiceResult<()> {
        // Validate job dependencies exist
        for (job_id, job) in &workflow.jobs {
            for needed_job in job.needs.to_vec() {
                if !workflow.jobs.contains_key(&needed_job) {
                    return Err(ServiceError::InvalidInput(format!(
                        "job '{}' depends on non-existent job '{}'",
                        job_id, needed_job
                    )));
                }
            }
        }

        // Validate no circular dependencies
        resolve_order(&workflow.jobs)?;

        // Validate each job has at least one step
        for (job_id, job) in &workflow.jobs {
            if job.steps.is_empty() {
                return Err(ServiceError::InvalidInput(format!(
                    "job '{}' has no steps",
                    job_id
                )));
            }
        }

        // Validate step names are unique within their job and tagged
        // with an executor type
        for (job_id, job) in &workflow.jobs {
            let mut seen = HashSet::new();
            for step in &job.steps {
                if step.name.is_empty() {
                    return Err(ServiceError::InvalidInput(format!(
                        "job '{}' has a step with an empty name",
                        job_id
                    )));
                }
                if !seen.insert(step.name.as_str()) {
                    return Err(ServiceError::InvalidInput(format!(
                        "job '{}' has duplicate step name '{}'",
                        job_id, step.name
                    )));
                }
                if step.uses.is_empty() {
                    return Err(ServiceError::InvalidInput(format!(
                        "step '{}' in job '{}' has an empty 'uses' tag",
                        step.name, job_id
                    )));
                }
            }
        }

        Ok(())
    }
}
