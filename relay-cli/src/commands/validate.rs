use crate::output;

use std::path::PathBuf;

use clap::Args;
use color_eyre::Result;

use workflow_service::{resolve_order, RunnerRegistry, WorkflowParser};

/// Validate a workflow YAML file
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the workflow YAML file
    pub workflow: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    let workflow_path = &args.workflow;

    if !workflow_path.exists() {
        color_eyre::eyre::bail!("Workflow file not found: {}", workflow_path.display());
    }

    output::status("Validating", &format!("{}", workflow_path.display()));

    let workflow = match WorkflowParser::from_file(workflow_path) {
        Ok(w) => w,
        Err(e) => {
            output::error(&format!("Parse error: {}", e));
            std::process::exit(1);
        }
    };
    output::check("YAML syntax valid");

    let jobs_count = workflow.jobs.len();
    let steps_count: usize = workflow.jobs.values().map(|j| j.steps.len()).sum();
    output::check(&format!(
        "Structure: {} jobs, {} steps",
        jobs_count, steps_count
    ));

    if let Err(e) = WorkflowParser::validate(&workflow) {
        output::error(&format!("{}", e));
        std::process::exit(1);
    }
    output::check("Semantic validation passed");

    // The registry is extensible at the library level, but this binary
    // only ever runs the built-ins, so flag anything else up front
    let registry = RunnerRegistry::with_defaults();
    let mut unknown_tags = false;
    for (job_id, job) in &workflow.jobs {
        for step in &job.steps {
            if !registry.contains(&step.uses) {
                output::error(&format!(
                    "step '{}' in job '{}' uses unknown executor '{}'",
                    step.name, job_id, step.uses
                ));
                unknown_tags = true;
            }
        }
    }
    if unknown_tags {
        std::process::exit(1);
    }
    output::check("All executor tags known");

    // Show the order jobs would execute in
    let order = resolve_order(&workflow.jobs)?;
    output::info(&format!("Execution order: {}", order.join(" -> ")));

    println!();
    output::success("Workflow is valid");

    Ok(())
}
