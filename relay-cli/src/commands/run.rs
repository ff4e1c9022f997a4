use crate::output;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use color_eyre::Result;
use indexmap::IndexMap;

use workflow_service::{
    progress_channel, ExecutionEvent, RunnerRegistry, ShellRunner, Value, WorkflowExecutor,
    WorkflowParser,
};

/// Run a workflow
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the workflow YAML file
    pub workflow: PathBuf,

    /// Workflow inputs (format: name=value)
    #[arg(value_name = "NAME=VALUE")]
    pub inputs: Vec<String>,

    /// Working directory for shell steps
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Suppress progress output, print only the final summary
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub async fn execute(args: RunArgs) -> Result<()> {
    let workflow_path = &args.workflow;

    if !workflow_path.exists() {
        color_eyre::eyre::bail!("Workflow file not found: {}", workflow_path.display());
    }

    // Parse inputs from trailing name=value arguments
    let mut inputs = IndexMap::new();
    for input_str in &args.inputs {
        if let Some((name, value)) = input_str.split_once('=') {
            inputs.insert(name.to_string(), Value::from(value));
        } else {
            color_eyre::eyre::bail!("Invalid input format '{}'. Expected name=value", input_str);
        }
    }

    output::status("Parsing", &format!("{}", workflow_path.display()));
    let workflow = WorkflowParser::from_file(workflow_path)
        .map_err(|e| color_eyre::eyre::eyre!("Parse error: {}", e))?;

    let workflow_name = workflow.name.clone().unwrap_or_else(|| {
        workflow_path
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or("workflow")
            .to_string()
    });

    let jobs_count = workflow.jobs.len();
    let steps_count: usize = workflow.jobs.values().map(|j| j.steps.len()).sum();
    output::info(&format!(
        "Workflow '{}': {} jobs, {} steps",
        workflow_name, jobs_count, steps_count
    ));

    // Shell steps run from --cwd when given, the invocation dir otherwise
    let mut registry = RunnerRegistry::with_defaults();
    if let Some(cwd) = &args.cwd {
        registry.register("shell", Arc::new(ShellRunner::new().with_working_dir(cwd)));
    }

    let process_env: IndexMap<String, String> = std::env::vars().collect();

    let (tx, mut rx) = progress_channel();
    let executor = WorkflowExecutor::new(registry)
        .with_process_env(process_env)
        .with_progress(tx);

    let exec_handle = tokio::spawn(async move { executor.run(&workflow, inputs).await });

    // Render events in the foreground while the run proceeds
    let quiet = args.quiet;
    let mut overall_success = true;
    while let Some(event) = rx.recv().await {
        if quiet {
            if let ExecutionEvent::WorkflowCompleted { success, .. } = &event {
                overall_success = *success;
            }
            continue;
        }
        match &event {
            ExecutionEvent::WorkflowStarted {
                workflow_name,
                total_jobs,
            } => {
                println!();
                output::header(&format!("Workflow '{}' ({} jobs)", workflow_name, total_jobs));
            }

            ExecutionEvent::WorkflowCompleted {
                success, duration, ..
            } => {
                println!();
                overall_success = *success;
                if *success {
                    output::success(&format!(
                        "Workflow completed successfully in {:.2}s",
                        duration.as_secs_f64()
                    ));
                } else {
                    output::failure(&format!(
                        "Workflow failed after {:.2}s",
                        duration.as_secs_f64()
                    ));
                }
            }

            ExecutionEvent::JobStarted { job_id, total_steps } => {
                println!("  Job '{}' ({} steps)", job_id, total_steps);
            }

            ExecutionEvent::JobCompleted {
                job_id,
                success,
                duration,
            } => {
                let line = format!(
                    "  Job '{}' {} ({:.2}s)",
                    job_id,
                    if *success { "OK" } else { "FAIL" },
                    duration.as_secs_f64()
                );
                if *success {
                    output::dim_success(&line);
                } else {
                    output::dim_failure(&line);
                }
            }

            ExecutionEvent::JobSkipped { job_id } => {
                output::warning(&format!("  Job '{}' skipped", job_id));
            }

            ExecutionEvent::StepStarted {
                step_name,
                step_index,
                ..
            } => {
                println!("    [Step {}] {}", step_index + 1, step_name);
            }

            ExecutionEvent::StepCompleted {
                success,
                duration,
                error,
                ..
            } => {
                if *success {
                    output::dim_success(&format!(
                        "      OK ({:.2}s)",
                        duration.as_secs_f64()
                    ));
                } else {
                    output::dim_failure(&format!(
                        "      FAIL ({:.2}s)",
                        duration.as_secs_f64()
                    ));
                }
                if let Some(error) = error {
                    output::error(&format!("      {}", error));
                }
            }

            ExecutionEvent::StepSkipped {
                step_name,
                step_index,
                ..
            } => {
                output::warning(&format!("    [Step {}] {} skipped", step_index + 1, step_name));
            }

            ExecutionEvent::OutputCaptured { job_id, name, value } => {
                output::dim(&format!("      output {}.{} = {}", job_id, name, value));
            }
        }
    }

    let ctx = exec_handle
        .await?
        .map_err(|e| color_eyre::eyre::eyre!("Execution error: {}", e))?;

    // Final summary
    println!();
    output::header("Results");
    for (job_id, job) in &ctx.jobs {
        let state = if job.skipped {
            "skipped"
        } else if job.success {
            "succeeded"
        } else {
            "failed"
        };
        println!("  {}: {}", job_id, state);
        for (step_name, step) in &job.steps {
            println!(
                "    - {}: {}",
                step_name,
                if step.success { "ok" } else { "error" }
            );
        }
        for (name, value) in &job.outputs {
            println!("    {} = {}", name, value.as_string());
        }
    }

    if !overall_success {
        std::process::exit(1);
    }
    Ok(())
}
