// Workflow Executor
// Orchestrates job and step execution: guard evaluation, parameter
// rendering, runner dispatch, output capture, and failure propagation.

use crate::execution::context::{JobOutcome, RunContext, StepOutcome};
use crate::execution::events::{EventSender, ExecutionEvent, ProgressSender};
use crate::execution::graph::resolve_order;
use crate::expression::{evaluate, evaluate_condition, render, strip_template_delimiter, Value};
use crate::runners::{Params, RunnerRegistry};
use crate::workflow::models::{Job, Workflow};
use crate::{ServiceError, ServiceResult};

use indexmap::IndexMap;
use std::time::Instant;

/// Executes workflow documents against a runner registry.
///
/// Jobs run strictly one at a time in resolved dependency order; steps
/// run strictly one at a time in document order. A step's result is
/// fully recorded before the next evaluation happens, so expressions
/// never observe a partially-written state.
pub struct WorkflowExecutor {
    registry: RunnerRegistry,
    /// Process-level environment snapshot. Injected explicitly rather
    /// than read ambiently, so runs are reproducible under test.
    process_env: IndexMap<String, String>,
    event_tx: Option<ProgressSender>,
}

impl WorkflowExecutor {
    /// Create an executor over a runner registry.
    pub fn new(registry: RunnerRegistry) -> Self {
        Self {
            registry,
            process_env: IndexMap::new(),
            event_tx: None,
        }
    }

    /// Set the process-level environment snapshot (lowest merge
    /// priority, below document and job env).
    pub fn with_process_env(mut self, env: IndexMap<String, String>) -> Self {
        self.process_env = env;
        self
    }

    /// Set progress event sender
    pub fn with_progress(mut self, tx: ProgressSender) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// Execute a workflow.
    ///
    /// Returns the accumulated [`RunContext`]; step and job failures
    /// are recorded there, not raised. Only the two structural errors
    /// escape: [`ServiceError::CyclicDependency`] (before anything
    /// runs) and [`ServiceError::UnknownExecutor`] (aborting the run at
    /// the offending step).
    pub async fn run(
        &self,
        workflow: &Workflow,
        inputs: IndexMap<String, Value>,
    ) -> ServiceResult<RunContext> {
        let start = Instant::now();
        let order = resolve_order(&workflow.jobs)?;

        let mut ctx = RunContext::default();
        ctx.env = self.process_env.clone();
        ctx.env
            .extend(workflow.env.iter().map(|(k, v)| (k.clone(), v.clone())));
        // Document defaults first, invocation inputs override
        ctx.inputs = workflow
            .inputs
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(v)))
            .collect();
        ctx.inputs.extend(inputs);

        let workflow_name = workflow.name.clone().unwrap_or_else(|| "workflow".to_string());
        self.event_tx.send_event(ExecutionEvent::WorkflowStarted {
            workflow_name: workflow_name.clone(),
            total_jobs: order.len(),
        });

        for job_id in &order {
            // The resolver only emits ids present in the document
            let Some(job) = workflow.jobs.get(job_id) else {
                continue;
            };

            // Job guard sees the document-level env, not job overrides
            if let Some(condition) = &job.if_condition {
                if !evaluate_condition(condition, &ctx.snapshot()) {
                    self.event_tx.send_event(ExecutionEvent::JobSkipped {
                        job_id: job_id.clone(),
                    });
                    ctx.jobs.insert(job_id.clone(), JobOutcome::skipped());
                    continue;
                }
            }

            self.execute_job(job_id, job, &mut ctx).await?;

            // Whole-run short-circuit: any failed job stops everything
            // that follows, dependent or not
            if !ctx.jobs[job_id.as_str()].success {
                break;
            }
        }

        self.event_tx.send_event(ExecutionEvent::WorkflowCompleted {
            workflow_name,
            success: ctx.success(),
            duration: start.elapsed(),
        });

        Ok(ctx)
    }

    async fn execute_job(
        &self,
        job_id: &str,
        job: &Job,
        ctx: &mut RunContext,
    ) -> ServiceResult<()> {
        let job_start = Instant::now();

        let mut job_env = ctx.env.clone();
        job_env.extend(job.env.iter().map(|(k, v)| (k.clone(), v.clone())));

        self.event_tx.send_event(ExecutionEvent::JobStarted {
            job_id: job_id.to_string(),
            total_steps: job.steps.len(),
        });

        let mut outcome = JobOutcome::started();

        for (step_index, step) in job.steps.iter().enumerate() {
            // Step guard sees completed jobs plus this job's steps so far
            if let Some(condition) = &step.if_condition {
                let snapshot = ctx.scoped_snapshot(&job_env, Some(&outcome.steps), None);
                if !evaluate_condition(condition, &snapshot) {
                    self.event_tx.send_event(ExecutionEvent::StepSkipped {
                        job_id: job_id.to_string(),
                        step_name: step.name.clone(),
                        step_index,
                    });
                    continue;
                }
            }

            let snapshot = ctx.scoped_snapshot(&job_env, Some(&outcome.steps), None);
            let rendered: Params = step
                .with
                .iter()
                .map(|(k, v)| (k.clone(), render(v, &snapshot)))
                .collect();

            // An unregistered type tag is fatal for the whole run
            let runner = self
                .registry
                .get(&step.uses)
                .ok_or_else(|| ServiceError::UnknownExecutor(step.uses.clone()))?;

            self.event_tx.send_event(ExecutionEvent::StepStarted {
                job_id: job_id.to_string(),
                step_name: step.name.clone(),
                step_index,
            });
            let step_start = Instant::now();

            match runner.execute(&rendered, &job_env).await {
                Ok(result) => {
                    self.event_tx.send_event(ExecutionEvent::StepCompleted {
                        job_id: job_id.to_string(),
                        step_name: step.name.clone(),
                        step_index,
                        success: result.success,
                        duration: step_start.elapsed(),
                        error: None,
                    });
                    outcome.steps.insert(
                        step.name.clone(),
                        StepOutcome {
                            name: step.name.clone(),
                            success: result.success,
                            result: result.result.map(Value::from),
                            error: None,
                        },
                    );

                    // Output bindings may reference this job's own
                    // in-progress results, so expose it under its id
                    if !step.outputs.is_empty() {
                        let snapshot = ctx.scoped_snapshot(
                            &job_env,
                            Some(&outcome.steps),
                            Some((job_id, &outcome)),
                        );
                        let captured = evaluate_bindings(&step.outputs, &snapshot);
                        for (name, value) in captured {
                            match value {
                                Some(value) => {
                                    self.event_tx.send_event(ExecutionEvent::OutputCaptured {
                                        job_id: job_id.to_string(),
                                        name: name.clone(),
                                        value: value.as_string(),
                                    });
                                    outcome.outputs.insert(name, value);
                                }
                                None => {
                                    outcome.outputs.shift_remove(&name);
                                }
                            }
                        }
                    }
                }
                Err(err) => {
                    // Fail fast within the job: record, mark, stop
                    let message = err.to_string();
                    self.event_tx.send_event(ExecutionEvent::StepCompleted {
                        job_id: job_id.to_string(),
                        step_name: step.name.clone(),
                        step_index,
                        success: false,
                        duration: step_start.elapsed(),
                        error: Some(message.clone()),
                    });
                    outcome.steps.insert(
                        step.name.clone(),
                        StepOutcome {
                            name: step.name.clone(),
                            success: false,
                            result: None,
                            error: Some(message),
                        },
                    );
                    outcome.success = false;
                    break;
                }
            }
        }

        let success = outcome.success;
        ctx.jobs.insert(job_id.to_string(), outcome);

        // Job-level outputs evaluate against the sealed job and merge
        // over anything individual steps captured
        if !job.outputs.is_empty() {
            let steps = ctx.jobs[job_id].steps.clone();
            let snapshot = ctx.scoped_snapshot(&job_env, Some(&steps), None);
            let captured = evaluate_bindings(&job.outputs, &snapshot);
            let outputs = &mut ctx
                .jobs
                .get_mut(job_id)
                .expect("job recorded above")
                .outputs;
            for (name, value) in captured {
                match value {
                    Some(value) => {
                        self.event_tx.send_event(ExecutionEvent::OutputCaptured {
                            job_id: job_id.to_string(),
                            name: name.clone(),
                            value: value.as_string(),
                        });
                        outputs.insert(name, value);
                    }
                    None => {
                        outputs.shift_remove(&name);
                    }
                }
            }
        }

        self.event_tx.send_event(ExecutionEvent::JobCompleted {
            job_id: job_id.to_string(),
            success,
            duration: job_start.elapsed(),
        });

        Ok(())
    }
}

/// Evaluate a set of output bindings. `None` means the binding
/// evaluated to undefined; the caller clears any previously captured
/// value of that name, so a later binding can shadow an earlier one
/// with nothing.
fn evaluate_bindings(
    bindings: &IndexMap<String, String>,
    snapshot: &crate::expression::ExpressionContext,
) -> Vec<(String, Option<Value>)> {
    bindings
        .iter()
        .map(|(name, expr)| {
            (
                name.clone(),
                evaluate(strip_template_delimiter(expr), snapshot),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::events::progress_channel;
    use crate::runners::{Runner, RunnerError, RunnerOutcome};
    use crate::workflow::WorkflowParser;
    use std::sync::Arc;

    /// Succeeds and echoes its rendered parameters back as the result.
    struct EchoRunner;

    #[async_trait::async_trait]
    impl Runner for EchoRunner {
        async fn execute(
            &self,
            params: &Params,
            env: &IndexMap<String, String>,
        ) -> Result<RunnerOutcome, RunnerError> {
            let mut result = serde_json::Map::new();
            for (k, v) in params {
                result.insert(k.clone(), v.clone());
            }
            if let Some(key) = params.get("read_env").and_then(|v| v.as_str()) {
                result.insert(
                    "env_value".to_string(),
                    serde_json::Value::String(env.get(key).cloned().unwrap_or_default()),
                );
            }
            Ok(RunnerOutcome::new(true, serde_json::Value::Object(result)))
        }
    }

    /// Fails outright, the way a crashed process or network error does.
    struct CrashRunner;

    #[async_trait::async_trait]
    impl Runner for CrashRunner {
        async fn execute(
            &self,
            _params: &Params,
            _env: &IndexMap<String, String>,
        ) -> Result<RunnerOutcome, RunnerError> {
            Err(RunnerError::Execution("runner crashed".to_string()))
        }
    }

    /// Completes but reports failure, like a non-zero exit code.
    struct SoftFailRunner;

    #[async_trait::async_trait]
    impl Runner for SoftFailRunner {
        async fn execute(
            &self,
            _params: &Params,
            _env: &IndexMap<String, String>,
        ) -> Result<RunnerOutcome, RunnerError> {
            Ok(RunnerOutcome::new(
                false,
                serde_json::json!({ "exit_code": 1 }),
            ))
        }
    }

    fn test_registry() -> RunnerRegistry {
        let mut registry = RunnerRegistry::new();
        registry.register("echo", Arc::new(EchoRunner));
        registry.register("crash", Arc::new(CrashRunner));
        registry.register("soft-fail", Arc::new(SoftFailRunner));
        registry
    }

    fn executor() -> WorkflowExecutor {
        WorkflowExecutor::new(test_registry())
    }

    fn parse(yaml: &str) -> Workflow {
        WorkflowParser::parse(yaml).unwrap()
    }

    #[tokio::test]
    async fn test_single_job_success() {
        let workflow = parse(
            r#"
name: simple
jobs:
  greet:
    steps:
      - name: hello
        uses: echo
        with:
          message: hi
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        assert!(ctx.success());
        let job = &ctx.jobs["greet"];
        assert!(job.success);
        assert!(!job.skipped);
        let step = &job.steps["hello"];
        assert!(step.success);
        assert_eq!(
            step.result.as_ref().unwrap().get("message"),
            Some(&Value::from("hi"))
        );
    }

    #[tokio::test]
    async fn test_step_error_fails_job_and_skips_dependents() {
        let workflow = parse(
            r#"
jobs:
  build:
    steps:
      - name: compile
        uses: echo
      - name: explode
        uses: crash
      - name: unreachable
        uses: echo
  deploy:
    needs: build
    steps:
      - name: ship
        uses: echo
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        assert!(!ctx.success());
        let build = &ctx.jobs["build"];
        assert!(!build.success);
        assert!(build.steps["compile"].success);
        let failed = &build.steps["explode"];
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("runner crashed"));
        // fail-fast: the third step never ran
        assert!(!build.steps.contains_key("unreachable"));
        // whole-run short-circuit: deploy has no outcome at all
        assert!(!ctx.jobs.contains_key("deploy"));
    }

    #[tokio::test]
    async fn test_failed_job_stops_independent_jobs_too() {
        let workflow = parse(
            r#"
jobs:
  first:
    steps:
      - name: boom
        uses: crash
  second:
    steps:
      - name: fine
        uses: echo
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        assert!(!ctx.success());
        assert!(ctx.jobs.contains_key("first"));
        assert!(!ctx.jobs.contains_key("second"));
    }

    #[tokio::test]
    async fn test_soft_failure_does_not_fail_the_job() {
        let workflow = parse(
            r#"
jobs:
  lint:
    steps:
      - name: check
        uses: soft-fail
      - name: report
        uses: echo
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        // A reported failure is recorded on the step but, absent an
        // error, execution continues and the job still counts as
        // successful
        assert!(ctx.success());
        let lint = &ctx.jobs["lint"];
        assert!(lint.success);
        assert!(!lint.steps["check"].success);
        assert!(lint.steps["check"].error.is_none());
        assert!(lint.steps["report"].success);
    }

    #[tokio::test]
    async fn test_job_guard_skips_job() {
        let workflow = parse(
            r#"
jobs:
  deploy:
    if: ${{ inputs.deploy }}
    steps:
      - name: ship
        uses: echo
  notify:
    steps:
      - name: ping
        uses: echo
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        assert!(ctx.success());
        let deploy = &ctx.jobs["deploy"];
        assert!(deploy.skipped);
        assert!(deploy.success);
        assert!(deploy.steps.is_empty());
        // execution proceeded past the skip
        assert!(ctx.jobs["notify"].steps["ping"].success);
    }

    #[tokio::test]
    async fn test_job_guard_honors_inputs() {
        let workflow = parse(
            r#"
jobs:
  deploy:
    if: ${{ inputs.deploy }}
    steps:
      - name: ship
        uses: echo
"#,
        );
        let mut inputs = IndexMap::new();
        inputs.insert("deploy".to_string(), Value::from("yes"));
        let ctx = executor().run(&workflow, inputs).await.unwrap();

        assert!(!ctx.jobs["deploy"].skipped);
        assert!(ctx.jobs["deploy"].steps["ship"].success);
    }

    #[tokio::test]
    async fn test_step_guard_skips_step() {
        let workflow = parse(
            r#"
jobs:
  work:
    steps:
      - name: always
        uses: echo
      - name: never
        if: ${{ env.MISSING }}
        uses: echo
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        assert!(ctx.success());
        let work = &ctx.jobs["work"];
        assert!(work.success);
        assert!(work.steps.contains_key("always"));
        // skipped step leaves no outcome behind
        assert!(!work.steps.contains_key("never"));
    }

    #[tokio::test]
    async fn test_unknown_executor_is_fatal() {
        let workflow = parse(
            r#"
jobs:
  broken:
    steps:
      - name: mystery
        uses: teleport
"#,
        );
        let err = executor()
            .run(&workflow, IndexMap::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::UnknownExecutor(tag) if tag == "teleport"));
    }

    #[tokio::test]
    async fn test_outputs_flow_between_jobs() {
        let workflow = parse(
            r#"
jobs:
  produce:
    steps:
      - name: make
        uses: echo
        with:
          artifact: widget-7
        outputs:
          artifact: ${{ jobs.produce.steps.make.result.artifact }}
  consume:
    needs: produce
    steps:
      - name: take
        uses: echo
        with:
          item: ${{ jobs.produce.outputs.artifact }}
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        assert!(ctx.success());
        assert_eq!(
            ctx.jobs["produce"].outputs.get("artifact"),
            Some(&Value::from("widget-7"))
        );
        assert_eq!(
            ctx.jobs["consume"].steps["take"]
                .result
                .as_ref()
                .unwrap()
                .get("item"),
            Some(&Value::from("widget-7"))
        );
    }

    #[tokio::test]
    async fn test_job_outputs_merge_over_step_outputs() {
        let workflow = parse(
            r#"
jobs:
  build:
    outputs:
      version: ${{ steps.stamp.result.version }}
    steps:
      - name: stamp
        uses: echo
        with:
          version: "2.0"
        outputs:
          version: ${{ jobs.build.steps.stamp.result.artifact }}
          extra: ${{ jobs.build.steps.stamp.result.version }}
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        let outputs = &ctx.jobs["build"].outputs;
        // job binding wins over the step binding of the same name
        assert_eq!(outputs.get("version"), Some(&Value::from("2.0")));
        // step-only bindings survive the merge
        assert_eq!(outputs.get("extra"), Some(&Value::from("2.0")));
    }

    #[tokio::test]
    async fn test_duplicate_step_name_overwrites_earlier_result() {
        let workflow = parse(
            r#"
jobs:
  build:
    steps:
      - name: twice
        uses: echo
        with:
          which: first
      - name: twice
        uses: echo
        with:
          which: second
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        // Duplicate names are rejected by validate but tolerated at run
        // time: the later result silently replaces the earlier one
        assert!(ctx.success());
        let build = &ctx.jobs["build"];
        assert!(build.success);
        assert_eq!(build.steps.len(), 1);
        assert_eq!(
            build.steps["twice"].result.as_ref().unwrap().get("which"),
            Some(&Value::from("second"))
        );
    }

    #[tokio::test]
    async fn test_undefined_job_output_clears_step_capture() {
        let workflow = parse(
            r#"
jobs:
  build:
    outputs:
      version: ${{ steps.stamp.result.missing }}
    steps:
      - name: stamp
        uses: echo
        with:
          version: "1.0"
        outputs:
          version: ${{ jobs.build.steps.stamp.result.version }}
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        // The job-level binding evaluates to undefined and shadows the
        // value the step captured, leaving nothing behind
        assert!(ctx.success());
        assert!(!ctx.jobs["build"].outputs.contains_key("version"));
    }

    #[tokio::test]
    async fn test_later_steps_see_earlier_results() {
        let workflow = parse(
            r#"
jobs:
  chain:
    steps:
      - name: first
        uses: echo
        with:
          token: abc123
      - name: second
        uses: echo
        with:
          forwarded: ${{ steps.first.result.token }}
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        assert_eq!(
            ctx.jobs["chain"].steps["second"]
                .result
                .as_ref()
                .unwrap()
                .get("forwarded"),
            Some(&Value::from("abc123"))
        );
    }

    #[tokio::test]
    async fn test_missing_needs_reference_is_tolerated() {
        let workflow = parse(
            r#"
jobs:
  orphan:
    needs: does-not-exist
    steps:
      - name: run
        uses: echo
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        assert!(ctx.success());
        assert!(ctx.jobs["orphan"].steps["run"].success);
    }

    #[tokio::test]
    async fn test_env_merge_priority() {
        let workflow = parse(
            r#"
env:
  SHARED: doc
  DOC_ONLY: doc
jobs:
  work:
    env:
      SHARED: job
    steps:
      - name: probe
        uses: echo
        with:
          read_env: SHARED
          doc_only: ${{ env.DOC_ONLY }}
"#,
        );
        let mut process_env = IndexMap::new();
        process_env.insert("SHARED".to_string(), "process".to_string());
        process_env.insert("PROC_ONLY".to_string(), "process".to_string());

        let executor = WorkflowExecutor::new(test_registry()).with_process_env(process_env);
        let ctx = executor.run(&workflow, IndexMap::new()).await.unwrap();

        let result = ctx.jobs["work"].steps["probe"].result.as_ref().unwrap();
        // job env overrides document env, which overrides process env
        assert_eq!(result.get("env_value"), Some(&Value::from("job")));
        assert_eq!(result.get("doc_only"), Some(&Value::from("doc")));
        // document-level expressions never see job overrides
        assert_eq!(ctx.env.get("SHARED").map(String::as_str), Some("doc"));
        assert_eq!(ctx.env.get("PROC_ONLY").map(String::as_str), Some("process"));
    }

    #[tokio::test]
    async fn test_input_defaults_and_overrides() {
        let workflow = parse(
            r#"
inputs:
  region: us-east-1
  retries: 3
jobs:
  work:
    steps:
      - name: probe
        uses: echo
        with:
          region: ${{ inputs.region }}
          retries: ${{ inputs.retries }}
"#,
        );
        let mut inputs = IndexMap::new();
        inputs.insert("region".to_string(), Value::from("eu-west-1"));
        let ctx = executor().run(&workflow, inputs).await.unwrap();

        let result = ctx.jobs["work"].steps["probe"].result.as_ref().unwrap();
        assert_eq!(result.get("region"), Some(&Value::from("eu-west-1")));
        // interpolation stringifies, integral numbers without the .0
        assert_eq!(result.get("retries"), Some(&Value::from("3")));
    }

    #[tokio::test]
    async fn test_fallback_chain_in_parameters() {
        let workflow = parse(
            r#"
jobs:
  work:
    steps:
      - name: probe
        uses: echo
        with:
          target: ${{ inputs.target || env.TARGET || 'default-target' }}
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        assert_eq!(
            ctx.jobs["work"].steps["probe"]
                .result
                .as_ref()
                .unwrap()
                .get("target"),
            Some(&Value::from("default-target"))
        );
    }

    #[tokio::test]
    async fn test_progress_events_emitted_in_order() {
        let workflow = parse(
            r#"
name: eventful
jobs:
  only:
    steps:
      - name: solo
        uses: echo
"#,
        );
        let (tx, mut rx) = progress_channel();
        let executor = WorkflowExecutor::new(test_registry()).with_progress(tx);
        executor.run(&workflow, IndexMap::new()).await.unwrap();

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }

        assert!(matches!(
            &events[0],
            ExecutionEvent::WorkflowStarted { workflow_name, total_jobs: 1 }
                if workflow_name == "eventful"
        ));
        assert!(matches!(
            &events[1],
            ExecutionEvent::JobStarted { job_id, total_steps: 1 } if job_id == "only"
        ));
        assert!(matches!(
            &events[2],
            ExecutionEvent::StepStarted { step_name, .. } if step_name == "solo"
        ));
        assert!(matches!(
            &events[3],
            ExecutionEvent::StepCompleted { success: true, .. }
        ));
        assert!(matches!(
            &events[4],
            ExecutionEvent::JobCompleted { success: true, .. }
        ));
        assert!(matches!(
            &events[5],
            ExecutionEvent::WorkflowCompleted { success: true, .. }
        ));
    }

    #[tokio::test]
    async fn test_jobs_run_in_dependency_order() {
        let workflow = parse(
            r#"
jobs:
  c:
    needs: [a, b]
    steps:
      - name: s
        uses: echo
  a:
    steps:
      - name: s
        uses: echo
  b:
    needs: a
    steps:
      - name: s
        uses: echo
"#,
        );
        let ctx = executor().run(&workflow, IndexMap::new()).await.unwrap();

        let order: Vec<&String> = ctx.jobs.keys().collect();
        assert_eq!(order, ["a", "b", "c"]);
    }
}
