// Run context
// The accumulating state of one workflow execution, owned exclusively
// by the executor. Expressions only ever see immutable snapshots built
// here.

use crate::expression::{ExpressionContext, Value};

use indexmap::IndexMap;

/// The result of a single step, sealed once the runner returns.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// Step name (unique within its job)
    pub name: String,
    /// Whether the runner reported success
    pub success: bool,
    /// Runner-specific result payload
    pub result: Option<Value>,
    /// Error message, when the runner failed outright
    pub error: Option<String>,
}

/// The result of a single job, sealed when the job finishes or is
/// abandoned.
#[derive(Debug, Clone, Default)]
pub struct JobOutcome {
    /// False once any step errors
    pub success: bool,
    /// True when the job's guard condition evaluated false
    pub skipped: bool,
    /// Step results, in execution order; a duplicate step name
    /// overwrites the earlier entry
    pub steps: IndexMap<String, StepOutcome>,
    /// Captured outputs (step bindings first, job bindings merged over)
    pub outputs: IndexMap<String, Value>,
}

impl JobOutcome {
    /// A fresh in-progress outcome.
    pub fn started() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// An outcome for a job whose guard evaluated false.
    pub fn skipped() -> Self {
        Self {
            success: true,
            skipped: true,
            ..Self::default()
        }
    }

    fn to_value(&self) -> Value {
        let mut map = IndexMap::new();
        map.insert("success".to_string(), Value::Bool(self.success));
        map.insert("skipped".to_string(), Value::Bool(self.skipped));
        map.insert("steps".to_string(), steps_to_value(&self.steps));
        map.insert(
            "outputs".to_string(),
            Value::Object(self.outputs.clone()),
        );
        Value::Object(map)
    }
}

impl StepOutcome {
    fn to_value(&self) -> Value {
        let mut map = IndexMap::new();
        map.insert("name".to_string(), Value::from(self.name.clone()));
        map.insert("success".to_string(), Value::Bool(self.success));
        map.insert(
            "result".to_string(),
            self.result.clone().unwrap_or(Value::Null),
        );
        if let Some(error) = &self.error {
            map.insert("error".to_string(), Value::from(error.clone()));
        }
        Value::Object(map)
    }
}

/// The full mutable state of one workflow execution.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Merged environment: process snapshot overridden by document env
    pub env: IndexMap<String, String>,
    /// Run inputs (document defaults overridden at invocation)
    pub inputs: IndexMap<String, Value>,
    /// Job results, in completion order
    pub jobs: IndexMap<String, JobOutcome>,
}

impl RunContext {
    /// Whether every recorded job succeeded.
    pub fn success(&self) -> bool {
        self.jobs.values().all(|job| job.success)
    }

    /// Snapshot for document-level evaluation (job guards): document
    /// env, inputs, completed jobs, no step scope.
    pub fn snapshot(&self) -> ExpressionContext {
        self.scoped_snapshot(&self.env, None, None)
    }

    /// Snapshot for job-scoped evaluation.
    ///
    /// `steps` is the currently-running job's result map, re-read on
    /// every evaluation so later steps observe earlier results.
    /// `current` additionally exposes the in-progress job outcome under
    /// its own id (used by step output bindings, which may reference
    /// their own job's running outputs).
    pub fn scoped_snapshot(
        &self,
        env: &IndexMap<String, String>,
        steps: Option<&IndexMap<String, StepOutcome>>,
        current: Option<(&str, &JobOutcome)>,
    ) -> ExpressionContext {
        let mut jobs = IndexMap::new();
        for (id, outcome) in &self.jobs {
            jobs.insert(id.clone(), outcome.to_value());
        }
        if let Some((id, outcome)) = current {
            jobs.insert(id.to_string(), outcome.to_value());
        }

        ExpressionContext {
            env: env_to_value(env),
            inputs: Value::Object(self.inputs.clone()),
            jobs: Value::Object(jobs),
            steps: steps.map(steps_to_value).unwrap_or_else(|| {
                Value::Object(IndexMap::new())
            }),
        }
    }
}

fn env_to_value(env: &IndexMap<String, String>) -> Value {
    Value::Object(
        env.iter()
            .map(|(k, v)| (k.clone(), Value::from(v.clone())))
            .collect(),
    )
}

fn steps_to_value(steps: &IndexMap<String, StepOutcome>) -> Value {
    Value::Object(
        steps
            .iter()
            .map(|(name, outcome)| (name.clone(), outcome.to_value()))
            .collect(),
    )
}
