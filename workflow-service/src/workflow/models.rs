use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A declarative workflow definition.
///
/// This represents the top-level structure of a workflow YAML file.
/// Job order is preserved as written: the resolver uses document order
/// as the tie-breaker between independent jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    /// The name of the workflow
    #[serde(default)]
    pub name: Option<String>,

    /// Workflow-level environment variables
    #[serde(default)]
    pub env: IndexMap<String, String>,

    /// Default values for run inputs, overridable at invocation time
    #[serde(default)]
    pub inputs: IndexMap<String, Value>,

    /// The jobs that make up this workflow, keyed by job id
    pub jobs: IndexMap<String, Job>,
}

/// A job within a workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Display name for the job
    #[serde(default)]
    pub name: Option<String>,

    /// Jobs that must complete before this job runs
    #[serde(default)]
    pub needs: JobNeeds,

    /// Conditional expression gating job execution
    #[serde(default, rename = "if")]
    pub if_condition: Option<String>,

    /// Job-level environment variable overrides
    #[serde(default)]
    pub env: IndexMap<String, String>,

    /// The steps that make up this job, executed in document order
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Job outputs: name -> expression evaluated when the job finishes
    #[serde(default)]
    pub outputs: IndexMap<String, String>,
}

/// Job dependencies - can be a single string or a list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum JobNeeds {
    #[default]
    None,
    Single(String),
    Multiple(Vec<String>),
}

impl JobNeeds {
    /// Convert to a vector of job ids.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            JobNeeds::None => vec![],
            JobNeeds::Single(s) => vec![s.clone()],
            JobNeeds::Multiple(v) => v.clone(),
        }
    }

    /// Check if there are any dependencies.
    pub fn is_empty(&self) -> bool {
        match self {
            JobNeeds::None => true,
            JobNeeds::Single(_) => false,
            JobNeeds::Multiple(v) => v.is_empty(),
        }
    }
}

/// A step within a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Step name, unique within its job (used for result lookups)
    pub name: String,

    /// Conditional expression gating step execution
    #[serde(default, rename = "if")]
    pub if_condition: Option<String>,

    /// Executor type tag (e.g. "shell", "http", "agent")
    pub uses: String,

    /// Parameters passed to the executor; string values may embed
    /// `${{ expr }}` markers
    #[serde(default)]
    pub with: IndexMap<String, Value>,

    /// Step outputs: name -> expression evaluated after the step runs
    #[serde(default)]
    pub outputs: IndexMap<String, String>,
}
