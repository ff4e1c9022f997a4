// Shell runner
// Spawns the step's command through the platform shell and captures
// its output.

use crate::runners::{string_param, Params, Runner, RunnerError, RunnerOutcome};

use indexmap::IndexMap;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

pub struct ShellRunner {
    working_dir: PathBuf,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self {
            working_dir: PathBuf::from("."),
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    fn prepare_command(&self, cmd: &str, shell: Option<&str>) -> (String, Vec<String>) {
        if cfg!(target_os = "windows") {
            let shell_cmd = shell.unwrap_or("cmd").to_string();
            (shell_cmd, vec!["/C".to_string(), cmd.to_string()])
        } else {
            let shell_cmd = shell.unwrap_or("sh").to_string();
            (shell_cmd, vec!["-c".to_string(), cmd.to_string()])
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Runner for ShellRunner {
    async fn execute(
        &self,
        params: &Params,
        env: &IndexMap<String, String>,
    ) -> Result<RunnerOutcome, RunnerError> {
        let cmd = string_param(params, "cmd").ok_or(RunnerError::MissingParameter("cmd"))?;
        let shell = string_param(params, "shell");

        let (program, args) = self.prepare_command(&cmd, shell.as_deref());

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.working_dir)
            .envs(env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        let exit_code = output.status.code();
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        Ok(RunnerOutcome::new(
            output.status.success(),
            serde_json::json!({
                "exit_code": exit_code,
                "stdout": stdout,
                "stderr": stderr,
            }),
        ))
    }
}
