// Agent runner
// Sends the step's prompt to an OpenAI-compatible chat completions
// endpoint. Credentials and endpoint come from the merged environment
// so workflows can point different jobs at different providers.

use crate::runners::{number_param, string_param, Params, Runner, RunnerError, RunnerOutcome};

use indexmap::IndexMap;
use reqwest::Client;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f64 = 0.2;

pub struct AgentRunner {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    usage: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl AgentRunner {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for AgentRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Runner for AgentRunner {
    async fn execute(
        &self,
        params: &Params,
        env: &IndexMap<String, String>,
    ) -> Result<RunnerOutcome, RunnerError> {
        let prompt =
            string_param(params, "prompt").ok_or(RunnerError::MissingParameter("prompt"))?;

        let api_key = env
            .get("OPENAI_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                RunnerError::Execution("OPENAI_API_KEY is not set in the environment".to_string())
            })?;
        let base_url = env
            .get("OPENAI_BASE_URL")
            .map(String::as_str)
            .unwrap_or(DEFAULT_BASE_URL);
        let model = string_param(params, "model")
            .or_else(|| env.get("OPENAI_MODEL").cloned())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let temperature = number_param(params, "temperature").unwrap_or(DEFAULT_TEMPERATURE);

        let mut body = serde_json::json!({
            "model": model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": temperature,
        });
        if let Some(max_tokens) = number_param(params, "max_tokens") {
            body["max_tokens"] = serde_json::json!(max_tokens as u64);
        }

        let response = self
            .client
            .post(format!("{}/chat/completions", base_url.trim_end_matches('/')))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        Ok(RunnerOutcome::new(
            true,
            serde_json::json!({
                "content": content,
                "model": completion.model,
                "usage": completion.usage,
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_prompt_is_an_error() {
        let runner = AgentRunner::new();
        let err = runner
            .execute(&Params::new(), &IndexMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, RunnerError::MissingParameter("prompt")));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_an_error() {
        let runner = AgentRunner::new();
        let mut params = Params::new();
        params.insert("prompt".to_string(), serde_json::json!("hello"));

        let err = runner.execute(&params, &IndexMap::new()).await.unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_completion_response_parses_minimal_payload() {
        let raw = r#"{ "choices": [{ "message": { "content": "hi" } }] }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hi"));
        assert!(parsed.model.is_none());
    }
}
