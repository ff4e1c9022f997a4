// HTTP runner
// Performs a single HTTP request described by the step parameters.

use crate::runners::{string_param, Params, Runner, RunnerError, RunnerOutcome};

use indexmap::IndexMap;
use reqwest::{Client, Method};
use std::collections::HashMap;

pub struct HttpRunner {
    client: Client,
}

impl HttpRunner {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Runner for HttpRunner {
    async fn execute(
        &self,
        params: &Params,
        _env: &IndexMap<String, String>,
    ) -> Result<RunnerOutcome, RunnerError> {
        let url = string_param(params, "url").ok_or(RunnerError::MissingParameter("url"))?;
        let method = parse_method(
            string_param(params, "method")
                .as_deref()
                .unwrap_or("GET"),
        )?;

        let mut request = self.client.request(method.clone(), &url);

        if let Some(serde_json::Value::Object(headers)) = params.get("headers") {
            for (key, value) in headers {
                let value = match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                request = request.header(key, value);
            }
        }

        // Request bodies make no sense on GET/HEAD
        if method != Method::GET && method != Method::HEAD {
            if let Some(body) = params.get("body") {
                if !body.is_null() {
                    request = request.json(body);
                }
            }
        }

        let response = request.send().await?;

        let status = response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|val| (k.as_str().to_string(), val.to_string()))
            })
            .collect();
        let text = response.text().await?;

        let mut result = serde_json::json!({
            "status": status.as_u16(),
            "headers": headers,
            "text": text,
        });
        // Structured view of the body, only when it parses
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&text) {
            result["json"] = json;
        }

        Ok(RunnerOutcome::new(status.is_success(), result))
    }
}

fn parse_method(method: &str) -> Result<Method, RunnerError> {
    match method.to_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "DELETE" => Ok(Method::DELETE),
        "PATCH" => Ok(Method::PATCH),
        "HEAD" => Ok(Method::HEAD),
        "OPTIONS" => Ok(Method::OPTIONS),
        other => Err(RunnerError::Execution(format!(
            "unsupported HTTP method: {}",
            other
        ))),
    }
}
