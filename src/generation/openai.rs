use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::error::{CompletionError, Error, Result};
use crate::generation::CompletionClient;

/// Client for an OpenAI-compatible `/chat/completions` endpoint
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        // No request timeout: generation calls run to completion or failure.
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        prompt: &str,
        temperature: f32,
    ) -> std::result::Result<String, CompletionError> {
        let api_key = self.api_key.as_deref().ok_or(CompletionError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature,
        };

        ::log::info!(
            "Requesting completion from {} ({} prompt chars, temperature {})",
            self.model,
            prompt.len(),
            temperature
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    CompletionError::Timeout
                } else {
                    CompletionError::Network(err.to_string())
                }
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(CompletionError::Auth);
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(CompletionError::RateLimited),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(CompletionError::InvalidResponse(format!(
                    "status {status} body {body}"
                )));
            }
            _ => {}
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|err| CompletionError::InvalidResponse(err.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::InvalidResponse("no content in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Route, serve};

    fn client_for(base_url: String, api_key: Option<&str>) -> OpenAiClient {
        let config = LlmConfig {
            base_url,
            api_key: api_key.map(str::to_string),
            ..LlmConfig::default()
        };
        OpenAiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let client = client_for("http://127.0.0.1:9".to_string(), None);
        let err = client.complete("hi", 0.2).await.unwrap_err();
        assert_eq!(err, CompletionError::MissingApiKey);
    }

    #[tokio::test]
    async fn test_returns_first_choice_content() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "{\"@type\": \"Thing\"}"}}]}"#;
        let server = serve(vec![Route::ok("/v1/chat/completions", body)]).await;
        let client = client_for(server.url("/v1/"), Some("sk-test"));

        let text = client.complete("make markup", 0.2).await.unwrap();
        assert_eq!(text, r#"{"@type": "Thing"}"#);

        let request = &server.requests()[0];
        assert!(request.starts_with("POST /v1/chat/completions"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer sk-test"));
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let server = serve(vec![
            Route::with_status("/auth/chat/completions", 401, "{}"),
            Route::with_status("/busy/chat/completions", 429, "{}"),
            Route::with_status("/broken/chat/completions", 500, "oops"),
        ])
        .await;

        let auth = client_for(server.url("/auth"), Some("k"));
        assert_eq!(auth.complete("p", 0.2).await.unwrap_err(), CompletionError::Auth);

        let busy = client_for(server.url("/busy"), Some("k"));
        assert_eq!(
            busy.complete("p", 0.2).await.unwrap_err(),
            CompletionError::RateLimited
        );

        let broken = client_for(server.url("/broken"), Some("k"));
        assert!(matches!(
            broken.complete("p", 0.2).await.unwrap_err(),
            CompletionError::InvalidResponse(_)
        ));
    }
}
