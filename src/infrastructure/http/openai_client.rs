//! Chat-completion adapter for [`ContentGenerator`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error};

use super::client::upstream_status_error;
use crate::config::OpenAiConfig;
use crate::domain::entities::GeneratedCompany;
use crate::domain::gateways::ContentGenerator;
use crate::error::AppError;

const SERVICE: &str = "Completion API";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI-compatible chat-completion client.
pub struct OpenAiGenerator {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl OpenAiGenerator {
    pub fn new(client: Client, config: &OpenAiConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl ContentGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedCompany, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::configuration("OPENAI_API_KEY is not set", json!({}))
        })?;

        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::from_reqwest(SERVICE, e))?;

        if response.status() != StatusCode::OK {
            return Err(upstream_status_error(SERVICE, response).await);
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::from_reqwest(SERVICE, e))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| AppError::upstream("Completion API returned no choices", json!({})))?;

        debug!(content = %content, "Completion content");

        serde_json::from_str(strip_code_fence(&content)).map_err(|e| {
            error!(error = %e, "Generated content is not a company payload");
            AppError::upstream(
                "Failed to parse generated company",
                json!({ "reason": e.to_string() }),
            )
        })
    }
}

/// Removes a surrounding Markdown code fence (```` ```json ... ``` ````) if present.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    // Drop the language tag on the opening line.
    match inner.split_once('\n') {
        Some((tag, rest)) if !tag.trim_start().starts_with('{') => rest.trim(),
        _ => inner.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpClientConfig;
    use crate::infrastructure::http::build_client;
    use mockito::Matcher;

    fn generator(base_url: &str, api_key: Option<&str>) -> OpenAiGenerator {
        let config = OpenAiConfig {
            api_key: api_key.map(str::to_string),
            model: "gpt-4o-mini".to_string(),
            base_url: base_url.to_string(),
        };
        OpenAiGenerator::new(build_client(&HttpClientConfig::default()).unwrap(), &config)
    }

    fn company_json() -> String {
        json!({
            "name": "Acme AI",
            "website": "https://acme.ai",
            "cover_image": "https://acme.ai/og.png",
            "description": "Acme builds agents.",
            "appeal": "<ul><li>A</li><li>B</li></ul>",
            "linkedin": "https://linkedin.com/company/acme",
            "twitter": ""
        })
        .to_string()
    }

    fn completion_body(content: &str) -> String {
        json!({ "choices": [ { "message": { "role": "assistant", "content": content } } ] })
            .to_string()
    }

    #[tokio::test]
    async fn test_generate_parses_first_choice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "messages": [ { "role": "user", "content": "prompt" } ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body(&company_json()))
            .create_async()
            .await;

        let company = generator(&server.url(), Some("test-key"))
            .generate("prompt")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(company.name, "Acme AI");
        assert_eq!(
            company.linkedin.as_deref(),
            Some("https://linkedin.com/company/acme")
        );
        assert!(company.instagram.is_none());
    }

    #[tokio::test]
    async fn test_generate_accepts_null_social_links() {
        let mut server = mockito::Server::new_async().await;
        let content = json!({
            "name": "Acme AI",
            "website": "https://acme.ai",
            "cover_image": "https://acme.ai/og.png",
            "description": "Acme builds agents.",
            "appeal": "<li>A</li>",
            "linkedin": null,
            "instagram": null,
            "facebook": "",
            "twitter": null
        })
        .to_string();
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(completion_body(&content))
            .create_async()
            .await;

        let company = generator(&server.url(), Some("test-key"))
            .generate("prompt")
            .await
            .unwrap();

        assert_eq!(company.name, "Acme AI");
        assert!(company.linkedin.is_none());
        assert!(company.twitter.is_none());
    }

    #[tokio::test]
    async fn test_generate_accepts_fenced_content() {
        let mut server = mockito::Server::new_async().await;
        let fenced = format!("```json\n{}\n```", company_json());
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(completion_body(&fenced))
            .create_async()
            .await;

        let company = generator(&server.url(), Some("k"))
            .generate("prompt")
            .await
            .unwrap();

        assert_eq!(company.website, "https://acme.ai");
    }

    #[tokio::test]
    async fn test_non_ok_status_is_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body(r#"{"error":{"message":"rate limited"}}"#)
            .create_async()
            .await;

        let err = generator(&server.url(), Some("k"))
            .generate("prompt")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Upstream { .. }));
    }

    #[tokio::test]
    async fn test_empty_choices_is_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = generator(&server.url(), Some("k"))
            .generate("prompt")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Completion API returned no choices");
    }

    #[tokio::test]
    async fn test_malformed_content_is_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(completion_body(r#"{"name":"Acme"}"#))
            .create_async()
            .await;

        let err = generator(&server.url(), Some("k"))
            .generate("prompt")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to parse generated company");
    }

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        let err = generator("http://127.0.0.1:9", None)
            .generate("prompt")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Configuration { .. }));
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }
}
