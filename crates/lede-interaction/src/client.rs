//! HTTP client for the summarization/QA service.
//!
//! Two JSON endpoints plus a liveness probe. Failures map to
//! [`LedeError::Api`] with status and retryability metadata; no retry is
//! attempted here, a failed call is abandoned and the user re-triggers it.

use async_trait::async_trait;
use lede_core::article::Article;
use lede_core::assistant::{Assistant, SummaryKind};
use lede_core::error::{LedeError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::config::ServiceConfig;

/// Client for the remote assistant service.
#[derive(Clone)]
pub struct AssistantClient {
    client: Client,
    base_url: String,
}

impl AssistantClient {
    /// Creates a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client from the resolved service configuration.
    pub fn from_config() -> Self {
        Self::new(ServiceConfig::load().base_url)
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probes the service's `/health` endpoint.
    ///
    /// Returns `false` for any non-ok answer; a transport failure is still an
    /// error so callers can distinguish "down" from "unhealthy".
    pub async fn health(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|err| transport_error("health probe", &err))?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let body: HealthResponse = response
            .json()
            .await
            .map_err(|err| LedeError::api(None, format!("Malformed health response: {err}"), false))?;

        Ok(body.status == "ok")
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|err| transport_error(path, &err))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        response.json::<R>().await.map_err(|err| {
            LedeError::api(None, format!("Failed to parse response from {path}: {err}"), false)
        })
    }
}

#[async_trait]
impl Assistant for AssistantClient {
    async fn summarize(
        &self,
        article: &Article,
        kind: SummaryKind,
        conversation_id: &str,
    ) -> Result<String> {
        let request = SummarizeRequest {
            title: &article.title,
            content: &article.content,
            url: &article.url,
            kind,
            conversation_id,
        };

        let response: SummarizeResponse = self.post_json("/api/summarize", &request).await?;
        Ok(response.summary)
    }

    async fn ask(
        &self,
        article: &Article,
        question: &str,
        conversation_id: &str,
    ) -> Result<String> {
        let request = QuestionRequest {
            question,
            title: &article.title,
            content: &article.content,
            url: &article.url,
            conversation_id,
        };

        let response: QuestionResponse = self.post_json("/api/question", &request).await?;
        Ok(response.answer)
    }
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    title: &'a str,
    content: &'a str,
    url: &'a str,
    #[serde(rename = "type")]
    kind: SummaryKind,
    conversation_id: &'a str,
}

#[derive(Deserialize)]
struct SummarizeResponse {
    summary: String,
}

#[derive(Serialize)]
struct QuestionRequest<'a> {
    question: &'a str,
    title: &'a str,
    content: &'a str,
    url: &'a str,
    conversation_id: &'a str,
}

#[derive(Deserialize)]
struct QuestionResponse {
    answer: String,
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

/// FastAPI-style error body.
#[derive(Deserialize)]
struct ErrorResponse {
    detail: String,
}

fn transport_error(context: &str, err: &reqwest::Error) -> LedeError {
    LedeError::api(
        None,
        format!("Request to {context} failed: {err}"),
        err.is_connect() || err.is_timeout(),
    )
}

fn map_http_error(status: StatusCode, body: String) -> LedeError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.detail)
        .unwrap_or(body);

    let retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    LedeError::api(Some(status.as_u16()), message, retryable)
}
