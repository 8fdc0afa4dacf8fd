use crate::chat::{ChatRequest, ChatResponse};
use crate::config::ClientConfig;
use crate::errors::{ApiError, ConfigError};
use crate::utils::build_headers;
use log::debug;
use reqwest::{header::HeaderMap, Client, StatusCode};

/// Chat-completions client. The connection pool and headers are built once and
/// reused; calls share no other state.
#[derive(Debug)]
pub struct OpenAiClient {
    http: Client,
    headers: HeaderMap,
    config: ClientConfig,
}

impl OpenAiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let headers = build_headers(&config)?;
        let http = Client::builder()
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            headers,
            config,
        })
    }

    /// Issues one POST and returns the parsed body. No retries.
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let body = serde_json::to_string(request).map_err(ApiError::Encode)?;
        debug!(
            "POST {} model={} messages={}",
            self.config.endpoint,
            request.model,
            request.messages.len()
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .headers(self.headers.clone())
            .timeout(self.config.timeout)
            .body(body)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::Transport)?;
        debug!("received {} ({} bytes)", status, text.len());

        if status != StatusCode::OK {
            return Err(ApiError::Remote { status, body: text });
        }

        serde_json::from_str(&text).map_err(ApiError::Decode)
    }
}
