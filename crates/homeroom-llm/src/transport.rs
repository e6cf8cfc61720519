use async_trait::async_trait;
use reqwest::Client;

use homeroom_core::{CompletionReply, CompletionRequest};

use crate::config::ProviderConfig;
use crate::error::{ClientError, Result};
use crate::wire;

/// One completion attempt against an endpoint. No retry at this layer; the
/// retry budget lives in [`crate::ResilientClient`], which is what makes the
/// policy testable against a scripted transport.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// Model this transport requests completions from.
    fn model(&self) -> &str;

    /// Perform a single attempt.
    async fn send(&self, request: &CompletionRequest) -> Result<CompletionReply>;
}

/// HTTP transport for the `generateContent` endpoint.
pub struct HttpTransport {
    config: ProviderConfig,
    http: Client,
}

impl HttpTransport {
    /// Create a transport; the per-attempt timeout comes from the config.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        )
    }
}

#[async_trait]
impl CompletionTransport for HttpTransport {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn send(&self, request: &CompletionRequest) -> Result<CompletionReply> {
        let body = wire::encode_request(request);

        let response = self
            .http
            .post(self.url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::timeout(e.to_string())
                } else {
                    ClientError::Network(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                401 | 403 => ClientError::Auth(error_text),
                429 => ClientError::unavailable(429, error_text),
                code if code >= 500 => ClientError::unavailable(code, error_text),
                code => ClientError::Api {
                    status: code,
                    message: error_text,
                },
            });
        }

        let response_data: wire::GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        let text = wire::extract_reply(response_data)?;
        Ok(CompletionReply::new(self.config.model.clone(), text))
    }
}
