//! Transport seam between the submission flow and the network

use crate::config::ClientConfig;
use crate::core::error::NetworkError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Delivers one encoded order and hands back the response body
///
/// Exactly one request per call. Implementations never retry.
#[async_trait]
pub trait OrderTransport: Send + Sync {
    /// Where orders go, for logs and errors
    fn endpoint(&self) -> &str;

    /// POST `body` as JSON and return the raw response body
    ///
    /// Any body that arrives is returned, whatever the status. Errors only
    /// mean the request was not sent or the body could not be read.
    async fn post_json(&self, body: Vec<u8>) -> Result<Vec<u8>, NetworkError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, NetworkError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| NetworkError::Transport {
                endpoint: config.endpoint.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> NetworkError {
        NetworkError::Transport {
            endpoint: self.endpoint.clone(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl OrderTransport for HttpTransport {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_json(&self, body: Vec<u8>) -> Result<Vec<u8>, NetworkError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| self.transport_error(e))?;

        if status.is_success() {
            tracing::debug!(status = status.as_u16(), bytes = bytes.len(), "Response received");
        } else {
            tracing::warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                bytes = bytes.len(),
                "Non-success status, decoding body anyway"
            );
        }

        Ok(bytes.to_vec())
    }
}
