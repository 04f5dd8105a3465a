//! HTTP transport to the issuance service.

use std::time::Duration;

use async_trait::async_trait;

use cachet_types::{ProofRequest, ProofResponse};

use crate::coordinator::IssuerApi;
use crate::error::ClientError;

/// Default timeout for one issuance round trip.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Production `IssuerApi` implementation over HTTP.
///
/// Sends `POST {base_url}/groups/{groupId}/membership-proof` with the
/// request as a JSON body and decodes the JSON response.
pub struct HttpIssuerClient {
    /// HTTP client (reusable connection pool).
    http: reqwest::Client,
    base_url: String,
}

impl HttpIssuerClient {
    /// Create a client for an issuer at `base_url` with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom round-trip timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl IssuerApi for HttpIssuerClient {
    async fn issue_proof(&self, request: ProofRequest) -> Result<ProofResponse, ClientError> {
        let url = format!(
            "{}/groups/{}/membership-proof",
            self.base_url.trim_end_matches('/'),
            request.group_id
        );

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    format!("request timed out: {e}")
                } else if e.is_connect() {
                    format!("connection failed: {e}")
                } else {
                    format!("request failed: {e}")
                };
                ClientError::ProofRequestFailed {
                    message,
                    status: None,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::ProofRequestFailed {
                message: format!("issuer returned HTTP {status}: {body}"),
                status: Some(status.as_u16()),
            });
        }

        response
            .json::<ProofResponse>()
            .await
            .map_err(|e| ClientError::ProofRequestFailed {
                message: format!("failed to parse issuance response: {e}"),
                status: Some(status.as_u16()),
            })
    }
}
