//! HTTP client for the remote heart-disease prediction service.
//!
//! The prediction service is an external collaborator behind a fixed JSON
//! contract: one POST carrying the thirteen-field wire record, answered with
//! `{"result": <string>}` on HTTP 200. The call is a single blocking
//! best-effort attempt; there is no retry, no backoff, and no timeout beyond
//! the transport default. Any non-200 status and any transport-level failure
//! surface as an error immediately. The error type distinguishes transport,
//! status and decode failures for logging, but callers are expected to
//! collapse them into one generic failure state for the user.

use serde::Deserialize;

use heartcheck_core::{ClientConfig, PredictionRequest};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(reqwest::Error),
    #[error("transport failure: {0}")]
    Transport(reqwest::Error),
    #[error("prediction service returned HTTP {0}")]
    Status(u16),
    #[error("failed to decode prediction response: {0}")]
    Decode(reqwest::Error),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Successful response body from the prediction endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PredictionResponse {
    /// Free-text risk classification, e.g. "Low Risk".
    pub result: String,
}

/// Blocking client for the prediction endpoint.
pub struct PredictionClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl PredictionClient {
    /// Create a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Build` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { http, config })
    }

    /// Submit one prediction request and return the decoded response.
    ///
    /// Success is strictly HTTP 200 with a decodable body; everything else is
    /// an error. The caller decides how failures are shown; this method only
    /// logs them.
    ///
    /// # Errors
    ///
    /// - `ClientError::Transport` for network-level failures (DNS, refused
    ///   connection, timeout).
    /// - `ClientError::Status` for any HTTP status other than 200.
    /// - `ClientError::Decode` if the 200 body is not the expected JSON.
    pub fn predict(&self, request: &PredictionRequest) -> ClientResult<PredictionResponse> {
        tracing::debug!(
            endpoint = self.config.endpoint_url(),
            "posting prediction request"
        );

        let response = self
            .http
            .post(self.config.endpoint_url())
            .json(request)
            .send()
            .map_err(|e| {
                tracing::error!("prediction request transport failure: {}", e);
                ClientError::Transport(e)
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            tracing::error!("prediction service returned HTTP {}", status);
            return Err(ClientError::Status(status));
        }

        let decoded = response.json::<PredictionResponse>().map_err(|e| {
            tracing::error!("failed to decode prediction response: {}", e);
            ClientError::Decode(e)
        })?;

        tracing::info!(result = %decoded.result, "prediction received");
        Ok(decoded)
    }
}
