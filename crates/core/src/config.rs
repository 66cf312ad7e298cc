//! Client runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! prediction client. The intent is to avoid reading process-wide environment
//! variables during request handling, which can lead to inconsistent
//! behaviour in test harnesses.

use crate::validation::validate_endpoint_url;
use crate::ScreeningResult;

/// Prediction endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://heart-disease-prediction-backend.onrender.com/predict";

/// Client configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint_url: String,
}

impl ClientConfig {
    /// Create a new `ClientConfig` with a validated endpoint URL.
    pub fn new(endpoint_url: impl Into<String>) -> ScreeningResult<Self> {
        let endpoint_url = endpoint_url.into();
        validate_endpoint_url(&endpoint_url)?;
        Ok(Self { endpoint_url })
    }

    /// Resolve the configuration from an optional environment value.
    ///
    /// If `value` is `None` or empty/whitespace, the default endpoint is
    /// used. The caller reads `HEARTCHECK_ENDPOINT_URL` (or a CLI override)
    /// once at startup and passes the raw value here.
    pub fn from_env_value(value: Option<String>) -> ScreeningResult<Self> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if value.is_none() {
            tracing::debug!("no endpoint override set, using default prediction endpoint");
        }

        Self::new(value.unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string()))
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}
