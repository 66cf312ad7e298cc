//! Input validation utilities.
//!
//! Guardrails applied to configuration values before they are used to build
//! outbound requests.

use crate::{ScreeningError, ScreeningResult};

/// Validates that an endpoint URL is safe to hand to the HTTP client.
///
/// Applies conservative guardrails rather than full URL parsing:
/// - Rejects empty or whitespace-only strings
/// - Bounds the length to avoid pathological inputs
/// - Requires ASCII throughout
/// - Requires an explicit `http://` or `https://` scheme
///
/// # Errors
///
/// Returns `ScreeningError::InvalidInput` describing the first failed check.
pub fn validate_endpoint_url(url: &str) -> ScreeningResult<()> {
    const MAX_URL_LEN: usize = 2_048;

    if url.trim().is_empty() {
        return Err(ScreeningError::InvalidInput(
            "endpoint URL cannot be empty".into(),
        ));
    }

    if url.len() > MAX_URL_LEN {
        return Err(ScreeningError::InvalidInput(format!(
            "endpoint URL exceeds maximum length of {} characters",
            MAX_URL_LEN
        )));
    }

    if !url.is_ascii() {
        return Err(ScreeningError::InvalidInput(
            "endpoint URL must contain only ASCII characters".into(),
        ));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ScreeningError::InvalidInput(
            "endpoint URL must start with http:// or https://".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_url() {
        assert!(validate_endpoint_url("https://example.org/predict").is_ok());
    }

    #[test]
    fn test_accepts_http_url() {
        assert!(validate_endpoint_url("http://127.0.0.1:8000/predict").is_ok());
    }

    #[test]
    fn test_rejects_empty_url() {
        assert!(validate_endpoint_url("   ").is_err());
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(validate_endpoint_url("example.org/predict").is_err());
        assert!(validate_endpoint_url("ftp://example.org/predict").is_err());
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert!(validate_endpoint_url("https://exämple.org/predict").is_err());
    }

    #[test]
    fn test_rejects_overlong_url() {
        let url = format!("https://example.org/{}", "a".repeat(3000));
        assert!(validate_endpoint_url(&url).is_err());
    }
}
