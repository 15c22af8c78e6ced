//! HTTP client for the mailbox-verification API.

use crate::config::VerificationConfig;
use crate::verify::rate_limit::RateGate;
use crate::VerificationError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Classification of one verified address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    /// Whether the provider considers the address deliverable
    pub accepted: bool,

    /// Raw `result` value reported by the provider
    pub result: String,
}

/// Checks whether an address is deliverable
#[async_trait]
pub trait EmailVerifier: Send + Sync {
    /// Verifies a single candidate address
    ///
    /// Errors cover the transport, the status code and the payload shape.
    /// Callers treat any error as a rejection.
    async fn verify(&self, email: &str) -> Result<VerificationOutcome, VerificationError>;
}

/// Mailbox-verification API client
pub struct MillionVerifierClient {
    client: Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
    accepted_results: Vec<String>,
    gate: RateGate,
}

impl MillionVerifierClient {
    /// Creates a client; every call first passes through `gate`
    pub fn new(
        client: Client,
        config: &VerificationConfig,
        api_key: impl Into<String>,
        gate: RateGate,
    ) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(config.timeout_secs),
            accepted_results: config.accepted_results.clone(),
            gate,
        }
    }

    /// Whether a provider `result` value counts as accepted
    pub fn is_accepted(&self, result: &str) -> bool {
        self.accepted_results.iter().any(|r| r == result)
    }
}

#[async_trait]
impl EmailVerifier for MillionVerifierClient {
    async fn verify(&self, email: &str) -> Result<VerificationOutcome, VerificationError> {
        self.gate.acquire().await;
        let outcome = self.request(email).await;
        self.gate.finish().await;
        outcome
    }
}

impl MillionVerifierClient {
    /// Sends one verification request and classifies the response
    async fn request(&self, email: &str) -> Result<VerificationOutcome, VerificationError> {
        tracing::trace!("Verifying {}", email);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("api", self.api_key.as_str()), ("email", email)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(VerificationError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(classify_error)?;
        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| VerificationError::Malformed(e.to_string()))?;

        let result = payload
            .get("result")
            .and_then(Value::as_str)
            .ok_or_else(|| VerificationError::Malformed("missing 'result' field".to_string()))?
            .to_string();

        let accepted = self.is_accepted(&result);
        tracing::debug!("{} -> {} (accepted: {})", email, result, accepted);

        Ok(VerificationOutcome { accepted, result })
    }
}

fn classify_error(e: reqwest::Error) -> VerificationError {
    if e.is_timeout() {
        VerificationError::Timeout
    } else {
        VerificationError::Http(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> MillionVerifierClient {
        MillionVerifierClient::new(
            Client::new(),
            &VerificationConfig::default(),
            "key",
            RateGate::from_millis(0),
        )
    }

    #[test]
    fn test_accepted_results() {
        let client = test_client();
        assert!(client.is_accepted("ok"));
        assert!(client.is_accepted("catch-all"));
        assert!(client.is_accepted("accept"));

        assert!(!client.is_accepted("invalid"));
        assert!(!client.is_accepted("unknown"));
        assert!(!client.is_accepted("disposable"));
        assert!(!client.is_accepted("OK"));
    }

    #[test]
    fn test_timeout_from_config() {
        let client = test_client();
        assert_eq!(client.timeout, Duration::from_secs(10));
    }
}
