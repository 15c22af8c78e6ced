use crate::{InputError, InputResult};
use serde::Deserialize;

/// Main configuration structure for Contact-Finder
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub verification: VerificationConfig,
    pub output: OutputConfig,
    pub credentials: CredentialsConfig,
}

/// People-search API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchConfig {
    /// Search endpoint (POST, JSON body)
    pub endpoint: String,

    /// Value sent as `per_page`
    pub per_page: u32,

    /// Number of company domains submitted per request
    pub batch_size: usize,

    /// Maximum number of titles forwarded to the API
    pub max_titles: usize,

    /// Divisor applied to `total_entries` to compute the page count
    pub page_divisor: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.apollo.io/v1/mixed_people/search".to_string(),
            per_page: 100,
            batch_size: 20,
            max_titles: 99,
            page_divisor: 200,
        }
    }
}

/// Mailbox-verification API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VerificationConfig {
    /// Verification endpoint (GET with `api` and `email` query parameters)
    pub endpoint: String,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// Minimum spacing between verification attempts (milliseconds)
    pub delay_ms: u64,

    /// `result` values counted as accepted
    pub accepted_results: Vec<String>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.millionverifier.com/api/v3/".to_string(),
            timeout_secs: 10,
            delay_ms: 1000,
            accepted_results: vec![
                "ok".to_string(),
                "catch-all".to_string(),
                "accept".to_string(),
            ],
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Directory the CSV files are written to
    pub directory: String,

    /// File name for every result
    pub all_results_file: String,

    /// File name for verified results only
    pub verified_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            all_results_file: "all_results.csv".to_string(),
            verified_file: "verified_emails.csv".to_string(),
        }
    }
}

/// API keys; usually supplied via environment or CLI instead
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CredentialsConfig {
    pub search_api_key: Option<String>,
    pub verification_api_key: Option<String>,
}

impl CredentialsConfig {
    /// Resolves both API keys, preferring explicit values over the config file
    ///
    /// Blank values count as missing. Either key missing is fatal.
    ///
    /// # Returns
    ///
    /// * `Ok((search_key, verification_key))`
    /// * `Err(InputError::MissingCredential)` - A key could not be resolved
    pub fn resolve(
        &self,
        search_override: Option<&str>,
        verification_override: Option<&str>,
    ) -> InputResult<(String, String)> {
        let search = pick_key(search_override, self.search_api_key.as_deref())
            .ok_or(InputError::MissingCredential("people-search"))?;
        let verification = pick_key(verification_override, self.verification_api_key.as_deref())
            .ok_or(InputError::MissingCredential("verification"))?;
        Ok((search, verification))
    }
}

fn pick_key(preferred: Option<&str>, fallback: Option<&str>) -> Option<String> {
    [preferred, fallback]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|k| !k.is_empty())
        .map(str::to_string)
}
