//! Contact-Finder: people search with guessed, verified work emails
//!
//! This crate takes a list of company domains and job titles, looks up matching
//! people through a people-search API, guesses work email addresses from
//! name/domain patterns, confirms them against a mailbox-verification API and
//! exports the results as CSV.

pub mod config;
pub mod email;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod search;
pub mod url;
pub mod verify;

use thiserror::Error;

/// Main error type for Contact-Finder operations
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Verification error: {0}")]
    Verification(#[from] VerificationError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors that stop a run before any API call is made
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV must have a 'company_web_url' or 'comp_web_url' column.")]
    MissingCompanyColumn,

    #[error("Missing {0} API key")]
    MissingCredential(&'static str),

    #[error("No job titles given")]
    NoTitles,
}

/// Failure of one people-search request (one company batch)
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Search API returned status {status}")]
    Status { status: u16 },

    #[error("Malformed search response: {0}")]
    Malformed(String),
}

/// Failure of one verification attempt (one candidate email)
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("Verification request timed out")]
    Timeout,

    #[error("Verification request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Verification API returned status {status}")]
    Status { status: u16 },

    #[error("Unexpected verification response: {0}")]
    Malformed(String),
}

/// Result type alias for Contact-Finder operations
pub type Result<T> = std::result::Result<T, FinderError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for input loading
pub type InputResult<T> = std::result::Result<T, InputError>;

// Re-export commonly used types
pub use config::Config;
pub use pipeline::{ContactAssembler, ProgressReporter, ResultRecord, VerificationStatus};
pub use url::derive_domain;
