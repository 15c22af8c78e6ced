use crate::config::types::{Config, OutputConfig, SearchConfig, VerificationConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_search_config(&config.search)?;
    validate_verification_config(&config.verification)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates people-search configuration
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    validate_endpoint("search endpoint", &config.endpoint)?;

    if config.batch_size < 1 || config.batch_size > 100 {
        return Err(ConfigError::Validation(format!(
            "batch_size must be between 1 and 100, got {}",
            config.batch_size
        )));
    }

    if config.per_page < 1 || config.per_page > 100 {
        return Err(ConfigError::Validation(format!(
            "per_page must be between 1 and 100, got {}",
            config.per_page
        )));
    }

    if config.max_titles < 1 {
        return Err(ConfigError::Validation(
            "max_titles must be >= 1".to_string(),
        ));
    }

    if config.page_divisor < 1 {
        return Err(ConfigError::Validation(
            "page_divisor must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates verification configuration
fn validate_verification_config(config: &VerificationConfig) -> Result<(), ConfigError> {
    validate_endpoint("verification endpoint", &config.endpoint)?;

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.accepted_results.is_empty() {
        return Err(ConfigError::Validation(
            "accepted_results cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if config.all_results_file.is_empty() || config.verified_file.is_empty() {
        return Err(ConfigError::Validation(
            "output file names cannot be empty".to_string(),
        ));
    }

    if config.all_results_file == config.verified_file {
        return Err(ConfigError::Validation(format!(
            "all_results_file and verified_file must differ, both are '{}'",
            config.verified_file
        )));
    }

    Ok(())
}

/// Endpoints must be absolute http(s) URLs
fn validate_endpoint(name: &str, endpoint: &str) -> Result<(), ConfigError> {
    let url = Url::parse(endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, endpoint, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            name, endpoint
        )));
    }

    Ok(())
}
