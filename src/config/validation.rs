use crate::config::types::{Config, EndpointConfig, HttpConfig, PollerConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound accepted for `poller.max-attempts`
const MAX_POLL_ATTEMPTS: u32 = 1000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_user_agent_config(&config.user_agent)?;
    validate_http_config(&config.http)?;
    validate_endpoint_config(&config.endpoints)?;
    validate_poller_config(&config.poller)?;
    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate client name: non-empty, alphanumeric + hyphens only
    if config.client_name.is_empty() {
        return Err(ConfigError::Validation(
            "client_name cannot be empty".to_string(),
        ));
    }

    if !config
        .client_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "client_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.client_name
        )));
    }

    if let Some(contact_url) = &config.contact_url {
        Url::parse(contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;
    }

    Ok(())
}

/// Validates HTTP transport configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect_timeout_secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates archive endpoint URLs
fn validate_endpoint_config(config: &EndpointConfig) -> Result<(), ConfigError> {
    validate_endpoint("save_url", &config.save_url)?;
    validate_endpoint("status_url", &config.status_url)?;
    validate_endpoint("snapshot_base_url", &config.snapshot_base_url)?;
    validate_endpoint("sparkline_url", &config.sparkline_url)?;
    validate_endpoint("available_url", &config.available_url)?;
    Ok(())
}

/// Validates a single endpoint: absolute URL with an HTTP(S) scheme
fn validate_endpoint(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must use HTTP or HTTPS",
            name, value
        )));
    }

    Ok(())
}

/// Validates poll loop configuration
fn validate_poller_config(config: &PollerConfig) -> Result<(), ConfigError> {
    if config.max_attempts < 1 || config.max_attempts > MAX_POLL_ATTEMPTS {
        return Err(ConfigError::Validation(format!(
            "max_attempts must be between 1 and {}, got {}",
            MAX_POLL_ATTEMPTS, config.max_attempts
        )));
    }

    Ok(())
}
