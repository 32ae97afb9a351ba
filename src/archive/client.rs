use crate::config::{HttpConfig, UserAgentConfig};
use reqwest::Client;
use std::time::Duration;

/// Formats the user agent string: `Name/Version` or `Name/Version (+ContactURL)`
pub(crate) fn user_agent(config: &UserAgentConfig) -> String {
    match &config.contact_url {
        Some(contact_url) => format!(
            "{}/{} (+{})",
            config.client_name, config.client_version, contact_url
        ),
        None => format!("{}/{}", config.client_name, config.client_version),
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent_config` - The user agent configuration
/// * `http` - Request and connect timeouts
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    user_agent_config: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent(user_agent_config))
        .timeout(Duration::from_secs(http.timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}
