//! Save Page Now protocol client
//!
//! This module contains everything that talks to the archive:
//! - HTTP client construction with a proper user agent string
//! - Status extraction from the submission HTML and message classification
//! - Job polling with server-provided backoff hints
//! - Snapshot availability checks
//! - The submission flow tying these together
//!
//! All operations are methods on [`ArchiveClient`]. Each call is independent;
//! the client holds no per-operation state and may be shared between
//! concurrent tasks.

mod availability;
mod classify;
mod client;
mod extract;
mod poller;
mod submit;

pub use classify::classify;
pub use client::build_http_client;
pub use extract::{extract_job_id, extract_message, extract_status, ExtractedStatus};

use crate::config::{Config, EndpointConfig, PollerConfig};
use reqwest::Client;

/// Client for the archive's save, status and availability endpoints
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    http: Client,
    endpoints: EndpointConfig,
    poller: PollerConfig,
}

impl ArchiveClient {
    /// Builds a client from configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wayback_save::{ArchiveClient, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ArchiveClient::new(&Config::default())?;
    /// let result = client.save_page("https://example.com/").await?;
    /// println!("{:?}", result);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = build_http_client(&config.user_agent, &config.http)?;
        Ok(Self::with_http_client(http, config))
    }

    /// Builds a client around an existing HTTP client
    pub fn with_http_client(http: Client, config: &Config) -> Self {
        Self {
            http,
            endpoints: config.endpoints.clone(),
            poller: config.poller.clone(),
        }
    }
}
