use crate::url::DEFAULT_SNAPSHOT_BASE;
use serde::Deserialize;

/// Main configuration structure for Wayback-Save
///
/// Every section is optional; a missing section falls back to the values the
/// public archive service expects.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub user_agent: UserAgentConfig,
    pub http: HttpConfig,
    pub endpoints: EndpointConfig,
    pub poller: PollerConfig,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UserAgentConfig {
    /// Name of the client
    pub client_name: String,

    /// Version of the client
    pub client_version: String,

    /// URL with information about the client, appended as `(+URL)`
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            client_name: env!("CARGO_PKG_NAME").to_string(),
            client_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

/// HTTP transport settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HttpConfig {
    /// Whole-request timeout (seconds)
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Which availability endpoint to query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilitySource {
    /// Sparkline endpoint reporting `last_ts`; fresher than `closest`
    #[default]
    Sparkline,

    /// Public `wayback/available` endpoint reporting `archived_snapshots.closest`
    Closest,
}

/// Archive endpoint locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EndpointConfig {
    /// Form POST target for new captures
    pub save_url: String,

    /// Prefix of the job status endpoint; the encoded job id is appended
    pub status_url: String,

    /// Prefix of snapshot replay URLs
    pub snapshot_base_url: String,

    pub sparkline_url: String,

    pub available_url: String,

    pub availability_source: AvailabilitySource,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            save_url: "https://web.archive.org/save".to_string(),
            status_url: "https://web.archive.org/save/status/".to_string(),
            snapshot_base_url: DEFAULT_SNAPSHOT_BASE.to_string(),
            sparkline_url: "https://firefox-api.archive.org/__wb/sparkline".to_string(),
            available_url: "https://archive.org/wayback/available".to_string(),
            availability_source: AvailabilitySource::default(),
        }
    }
}

/// Job poll loop settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PollerConfig {
    /// Upper bound on status requests for one job. The status endpoint
    /// answers "pending" even for unknown job ids, so this must be finite.
    pub max_attempts: u32,

    /// Delay before the first status request (milliseconds)
    pub initial_wait_ms: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            max_attempts: 20,
            initial_wait_ms: 6000,
        }
    }
}
