//! Wayback-Save: a Save Page Now client
//!
//! This crate submits pages to the Internet Archive's anonymous "Save Page Now"
//! (SPN2) service, polls the resulting capture job until it settles, and checks
//! whether a page already has a snapshot.

pub mod archive;
pub mod companion;
pub mod config;
pub mod state;
pub mod timestamp;
pub mod url;

use thiserror::Error;

/// Coarse failure category shared by every error type in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Non-success HTTP status or a network-level failure
    Transport,
    /// The server answered, but not in a shape we understand
    Protocol,
    /// Poll attempts were exhausted while the job was still pending
    Timeout,
}

/// Errors produced when decoding a 14-digit archive timestamp
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timestamp must have 14 digits, got {0} characters")]
    Length(usize),

    #[error("timestamp contains a non-digit character: {0:?}")]
    NonDigit(String),

    #[error("timestamp does not describe a valid date and time: {0}")]
    OutOfRange(String),
}

/// Errors raised while polling a capture job
#[derive(Debug, Error)]
pub enum PollError {
    #[error("status request failed with HTTP {status}")]
    Transport { status: u16 },

    #[error("capture failed with status {status:?}{}", detail(.message))]
    CaptureFailed {
        status: String,
        message: Option<String>,
    },

    #[error("job still pending after {attempts} poll attempts")]
    Timeout { attempts: u32 },

    #[error("job reported success without a timestamp")]
    MissingTimestamp,

    #[error("job reported a malformed timestamp: {0}")]
    BadTimestamp(#[from] TimestampError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl PollError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } | Self::Http(_) => ErrorKind::Transport,
            Self::CaptureFailed { .. } | Self::MissingTimestamp | Self::BadTimestamp(_) => {
                ErrorKind::Protocol
            }
            Self::Timeout { .. } => ErrorKind::Timeout,
        }
    }
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Errors raised while submitting a page for capture
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("save request failed with HTTP {status}")]
    Transport { status: u16 },

    /// The submission page carried no job id. This usually means the archive
    /// is overloaded, not that the page was rejected.
    #[error("no job id in the save response; the archive may be overloaded, try again later")]
    NoJobId,

    #[error(transparent)]
    Poll(#[from] PollError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl SubmissionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } | Self::Http(_) => ErrorKind::Transport,
            Self::NoJobId => ErrorKind::Protocol,
            Self::Poll(e) => e.kind(),
        }
    }
}

/// Errors raised by the availability check
#[derive(Debug, Error)]
pub enum AvailabilityError {
    #[error("availability request failed with HTTP {status}")]
    Transport { status: u16 },

    #[error("availability response carried a malformed timestamp: {0}")]
    BadTimestamp(#[from] TimestampError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AvailabilityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } | Self::Http(_) => ErrorKind::Transport,
            Self::BadTimestamp(_) => ErrorKind::Protocol,
        }
    }
}

/// Errors reported by, or about, the local companion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompanionError {
    #[error("companion reported an error: {0}")]
    Reported(String),

    #[error("companion returned an unknown status: {0:?}")]
    UnknownStatus(String),

    #[error("companion response is missing field `{0}`")]
    MissingField(&'static str),

    #[error("companion response is not valid JSON: {0}")]
    Malformed(String),
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

// Re-export commonly used types
pub use archive::{classify, extract_status, ArchiveClient, ExtractedStatus};
pub use config::Config;
pub use state::{AvailabilityResult, JobHandle, SaveResult, Snapshot, SubmissionOutcome};
pub use timestamp::decode;
