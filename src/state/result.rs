/// Final results of save and availability operations
use crate::state::SubmissionOutcome;
use crate::timestamp;
use crate::url::build_snapshot_url;
use crate::TimestampError;
use serde::Serialize;

/// A decoded snapshot: display timestamp plus replay URL
///
/// Can only be built from a valid 14-digit timestamp, so both fields are
/// always non-empty and well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    datetime_iso: String,
    url: String,
}

impl Snapshot {
    /// Builds a snapshot from an archive timestamp and the archived page URL
    pub fn from_timestamp(
        snapshot_base: &str,
        timestamp: &str,
        page_url: &str,
    ) -> Result<Self, TimestampError> {
        let datetime_iso = timestamp::decode(timestamp)?;
        let url = build_snapshot_url(snapshot_base, timestamp, page_url);
        Ok(Self { datetime_iso, url })
    }

    /// Snapshot time formatted as `YYYY-MM-DD hh:mm:ss` (UTC)
    pub fn datetime_iso(&self) -> &str {
        &self.datetime_iso
    }

    /// Replay URL of the snapshot
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Final outcome of one save attempt
///
/// Serializes tagged by `status`, e.g.
/// `{"status":"ok","datetime_iso":"...","url":"...","message":null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveResult {
    /// The capture job finished successfully
    Ok {
        #[serde(flatten)]
        snapshot: Snapshot,
        /// Advisory message from the submission page, if any
        message: Option<String>,
    },

    /// The capture was queued and will complete later
    Postponed { message: Option<String> },

    /// The archive refused to capture right now
    TryAgainLater { message: Option<String> },
}

impl SaveResult {
    /// Replaces the message carried by this result
    pub fn with_message(self, message: Option<String>) -> Self {
        match self {
            Self::Ok { snapshot, .. } => Self::Ok { snapshot, message },
            Self::Postponed { .. } => Self::Postponed { message },
            Self::TryAgainLater { .. } => Self::TryAgainLater { message },
        }
    }

    /// Returns the status tag of this result
    pub fn outcome(&self) -> SubmissionOutcome {
        match self {
            Self::Ok { .. } => SubmissionOutcome::Ok,
            Self::Postponed { .. } => SubmissionOutcome::Postponed,
            Self::TryAgainLater { .. } => SubmissionOutcome::TryAgainLater,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Self::Ok { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok { message, .. }
            | Self::Postponed { message }
            | Self::TryAgainLater { message } => message.as_deref(),
        }
    }
}

/// Whether a page already has a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AvailabilityResult {
    Archived {
        #[serde(flatten)]
        snapshot: Snapshot,
    },
    NotArchived,
}

impl AvailabilityResult {
    pub fn is_archived(&self) -> bool {
        matches!(self, Self::Archived { .. })
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Self::Archived { snapshot } => Some(snapshot),
            Self::NotArchived => None,
        }
    }
}
