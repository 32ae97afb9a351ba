/// Classification of a submission response, before any polling
use serde::Serialize;
use std::fmt;

/// What the submission page reports about a freshly requested capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// No blocking message; the capture job is running
    Ok,

    /// The capture was queued because the service is under load. It will
    /// complete without further action from the client.
    Postponed,

    /// Rate limited, or a snapshot was taken too recently
    TryAgainLater,
}

impl SubmissionOutcome {
    /// Returns the wire name of this outcome
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Postponed => "postponed",
            Self::TryAgainLater => "try_again_later",
        }
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
