//! Message model of the local companion service
//!
//! The companion stores pages locally. It is reached through the browser's
//! native messaging channel, which is not implemented here; this module only
//! defines the request and response shapes and how a response is interpreted.

use crate::timestamp;
use crate::CompanionError;
use serde::{Deserialize, Serialize};

/// Sender tag the companion expects on every request
pub const SENDER: &str = "localweb";

/// A request to the companion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanionRequest {
    pub sender: &'static str,
    #[serde(flatten)]
    pub action: CompanionAction,
}

impl CompanionRequest {
    pub fn new(action: CompanionAction) -> Self {
        Self {
            sender: SENDER,
            action,
        }
    }

    /// Serializes the request as one JSON message
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// What the companion should do
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum CompanionAction {
    /// Store a page
    Save {
        url: String,
        title: String,
        mime_type: String,
        /// True when `contents` is base64-encoded binary data
        is_base64: bool,
        contents: String,
    },

    /// Ask whether a page is stored
    Query { url: String },
}

/// Raw response from the companion
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompanionResponse {
    pub status: Option<String>,
    /// Error text; the companion sends it as `info`
    #[serde(alias = "info")]
    pub message: Option<String>,
    /// Set on a successful save
    pub timestamp: Option<String>,
    /// Set on a successful query when the page is stored
    pub archived: Option<ArchivedEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArchivedEntry {
    pub timestamp: Option<String>,
}

/// Whether the companion holds a copy of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LocalAvailability {
    Archived { datetime_iso: String },
    NotArchived,
}

impl CompanionResponse {
    /// Parses a response message
    pub fn from_json(text: &str) -> Result<Self, CompanionError> {
        serde_json::from_str(text).map_err(|e| CompanionError::Malformed(e.to_string()))
    }

    /// Checks the status field, turning error replies into `CompanionError`
    fn ensure_ok(&self) -> Result<(), CompanionError> {
        match self.status.as_deref() {
            Some("ok") => Ok(()),
            Some("error") => Err(CompanionError::Reported(
                self.message
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string()),
            )),
            Some(other) => Err(CompanionError::UnknownStatus(other.to_string())),
            None => Err(CompanionError::MissingField("status")),
        }
    }

    /// Interprets the reply to a save request
    pub fn into_saved(self) -> Result<LocalAvailability, CompanionError> {
        self.ensure_ok()?;
        let stamp = self
            .timestamp
            .ok_or(CompanionError::MissingField("timestamp"))?;
        Ok(LocalAvailability::Archived {
            datetime_iso: normalize_timestamp(stamp),
        })
    }

    /// Interprets the reply to a query request
    pub fn into_availability(self) -> Result<LocalAvailability, CompanionError> {
        self.ensure_ok()?;
        match self.archived {
            None => Ok(LocalAvailability::NotArchived),
            Some(entry) => {
                let stamp = entry
                    .timestamp
                    .ok_or(CompanionError::MissingField("archived.timestamp"))?;
                Ok(LocalAvailability::Archived {
                    datetime_iso: normalize_timestamp(stamp),
                })
            }
        }
    }
}

/// The companion reports display timestamps already, but accept the compact
/// 14-digit form as well.
fn normalize_timestamp(stamp: String) -> String {
    timestamp::decode(&stamp).unwrap_or(stamp)
}
