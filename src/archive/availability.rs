//! Snapshot availability checks
//!
//! Two endpoint generations answer the same question:
//! - The sparkline endpoint reports the latest capture as `last_ts`. It is
//!   preferred because its answer reflects new captures quickly.
//! - The public `wayback/available` endpoint reports
//!   `archived_snapshots.closest`, which is often cached and out of date.

use super::ArchiveClient;
use crate::config::AvailabilitySource;
use crate::state::{AvailabilityResult, Snapshot};
use crate::AvailabilityError;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::Deserialize;
use tracing::{debug, info};

/// Body of a sparkline response (only the field we need)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SparklineResponse {
    last_ts: Option<String>,
}

/// Body of a `wayback/available` response
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AvailableResponse {
    archived_snapshots: ArchivedSnapshots,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArchivedSnapshots {
    closest: Option<ClosestSnapshot>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ClosestSnapshot {
    available: bool,
    timestamp: Option<String>,
}

impl AvailableResponse {
    fn latest_timestamp(self) -> Option<String> {
        self.archived_snapshots
            .closest
            .filter(|closest| closest.available)
            .and_then(|closest| closest.timestamp)
    }
}

impl ArchiveClient {
    /// Checks whether a page already has a snapshot
    ///
    /// The answer may come from an HTTP cache.
    pub async fn check_availability(
        &self,
        page_url: &str,
    ) -> Result<AvailabilityResult, AvailabilityError> {
        self.query_availability(page_url, false).await
    }

    /// Checks whether a page has a snapshot, bypassing HTTP caches
    ///
    /// Use this right after a submission so a just-created snapshot shows up
    /// instead of a stale "not archived" answer.
    pub async fn check_availability_uncached(
        &self,
        page_url: &str,
    ) -> Result<AvailabilityResult, AvailabilityError> {
        self.query_availability(page_url, true).await
    }

    async fn query_availability(
        &self,
        page_url: &str,
        uncached: bool,
    ) -> Result<AvailabilityResult, AvailabilityError> {
        let source = self.endpoints.availability_source;
        let mut request = match source {
            AvailabilitySource::Sparkline => self.http.get(&self.endpoints.sparkline_url).query(&[
                ("collection", "web"),
                ("output", "json"),
                ("url", page_url),
            ]),
            AvailabilitySource::Closest => self
                .http
                .get(&self.endpoints.available_url)
                .query(&[("url", page_url)]),
        };

        if uncached {
            request = request
                .header(CACHE_CONTROL, "no-cache")
                .header(PRAGMA, "no-cache");
        }

        debug!("Checking availability of {} ({:?})", page_url, source);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AvailabilityError::Transport {
                status: status.as_u16(),
            });
        }

        let timestamp = match source {
            AvailabilitySource::Sparkline => response.json::<SparklineResponse>().await?.last_ts,
            AvailabilitySource::Closest => {
                response.json::<AvailableResponse>().await?.latest_timestamp()
            }
        };

        let result = resolve(
            timestamp.as_deref(),
            &self.endpoints.snapshot_base_url,
            page_url,
        )?;

        match result.snapshot() {
            Some(snapshot) => info!("{} archived at {}", page_url, snapshot.datetime_iso()),
            None => info!("{} has no snapshot", page_url),
        }

        Ok(result)
    }
}

/// Turns an optional latest timestamp into an availability result
fn resolve(
    timestamp: Option<&str>,
    snapshot_base: &str,
    page_url: &str,
) -> Result<AvailabilityResult, AvailabilityError> {
    match timestamp.filter(|ts| !ts.is_empty()) {
        None => Ok(AvailabilityResult::NotArchived),
        Some(ts) => Ok(AvailabilityResult::Archived {
            snapshot: Snapshot::from_timestamp(snapshot_base, ts, page_url)?,
        }),
    }
}
