//! Capture job polling
//!
//! # Poll Loop
//!
//! | Step | Action |
//! |------|--------|
//! | 1 | Sleep for the current wait (6s by default) |
//! | 2 | GET the status endpoint for the job |
//! | 3 | Non-success HTTP status → `PollError::Transport` |
//! | 4 | Valid `Retry-After` header → becomes the wait for later attempts |
//! | 5 | `pending` → loop; `success` → snapshot; anything else → `CaptureFailed` |
//!
//! The endpoint answers `pending` even for unknown job ids, so the loop is
//! bounded by `max_attempts` and ends with `PollError::Timeout`.

use super::ArchiveClient;
use crate::state::{JobHandle, PollSchedule, SaveResult, Snapshot};
use crate::url::build_status_url;
use crate::PollError;
use reqwest::header::RETRY_AFTER;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Body of a job status response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct JobStatus {
    status: Option<String>,
    timestamp: Option<String>,
    message: Option<String>,
    status_ext: Option<String>,
}

/// Terminal or non-terminal reading of one status response
#[derive(Debug, PartialEq, Eq)]
enum JobState {
    Pending,
    Done(SaveResult),
}

impl JobStatus {
    fn into_state(self, snapshot_base: &str, page_url: &str) -> Result<JobState, PollError> {
        match self.status.as_deref().unwrap_or_default() {
            "pending" => Ok(JobState::Pending),
            "success" => {
                let timestamp = self.timestamp.ok_or(PollError::MissingTimestamp)?;
                let snapshot = Snapshot::from_timestamp(snapshot_base, &timestamp, page_url)?;
                Ok(JobState::Done(SaveResult::Ok {
                    snapshot,
                    message: None,
                }))
            }
            _ => Err(PollError::CaptureFailed {
                message: self.message.or(self.status_ext),
                status: self.status.unwrap_or_default(),
            }),
        }
    }
}

impl ArchiveClient {
    /// Polls a capture job until it succeeds, fails, or attempts run out
    ///
    /// # Arguments
    ///
    /// * `job` - The job returned by the submission
    /// * `page_url` - The page being captured, used to build the snapshot URL
    ///
    /// # Returns
    ///
    /// * `Ok(SaveResult::Ok)` - The capture finished; the message is empty
    /// * `Err(PollError)` - Transport failure, failed capture, or timeout
    pub async fn poll_until_done(
        &self,
        job: &JobHandle,
        page_url: &str,
    ) -> Result<SaveResult, PollError> {
        let status_url = build_status_url(&self.endpoints.status_url, job.job_id());
        let mut schedule = PollSchedule::new(
            self.poller.max_attempts,
            Duration::from_millis(self.poller.initial_wait_ms),
        );

        while let Some(wait) = schedule.next_wait() {
            tokio::time::sleep(wait).await;

            debug!(
                "Polling job {} (attempt {}/{})",
                job,
                schedule.attempts(),
                schedule.max_attempts()
            );

            let response = self.http.get(&status_url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(PollError::Transport {
                    status: status.as_u16(),
                });
            }

            if let Some(value) = response.headers().get(RETRY_AFTER) {
                match value.to_str() {
                    Ok(text) if schedule.apply_retry_after(text) => {
                        debug!("Server requested {:?} between polls", schedule.wait());
                    }
                    _ => warn!("Ignoring unparseable Retry-After header: {:?}", value),
                }
            }

            let body: JobStatus = response.json().await?;
            match body.into_state(&self.endpoints.snapshot_base_url, page_url) {
                Ok(JobState::Pending) => continue,
                Ok(JobState::Done(result)) => {
                    info!("Job {} finished after {} polls", job, schedule.attempts());
                    return Ok(result);
                }
                Err(e) => {
                    warn!("Job {} failed: {}", job, e);
                    return Err(e);
                }
            }
        }

        Err(PollError::Timeout {
            attempts: schedule.attempts(),
        })
    }
}
