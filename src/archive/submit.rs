//! Submission flow: save → extract → classify → poll
//!
//! The form POST returns an HTML page. Its status message decides whether the
//! capture is running (`ok`), was queued (`postponed`), or was refused
//! (`try_again_later`). Only a running capture is polled; for the other two the
//! submission page is authoritative.

use super::ArchiveClient;
use crate::archive::{classify, extract_status, ExtractedStatus};
use crate::state::{JobHandle, SaveResult, SubmissionOutcome};
use crate::SubmissionError;
use tracing::{info, warn};

impl ArchiveClient {
    /// Submits a page for capture and waits for the capture to settle
    ///
    /// On success the submission page's message, if any, is carried into the
    /// result since it may hold caveats about the capture.
    ///
    /// # Errors
    ///
    /// * `SubmissionError::Transport` - The save endpoint answered with an error status
    /// * `SubmissionError::NoJobId` - No job id on the page; the archive is likely overloaded
    /// * `SubmissionError::Poll` - Polling the job failed or timed out
    pub async fn save_page(&self, page_url: &str) -> Result<SaveResult, SubmissionError> {
        info!("Submitting {} for capture", page_url);

        let response = self
            .http
            .post(&self.endpoints.save_url)
            .form(&[("url", page_url), ("capture_all", "on")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Transport {
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        let ExtractedStatus { job_id, message } = extract_status(&html);
        let outcome = classify(message.as_deref());

        match outcome {
            SubmissionOutcome::Postponed => {
                warn!("Capture of {} postponed: {:?}", page_url, message);
                return Ok(SaveResult::Postponed { message });
            }
            SubmissionOutcome::TryAgainLater => {
                warn!("Capture of {} refused: {:?}", page_url, message);
                return Ok(SaveResult::TryAgainLater { message });
            }
            SubmissionOutcome::Ok => {}
        }

        let job = job_id.map(JobHandle::new).ok_or(SubmissionError::NoJobId)?;
        info!("Capture job {} started for {}", job, page_url);

        let result = self.poll_until_done(&job, page_url).await?;
        Ok(result.with_message(message))
    }
}
