//! Classification of submission status messages
//!
//! The submission page signals queueing and rate limiting only through prose.
//! Classification matches a closed set of known phrases, case-sensitively.
//! Wording the archive has not used before falls through to
//! [`SubmissionOutcome::Ok`]: an unrecognized message is treated as advisory,
//! never as a failure.

use crate::state::SubmissionOutcome;

/// "The capture will start in ~1 hour, 34 minutes because our service is
/// currently overloaded. You may close your browser window and the page will
/// still be saved."
const POSTPONED_MARKERS: &[&str] = &["The capture will start in"];

const TRY_AGAIN_LATER_MARKERS: &[&str] = &[
    // "The same snapshot had been made 3 minutes ago. You can make new
    // capture of this URL after 1 hour."
    "The same snapshot had been made",
    // "This URL has been already captured 1 times today, which is a daily
    // limit we have set for that Resource type. Please try again tomorrow."
    "This URL has been already captured",
];

/// Maps a status message to a submission outcome
///
/// # Examples
///
/// ```
/// use wayback_save::archive::classify;
/// use wayback_save::SubmissionOutcome;
///
/// assert_eq!(classify(None), SubmissionOutcome::Ok);
/// assert_eq!(
///     classify(Some("The capture will start in ~1 hour")),
///     SubmissionOutcome::Postponed
/// );
/// ```
pub fn classify(message: Option<&str>) -> SubmissionOutcome {
    let Some(message) = message.filter(|m| !m.is_empty()) else {
        return SubmissionOutcome::Ok;
    };

    if POSTPONED_MARKERS.iter().any(|m| message.contains(m)) {
        SubmissionOutcome::Postponed
    } else if TRY_AGAIN_LATER_MARKERS.iter().any(|m| message.contains(m)) {
        SubmissionOutcome::TryAgainLater
    } else {
        SubmissionOutcome::Ok
    }
}
