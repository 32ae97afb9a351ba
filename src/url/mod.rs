//! URL building for archive endpoints
//!
//! Snapshot and job-status URLs embed caller-supplied strings as single path
//! segments, so every component is fully percent-encoded (including `/`, `:`
//! and `?`).

use std::borrow::Cow;

/// Default prefix for snapshot replay URLs
pub const DEFAULT_SNAPSHOT_BASE: &str = "https://web.archive.org/web/";

/// Percent-encodes a string for use as a single URL component
///
/// Only ASCII alphanumerics and `-_.~` are left untouched.
pub fn encode_component(input: &str) -> Cow<'_, str> {
    urlencoding::encode(input)
}

/// Builds the replay URL of a snapshot
///
/// The result is `base + encode(timestamp) + "/" + encode(page_url)`.
///
/// # Examples
///
/// ```
/// use wayback_save::url::{build_snapshot_url, DEFAULT_SNAPSHOT_BASE};
///
/// let url = build_snapshot_url(DEFAULT_SNAPSHOT_BASE, "20240101123045", "https://example.com/");
/// assert_eq!(
///     url,
///     "https://web.archive.org/web/20240101123045/https%3A%2F%2Fexample.com%2F"
/// );
/// ```
pub fn build_snapshot_url(base: &str, timestamp: &str, page_url: &str) -> String {
    format!(
        "{}{}/{}",
        with_trailing_slash(base),
        encode_component(timestamp),
        encode_component(page_url)
    )
}

/// Builds the status endpoint URL for a capture job
pub fn build_status_url(status_base: &str, job_id: &str) -> String {
    format!(
        "{}{}",
        with_trailing_slash(status_base),
        encode_component(job_id)
    )
}

fn with_trailing_slash(base: &str) -> Cow<'_, str> {
    if base.ends_with('/') {
        Cow::Borrowed(base)
    } else {
        Cow::Owned(format!("{}/", base))
    }
}
