//! Status extraction from the Save Page Now submission page
//!
//! The anonymous submission endpoint answers with an HTML page meant for
//! humans. Two things are scraped from it:
//! - The job id: the first `spn2-...` token anywhere in the document
//! - A status message: the text of the element right after `#spn-title`,
//!   or after an `<h2>Sorry</h2>` heading when there is no title
//!
//! This is best-effort scraping of a page we don't control.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Information scraped from a submission response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedStatus {
    /// Capture job id, if the page contains one
    pub job_id: Option<String>,

    /// Human-readable status message, if the page carries one
    pub message: Option<String>,
}

fn job_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"spn2-[a-z0-9-]*").expect("job id pattern is valid"))
}

/// Extracts the job id and status message from a submission page
///
/// # Example
///
/// ```
/// use wayback_save::archive::extract_status;
///
/// let html = r#"<html><body><script>watchJob("spn2-3fa9c0d1e2")</script></body></html>"#;
/// let status = extract_status(html);
/// assert_eq!(status.job_id.as_deref(), Some("spn2-3fa9c0d1e2"));
/// assert_eq!(status.message, None);
/// ```
pub fn extract_status(html: &str) -> ExtractedStatus {
    ExtractedStatus {
        job_id: extract_job_id(html).map(str::to_string),
        message: extract_message(html),
    }
}

/// Returns the first substring matching `spn2-[a-z0-9-]*`
///
/// The raw text is searched, not the parsed DOM, since the id usually lives
/// inside an inline script.
pub fn extract_job_id(html: &str) -> Option<&str> {
    job_id_pattern().find(html).map(|m| m.as_str())
}

/// Returns the text of the element following the status anchor
///
/// The text is kept as-is; only an empty text counts as no message.
pub fn extract_message(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let anchor = find_title(&document).or_else(|| find_sorry_heading(&document))?;

    let sibling = anchor.next_siblings().find_map(ElementRef::wrap)?;
    let text = sibling.text().collect::<String>();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Finds the element with id `spn-title`
fn find_title(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse("#spn-title").ok()?;
    document.select(&selector).next()
}

/// Finds the first `<h2>` whose text is exactly "Sorry"
fn find_sorry_heading(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse("h2").ok()?;
    document
        .select(&selector)
        .find(|element| element.text().collect::<String>() == "Sorry")
}
