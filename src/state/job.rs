/// Capture job handle and poll loop bookkeeping
use std::fmt;
use std::time::Duration;

/// Server-assigned identifier of one capture request (`spn2-...`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobHandle {
    job_id: String,
}

impl JobHandle {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.job_id)
    }
}

/// Counters of one poll loop
///
/// Hands out at most `max_attempts` waits. The wait starts at the configured
/// default and is replaced by every valid `Retry-After` hint the server sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSchedule {
    max_attempts: u32,
    attempts: u32,
    wait: Duration,
}

impl PollSchedule {
    pub fn new(max_attempts: u32, initial_wait: Duration) -> Self {
        Self {
            max_attempts,
            attempts: 0,
            wait: initial_wait,
        }
    }

    /// Claims the next attempt and returns the delay to sleep before it
    ///
    /// Returns None once every attempt has been used.
    pub fn next_wait(&mut self) -> Option<Duration> {
        if self.attempts >= self.max_attempts {
            return None;
        }
        self.attempts += 1;
        Some(self.wait)
    }

    /// Applies a `Retry-After` header value to the following waits
    ///
    /// Returns false (and keeps the current wait) when the value is not a
    /// number of seconds.
    pub fn apply_retry_after(&mut self, value: &str) -> bool {
        match parse_retry_after(value) {
            Some(wait) => {
                self.wait = wait;
                true
            }
            None => false,
        }
    }

    /// Attempts claimed so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay that the next attempt will wait
    pub fn wait(&self) -> Duration {
        self.wait
    }
}

/// Parses a `Retry-After` value given in (possibly fractional) seconds
///
/// An empty value or a negative number means "no delay". HTTP-dates and other
/// non-numbers yield None.
fn parse_retry_after(value: &str) -> Option<Duration> {
    let value = value.trim();
    if value.is_empty() {
        return Some(Duration::ZERO);
    }
    let seconds: f64 = value.parse().ok()?;
    if !seconds.is_finite() {
        return None;
    }
    Duration::try_from_secs_f64(seconds.max(0.0)).ok()
}
