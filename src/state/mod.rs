//! Result and state types for archive operations
//!
//! # Components
//!
//! - `SubmissionOutcome`: what the submission page says before any polling
//! - `SaveResult`, `AvailabilityResult`: final, closed results of one operation
//! - `Snapshot`: a decoded snapshot timestamp paired with its replay URL
//! - `JobHandle`, `PollSchedule`: a capture job and the poll loop's counters

mod job;
mod outcome;
mod result;

// Re-export main types
pub use job::{JobHandle, PollSchedule};
pub use outcome::SubmissionOutcome;
pub use result::{AvailabilityResult, SaveResult, Snapshot};
