//! Configuration module for Wayback-Save
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! All keys are optional; `Config::default()` targets the public archive.
//!
//! # Example
//!
//! ```no_run
//! use wayback_save::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("wayback-save.toml")).unwrap();
//! println!("Polling at most {} times", config.poller.max_attempts);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    AvailabilitySource, Config, EndpointConfig, HttpConfig, PollerConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
