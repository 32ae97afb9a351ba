//! Integration tests for the archive client
//!
//! These tests use wiremock to stand in for the archive's save, status and
//! availability endpoints.

mod availability_tests;
mod poll_tests;
