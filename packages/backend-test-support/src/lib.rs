//! Test support for the job portal backend: logging init, assertions on
//! the JSON error envelopes, and unique-value helpers.
//!
//! Kept free of backend types so the envelopes are checked as clients see them.

pub mod error_envelope;
pub mod logging;
pub mod unique_helpers;
