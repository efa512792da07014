//! Test-only setup shared by unit tests.

pub mod logging;
