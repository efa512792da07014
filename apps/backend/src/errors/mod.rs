//! Error types below the HTTP boundary.

pub mod domain;

pub use domain::DomainError;
