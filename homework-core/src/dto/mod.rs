//! Data transfer objects
//!
//! Shapes extracted from review API responses.

pub mod statuses;

pub use statuses::StatusPage;
