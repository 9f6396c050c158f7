//! notekeep - Terminal note keeper
//!
//! Short notes filed under a fixed set of categories, stored as a single JSON
//! collection in a local key-value store, with per-category summaries.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NotekeepError;
