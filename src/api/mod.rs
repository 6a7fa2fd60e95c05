//! API module
//!
//! Contains HTTP request handlers for the wallboard operation boundary

pub mod agents;
pub mod messages;
