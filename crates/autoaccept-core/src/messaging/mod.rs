//! Outbound platform abstractions.

pub mod port;
pub mod types;
