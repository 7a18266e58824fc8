//! Core logic for the auto-accept bot.
//!
//! This crate is framework-agnostic. Telegram lives behind the
//! [`messaging::port::PlatformPort`] trait, implemented in the adapter crate.

pub mod classifier;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod notify;
pub mod template;

pub use errors::{Error, Result};
