//! # Fanboard Common Library
//!
//! Shared code for the Fanboard service:
//! - Database models, initialization, and seed data
//! - SSE message types (SseMessage enum)
//! - Error taxonomy
//! - Configuration loading

pub mod config;
pub mod db;
pub mod error;
pub mod events;

pub use error::{Error, Result};
