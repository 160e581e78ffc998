//! HTTP API handlers for fanboard-server

pub mod artists;
pub mod error;
pub mod health;
pub mod identity;
pub mod ui;

pub use error::ApiError;
pub use identity::Identity;
