//! Shared types — errors and configuration.

pub mod config;
pub mod errors;

pub use config::{ApiConfig, Config};
pub use errors::{Error, Result};
