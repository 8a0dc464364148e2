//! Configuration Module
//!
//! Configuration loading for the quote service.

mod settings;

pub use settings::{ConfigError, ServerSettings, ServiceConfig};
