//! Server configuration and startup wiring.

pub mod config;

pub use config::{AppConfig, ConfigError, UpstreamConfig};
