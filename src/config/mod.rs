//! Configuration management for the crickelo pipeline
//!
//! This module handles all configuration loading from TOML files and
//! environment variables, validation, and default values.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, DataSettings, ServiceSettings};
pub use rating::RatingSettings;
