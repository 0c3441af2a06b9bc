/// Database configuration and connection management
pub mod database;

/// Tracker settings loading from config.toml and the environment
pub mod settings;
