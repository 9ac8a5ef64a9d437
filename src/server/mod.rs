//! Server wiring: configuration, application state, and startup.

/// Environment configuration
pub mod config;

/// Application startup
pub mod init;

/// Application state and `FromRef` extraction
pub mod state;
