//! Route configuration.

/// Router assembly
pub mod router;
