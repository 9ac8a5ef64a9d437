//! Error taxonomy for the HTTP surface.
//!
//! - **`types`** - The `ApiError` enum and its status-code mapping
//! - **`conversion`** - `IntoResponse` so handlers can return errors directly
//!
//! Two quirks are deliberate and load-bearing for API compatibility: an
//! unknown message sender maps to 422 while an unknown status user maps to
//! 404, and the duplicate-name and not-found bodies are localized Portuguese
//! strings.

/// Error conversion implementations
pub mod conversion;

/// Error type definitions
pub mod types;

pub use types::ApiError;
