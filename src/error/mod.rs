//! Error types.
//!
//! - [`FetchError`] - any failed recipe API request (network, status, decode)
//! - [`ConfigError`] - missing or invalid startup configuration
//!
//! Fetch errors never reach the rendering layer. They are logged where the
//! request was issued and dropped.

mod config;
mod fetch;

pub use config::ConfigError;
pub use fetch::FetchError;

/// Result alias for recipe API calls.
pub type FetchResult<T> = Result<T, FetchError>;
