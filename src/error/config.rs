//! Startup configuration errors.

/// Configuration could not be assembled from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("no API key configured; set RECIPE_API_KEY (or SPOONACULAR_API_KEY)")]
    MissingApiKey,

    #[error("invalid API base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
}
