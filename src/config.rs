//! Runtime configuration.
//!
//! Everything comes from environment variables so the API key is never
//! compiled into the binary.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `RECIPE_API_KEY` / `SPOONACULAR_API_KEY` | API key | required |
//! | `RECIPE_API_URL` | API base URL | `https://api.spoonacular.com` |
//! | `RECIPE_LOG` | tracing filter | `info` |
//! | `RECIPE_LOG_FILE` | log file path | `<data dir>/recipe-browser/recipe-browser.log` |
//! | `RECIPE_LATEST_WINS` | discard out-of-order search results | off |

use std::fmt;
use std::path::PathBuf;

use crate::api::DEFAULT_BASE_URL;
use crate::error::ConfigError;
use crate::screens::ResponseOrder;

pub const ENV_API_KEY: &str = "RECIPE_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "SPOONACULAR_API_KEY";
pub const ENV_API_URL: &str = "RECIPE_API_URL";
pub const ENV_LOG: &str = "RECIPE_LOG";
pub const ENV_LOG_FILE: &str = "RECIPE_LOG_FILE";
pub const ENV_LATEST_WINS: &str = "RECIPE_LATEST_WINS";

const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration for one run of the browser.
///
/// # Example
///
/// ```ignore
/// use recipe_browser::config::AppConfig;
///
/// let config = AppConfig::new("my-key")
///     .with_base_url("http://localhost:8080")
///     .with_log_filter("recipe_browser=debug");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub log_filter: String,
    /// `None` disables file logging
    pub log_file: Option<PathBuf>,
    pub response_order: ResponseOrder,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("log_filter", &self.log_filter)
            .field("log_file", &self.log_file)
            .field("response_order", &self.response_order)
            .finish()
    }
}

impl AppConfig {
    /// Config with defaults and the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: default_log_file(),
            response_order: ResponseOrder::default(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn with_response_order(mut self, order: ResponseOrder) -> Self {
        self.response_order = order;
        self
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = get(ENV_API_KEY)
            .or_else(|| get(ENV_API_KEY_FALLBACK))
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);

        if let Some(url) = get(ENV_API_URL) {
            reqwest::Url::parse(&url).map_err(|e| ConfigError::InvalidBaseUrl {
                url: url.clone(),
                message: e.to_string(),
            })?;
            config = config.with_base_url(url);
        }
        if let Some(filter) = get(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            config = config.with_log_file(Some(PathBuf::from(path)));
        }
        if get(ENV_LATEST_WINS).is_some_and(|value| is_truthy(&value)) {
            config = config.with_response_order(ResponseOrder::LatestRequest);
        }

        Ok(config)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// `<data_local_dir>/recipe-browser/recipe-browser.log`, if a data dir exists.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("recipe-browser").join("recipe-browser.log"))
}
