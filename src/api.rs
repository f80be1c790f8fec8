//! Client for the remote recipe API.
//!
//! Two endpoints are consumed:
//!
//! - `GET {base}/recipes/complexSearch?query=..&apiKey=..`
//! - `GET {base}/recipes/{id}/information?apiKey=..`
//!
//! The API key travels as a query parameter on every request. Requests are
//! issued once; there is no retry, caching or pagination.

use std::fmt;
use std::sync::Arc;

use reqwest::Url;
use tracing::debug;

use crate::error::{FetchError, FetchResult};
use crate::models::{Recipe, SearchResponse, SearchResult};
use crate::traits::{Headers, HttpClient};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Path of the search endpoint.
pub const SEARCH_PATH: &str = "/recipes/complexSearch";

/// Recipe API client over an injected [`HttpClient`].
#[derive(Clone)]
pub struct RecipeApi {
    client: Arc<dyn HttpClient>,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for RecipeApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeApi")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl RecipeApi {
    /// Create a client. A trailing `/` on `base_url` is ignored.
    pub fn new(
        client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Path of the detail endpoint for `id`.
    pub fn information_path(id: u64) -> String {
        format!("/recipes/{}/information", id)
    }

    /// Full search URL. `query` is sent verbatim (percent-encoded only).
    pub fn search_url(&self, query: &str) -> FetchResult<Url> {
        self.build_url(SEARCH_PATH, &[("query", query)])
    }

    /// Full detail URL for recipe `id`.
    pub fn information_url(&self, id: u64) -> FetchResult<Url> {
        self.build_url(&Self::information_path(id), &[])
    }

    /// Search recipes matching `query`. The empty string is a valid query.
    pub async fn search(&self, query: &str) -> FetchResult<Vec<SearchResult>> {
        let url = self.search_url(query)?;
        let response: SearchResponse = self.get_json(SEARCH_PATH, url).await?;
        debug!(query, count = response.results.len(), "Search results received");
        Ok(response.results)
    }

    /// Fetch the full record for recipe `id`.
    pub async fn recipe_information(&self, id: u64) -> FetchResult<Recipe> {
        let url = self.information_url(id)?;
        let recipe: Recipe = self.get_json(&Self::information_path(id), url).await?;
        debug!(
            recipe_id = id,
            steps = recipe.first_steps().len(),
            "Recipe information received"
        );
        Ok(recipe)
    }

    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> FetchResult<Url> {
        let mut pairs: Vec<(&str, &str)> = params.to_vec();
        pairs.push(("apiKey", self.api_key.as_str()));

        Url::parse_with_params(&format!("{}{}", self.base_url, path), &pairs).map_err(|e| {
            FetchError::InvalidUrl {
                endpoint: path.to_string(),
                message: e.to_string(),
            }
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        url: Url,
    ) -> FetchResult<T> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self
            .client
            .get(url.as_str(), &headers)
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        if !response.is_success() {
            return Err(FetchError::status(
                endpoint,
                response.status,
                &response.text_lossy(),
            ));
        }

        response.json().map_err(|source| FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}
