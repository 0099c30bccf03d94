//! HTTP client for `TheCocktailDB`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::cocktails::types::{IngredientResponse, RecipeResponse};
use crate::error::{BartenderError, BartenderResult};

/// Source of drink recipes.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Look up full recipes by drink name.
    async fn fetch_by_name(&self, name: &str) -> BartenderResult<RecipeResponse>;

    /// List drinks (names only) that use an ingredient.
    async fn fetch_by_ingredient(&self, ingredient: &str) -> BartenderResult<IngredientResponse>;
}

/// `TheCocktailDB` REST client.
pub struct CocktailDbClient {
    client: reqwest::Client,
    base_url: String,
}

impl CocktailDbClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> BartenderResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let client = Self::build_client()?;
        Ok(Self { client, base_url })
    }

    fn build_client() -> BartenderResult<reqwest::Client> {
        use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("bartender-agent/", env!("CARGO_PKG_VERSION"))),
        );

        Ok(reqwest::Client::builder()
            .default_headers(headers)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()?)
    }

    /// Build the endpoint URL with a single encoded query parameter.
    fn endpoint(&self, path: &str, key: &str, value: &str) -> BartenderResult<Url> {
        let mut url = Url::parse(&format!("{}/{path}", self.base_url))?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }

    async fn get_json<T>(&self, url: Url) -> BartenderResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "Recipe API returned an error status");
            return Err(BartenderError::RecipeApiStatus(status.as_u16()));
        }

        let body = response.text().await?;
        tracing::debug!(%url, %body, "Raw recipe API response");

        // The filter endpoint answers unknown ingredients with an empty body.
        if body.trim().is_empty() {
            return Ok(T::default());
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeSource for CocktailDbClient {
    async fn fetch_by_name(&self, name: &str) -> BartenderResult<RecipeResponse> {
        let url = self.endpoint("search.php", "s", name)?;
        self.get_json(url).await
    }

    async fn fetch_by_ingredient(&self, ingredient: &str) -> BartenderResult<IngredientResponse> {
        let url = self.endpoint("filter.php", "i", ingredient)?;
        self.get_json(url).await
    }
}
