//! HTTP client for the meal catalog.
//!
//! Every endpoint answers `{"meals": [...]}`, with `"meals": null` when
//! nothing matched.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::CatalogError;
use crate::models::{Meal, MealSummary};

/// Public TheMealDB v1 endpoint with the free test key.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Network limits for catalog calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(8),
            request_timeout: Duration::from_secs(20),
        }
    }
}

#[derive(Deserialize)]
struct MealsResponse<T> {
    meals: Option<Vec<T>>,
}

/// Stateless client for the catalog; one GET per call.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    /// Creates a client with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.request_timeout)
            .build()
            .map_err(CatalogError::Client)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Returns the base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds an endpoint URL with an optional, URL-encoded query parameter.
    pub fn build_url(&self, endpoint: &str, query: Option<(&str, &str)>) -> String {
        match query {
            Some((key, value)) => format!(
                "{}/{}?{}={}",
                self.base_url,
                endpoint,
                key,
                urlencoding::encode(value)
            ),
            None => format!("{}/{}", self.base_url, endpoint),
        }
    }

    /// Meals that use an ingredient. Only id, name and thumbnail come back.
    pub async fn search_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, CatalogError> {
        let url = self.build_url("filter.php", Some(("i", ingredient.trim())));
        Ok(self.get(&url).await?.unwrap_or_default())
    }

    /// Meals whose name contains `name`, with full details.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Meal>, CatalogError> {
        let url = self.build_url("search.php", Some(("s", name.trim())));
        Ok(self.get(&url).await?.unwrap_or_default())
    }

    /// Full details for one meal.
    ///
    /// A blank id, an empty answer or an answer without an id is
    /// [`CatalogError::NotFound`].
    pub async fn lookup(&self, id: &str) -> Result<Meal, CatalogError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CatalogError::NotFound(String::new()));
        }

        let url = self.build_url("lookup.php", Some(("i", id)));
        let meals: Vec<Meal> = self.get(&url).await?.unwrap_or_default();
        meals
            .into_iter()
            .next()
            .filter(|meal| !meal.id.is_empty())
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// One random meal with full details.
    pub async fn random(&self) -> Result<Meal, CatalogError> {
        let url = self.build_url("random.php", None);
        let meals: Vec<Meal> = self.get(&url).await?.unwrap_or_default();
        meals
            .into_iter()
            .next()
            .filter(|meal| !meal.id.is_empty())
            .ok_or(CatalogError::NoRandomMeal)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<Option<Vec<T>>, CatalogError> {
        tracing::debug!(url, "catalog request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.to_string(),
                source,
            })?;

        let parsed: MealsResponse<T> =
            serde_json::from_str(&body).map_err(|source| CatalogError::Decode {
                url: url.to_string(),
                source,
            })?;
        Ok(parsed.meals)
    }
}
