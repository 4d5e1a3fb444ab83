//! Catalog client error types.

use thiserror::Error;

/// Errors from calls to the remote meal catalog.
///
/// Kept apart from list errors: a meal missing from the catalog is not the
/// same thing as a meal missing from a list.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("No meal found for id={0}")]
    NotFound(String),

    #[error("No random meal returned")]
    NoRandomMeal,

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("API call failed: {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API call failed: {url}: server returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("API call failed: {url}: invalid response: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// True when the catalog answered but had no such meal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_) | CatalogError::NoRandomMeal)
    }
}
