//! Client for the remote meal catalog (TheMealDB JSON API).

mod client;
mod error;

pub use client::{CatalogClient, ClientOptions, DEFAULT_BASE_URL};
pub use error::CatalogError;
