use std::time::Duration;

use reqwest::Client;
pub use reqwest::StatusCode;

/// Catalog error taxonomy.
pub mod error;
/// Wire models for the recipe catalog.
pub mod models;
/// List and detail queries.
pub mod recipes;

pub use error::CatalogError;
pub use models::{Difficulty, Recipe, RecipesPage};

/// Shared catalog handle passed across crates.
///
/// Cheap to clone: `reqwest::Client` is reference counted internally.
#[derive(Clone, Debug)]
pub struct Catalog {
    http: Client,
    base_url: String,
}

impl Catalog {
    /// Create a catalog handle from an existing HTTP client.
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    /// Build a catalog handle with its own client and request timeout.
    pub fn connect(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::new(http, base_url))
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}
