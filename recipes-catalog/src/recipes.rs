use tracing::debug;

use crate::{Catalog, CatalogError, Recipe, RecipesPage, StatusCode};

/// URL for one page of the listing.
pub fn recipes_url(base_url: &str, limit: usize, skip: usize) -> String {
    format!("{base_url}/recipes?limit={limit}&skip={skip}")
}

/// URL for a single recipe.
pub fn recipe_url(base_url: &str, id: u64) -> String {
    format!("{base_url}/recipes/{id}")
}

/// A listing response must be a success; anything else is reported with its status.
pub fn check_listing_status(status: StatusCode) -> Result<(), CatalogError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(CatalogError::Status { status })
    }
}

/// Any non-success status on a detail request means the recipe is not found.
pub fn check_recipe_status(status: StatusCode, id: u64) -> Result<(), CatalogError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(CatalogError::NotFound { id })
    }
}

impl Catalog {
    /// Fetch `limit` recipes starting after the first `skip`.
    pub async fn list_recipes(
        &self,
        limit: usize,
        skip: usize,
    ) -> Result<RecipesPage, CatalogError> {
        let url = recipes_url(self.base_url(), limit, skip);
        debug!(%url, "fetching recipe page");

        let response = self.http().get(&url).send().await?;
        check_listing_status(response.status())?;

        Ok(response.json::<RecipesPage>().await?)
    }

    /// Fetch one recipe by id. Any non-success status is reported as not found.
    pub async fn fetch_recipe(&self, id: u64) -> Result<Recipe, CatalogError> {
        let url = recipe_url(self.base_url(), id);
        debug!(%url, "fetching recipe");

        let response = self.http().get(&url).send().await?;
        check_recipe_status(response.status(), id)?;

        Ok(response.json::<Recipe>().await?)
    }
}
