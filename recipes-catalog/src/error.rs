use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Recipe not found")]
    NotFound { id: u64 },

    #[error("Catalog responded with {status}")]
    Status { status: StatusCode },

    #[error("Failed to reach catalog: {0}")]
    Request(#[from] reqwest::Error),
}
