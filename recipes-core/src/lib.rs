use recipes_catalog::Catalog;

/// Environment-driven application settings.
pub mod config;

pub use config::Config;

/// Shared application context passed into views.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone, Debug)]
pub struct Context {
    pub catalog: Catalog,
    pub config: Config,
}

impl Context {
    /// Create a new application context.
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self { catalog, config }
    }

    /// Build the catalog client described by `config` and wrap both.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let catalog = Catalog::connect(&config.api_base_url, config.request_timeout())?;
        Ok(Self::new(catalog, config))
    }
}
