use std::{env, fmt::Display, str::FromStr, time::Duration};

use anyhow::{Context as _, bail};
use tracing::info;

pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_RECIPES_PER_PAGE: usize = 12;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub recipes_per_page: usize,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            recipes_per_page: DEFAULT_RECIPES_PER_PAGE,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load settings from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_base_url: String = try_load(&lookup, "RECIPES_API_URL", DEFAULT_API_BASE_URL)?;
        reqwest::Url::parse(&api_base_url)
            .with_context(|| format!("RECIPES_API_URL is not a valid URL: {api_base_url}"))?;

        let recipes_per_page: usize = try_load(
            &lookup,
            "RECIPES_PER_PAGE",
            &DEFAULT_RECIPES_PER_PAGE.to_string(),
        )?;
        if recipes_per_page == 0 {
            bail!("RECIPES_PER_PAGE must be at least 1");
        }

        let request_timeout_secs: u64 = try_load(
            &lookup,
            "RECIPES_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )?;

        Ok(Self {
            api_base_url,
            recipes_per_page,
            request_timeout_secs,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_owned()
    });

    raw.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid {key} value `{raw}`: {e}"))
}
