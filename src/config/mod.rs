#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::Organism;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GeneDataError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://kp4.kaiser-preusse.com:8000/";
pub const DEFAULT_API_BASE_PATH: &str = "http://kp4.kaiser-preusse.com:8000/mouseclinic/";
pub const DEFAULT_PHAROS_URL: &str = "https://pharos-api.ncats.io/graphql";
pub const DEFAULT_MELODI_URL: &str = "https://restapi.connect.dzd-ev.de/melodi/enrich%2F";
pub const DEFAULT_LIMIT: usize = 20;

/// Read-only client settings. Build once and hand to [`crate::GeneDataClient::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub api_base_path: String,
    pub organisms: Vec<Organism>,
    pub default_limit: usize,
    pub pharos_url: String,
    pub melodi_url: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_base_path: DEFAULT_API_BASE_PATH.to_string(),
            organisms: Organism::ALL.to_vec(),
            default_limit: DEFAULT_LIMIT,
            pharos_url: DEFAULT_PHAROS_URL.to_string(),
            melodi_url: DEFAULT_MELODI_URL.to_string(),
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `GENE_DATA_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("GENE_DATA_API_BASE_URL") {
            config.api_base_url = v;
        }
        if let Some(v) = lookup("GENE_DATA_API_BASE_PATH") {
            config.api_base_path = v;
        }
        if let Some(v) = lookup("GENE_DATA_PHAROS_URL") {
            config.pharos_url = v;
        }
        if let Some(v) = lookup("GENE_DATA_MELODI_URL") {
            config.melodi_url = v;
        }
        if let Some(v) = lookup("GENE_DATA_USER_AGENT") {
            config.user_agent = Some(v);
        }
        if let Some(v) = lookup("GENE_DATA_DEFAULT_LIMIT") {
            config.default_limit = parse_number("GENE_DATA_DEFAULT_LIMIT", &v)?;
        }
        if let Some(v) = lookup("GENE_DATA_TIMEOUT_SECONDS") {
            config.timeout_seconds = Some(parse_number("GENE_DATA_TIMEOUT_SECONDS", &v)?);
        }

        Ok(config)
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_pharos_url(mut self, url: impl Into<String>) -> Self {
        self.pharos_url = url.into();
        self
    }

    pub fn with_melodi_url(mut self, url: impl Into<String>) -> Self {
        self.melodi_url = url.into();
        self
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| GeneDataError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

impl ConfigProvider for ClientConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn api_base_path(&self) -> &str {
        &self.api_base_path
    }

    fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    fn default_limit(&self) -> usize {
        self.default_limit
    }

    fn pharos_url(&self) -> &str {
        &self.pharos_url
    }

    fn melodi_url(&self) -> &str {
        &self.melodi_url
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_base_url("api_base_url", &self.api_base_url)?;
        validation::validate_base_url("api_base_path", &self.api_base_path)?;
        validation::validate_url("pharos_url", &self.pharos_url)?;
        validation::validate_url("melodi_url", &self.melodi_url)?;
        validation::validate_positive_number("default_limit", self.default_limit, 1)?;
        validation::validate_non_empty("organisms", &self.organisms)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout as usize, 1)?;
        }
        Ok(())
    }
}
