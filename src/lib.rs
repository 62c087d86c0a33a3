pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};

pub use crate::config::ClientConfig;
pub use crate::core::{client::GeneDataClient, normalize::orthologs_by_species};
pub use crate::domain::model::{
    Article, EnrichResult, GwasResult, Organism, OrthologRecord, OrthologResult, PubMedTitles,
    TargetRecord,
};
pub use crate::domain::ports::{ConfigProvider, GeneDataSource};
pub use crate::utils::error::{ErrorCategory, GeneDataError, Result};
pub use crate::utils::text::{capitalize, capitalize_value, decapitalize, decapitalize_value};
