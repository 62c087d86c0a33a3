use crate::config::ClientConfig;
use crate::domain::model::Organism;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gene-data")]
#[command(about = "Look up gene and organism data from the backend REST API, Pharos and Melodi Presto")]
pub struct CliConfig {
    /// TOML config file; without it settings come from GENE_DATA_* variables
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the REST backend base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// PubMed articles for a gene in one organism
    Articles { organism: Organism, gene: String },
    /// Ortholog overview keyed by organism
    Orthologs { gene: String },
    /// Pharos target details
    Pharos { gene: String },
    /// Melodi Presto enrichment
    Melodi { gene: String },
    /// Titles for PubMed IDs
    Titles {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// GWAS information
    Gwas { gene: String },
    /// List the configured organisms
    Organisms,
}

impl CliConfig {
    /// File or environment first, then command-line overrides.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env()?,
        };

        Ok(match &self.base_url {
            Some(url) => config.with_api_base_url(url.clone()),
            None => config,
        })
    }
}
