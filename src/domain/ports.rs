use crate::domain::model::{
    Article, EnrichResult, GwasResult, Organism, OrthologResult, PubMedTitles, TargetRecord,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn api_base_path(&self) -> &str;
    fn organisms(&self) -> &[Organism];
    fn default_limit(&self) -> usize;
    fn pharos_url(&self) -> &str;
    fn melodi_url(&self) -> &str;
}

/// The set of lookups the UI layer needs. Each call is one round trip.
#[async_trait]
pub trait GeneDataSource: Send + Sync {
    async fn fetch_organism_articles(&self, organism: Organism, gene: &str) -> Result<Vec<Article>>;
    async fn fetch_ortholog_genes(&self, gene: &str) -> Result<OrthologResult>;
    async fn fetch_pharos_target(&self, gene: &str) -> Result<TargetRecord>;
    async fn fetch_melodi_presto(&self, gene: &str) -> Result<EnrichResult>;
    async fn fetch_pubmed_titles(&self, ids: &[String]) -> Result<PubMedTitles>;
    async fn fetch_gwas_info(&self, gene: &str) -> Result<GwasResult>;
}
