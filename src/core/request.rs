//! Request shapes for each upstream endpoint.
//!
//! REST URLs are built by plain concatenation onto the configured base URL,
//! and gene symbols are inserted as given. A symbol containing `&`, `#` or a
//! quote changes the meaning of the URL or GraphQL text; callers pass
//! trusted symbols.

use crate::domain::model::Organism;
use crate::utils::text::capitalize;
use serde::Serialize;
use serde_json::{json, Map, Value};

pub const PHAROS_OPERATION: &str = "targetDetails";

/// `{base}get{Organism}/?g={gene}`, e.g. `getMouse`, `getFruitFly`, `getC_elegans`.
pub fn organism_articles_url(base_url: &str, organism: Organism, gene: &str) -> String {
    format!("{}get{}/?g={}", base_url, capitalize(organism.as_str()), gene)
}

pub fn ortholog_overview_url(base_url: &str, gene: &str) -> String {
    format!("{}getOverviewOrthologues/?g={}", base_url, gene)
}

pub fn gwas_info_url(base_url: &str, gene: &str) -> String {
    format!("{}getGWASinformation/?g={}", base_url, gene)
}

/// One `g={id}&` per id. The trailing `&` is accepted by the backend.
pub fn pubmed_titles_query<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(|id| format!("g={}&", id.as_ref())).collect()
}

pub fn pubmed_titles_url<S: AsRef<str>>(base_url: &str, ids: &[S]) -> String {
    format!("{}getPudMedID2Title/?{}", base_url, pubmed_titles_query(ids))
}

/// Body of the Pharos POST.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub operation: String,
    pub query: String,
    pub variables: Map<String, Value>,
}

pub fn pharos_query(gene: &str) -> String {
    format!(
        r#"query {}{{
  target(q:{{sym:"{}"}}) {{
    name
    tdl
    fam
    novelty
  }}
}}"#,
        PHAROS_OPERATION, gene
    )
}

pub fn pharos_request(gene: &str) -> GraphQlRequest {
    GraphQlRequest {
        operation: PHAROS_OPERATION.to_string(),
        query: pharos_query(gene),
        variables: Map::new(),
    }
}

/// The proxy takes the Melodi query as a percent-encoded JSON `payload` parameter.
pub fn melodi_presto_url(melodi_url: &str, gene: &str) -> String {
    let payload = json!({ "query": gene }).to_string();
    format!("{}?payload={}", melodi_url, urlencoding::encode(&payload))
}
