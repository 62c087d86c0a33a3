use crate::config::ClientConfig;
use crate::core::normalize::orthologs_by_species;
use crate::core::request;
use crate::domain::model::{
    Article, EnrichResult, GwasResult, Organism, OrthologRecord, OrthologResult, PubMedTitles,
    TargetRecord,
};
use crate::domain::ports::{ConfigProvider, GeneDataSource};
use crate::utils::error::{GeneDataError, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the gene data backends. Cheap to clone; clones share the
/// connection pool and the config.
#[derive(Debug, Clone)]
pub struct GeneDataClient {
    config: Arc<ClientConfig>,
    client: Client,
}

impl GeneDataClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self::with_http_client(config, builder.build()?))
    }

    pub fn with_http_client(config: ClientConfig, client: Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json(&self, url: &str, context: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        read_json(response, context).await
    }
}

/// Non-2xx becomes `UpstreamError`; anything that is not JSON becomes `ParseError`.
async fn read_json(response: Response, context: &str) -> Result<Value> {
    let status = response.status();
    tracing::debug!("{} response status: {}", context, status);

    let body = response.text().await?;
    if !status.is_success() {
        return Err(GeneDataError::UpstreamError {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| GeneDataError::parse(context, e))
}

fn decode<T: DeserializeOwned>(value: Value, context: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| GeneDataError::parse(context, e))
}

/// Pulls `data.target` out of a Pharos envelope.
fn pharos_target(envelope: Value) -> Result<TargetRecord> {
    match envelope.pointer("/data/target") {
        Some(target) if !target.is_null() => decode(target.clone(), "Pharos target"),
        _ => {
            let messages: Vec<String> = envelope
                .get("errors")
                .and_then(Value::as_array)
                .map(|errors| {
                    errors
                        .iter()
                        .map(|e| {
                            e.get("message")
                                .and_then(Value::as_str)
                                .map(str::to_string)
                                .unwrap_or_else(|| e.to_string())
                        })
                        .collect()
                })
                .unwrap_or_default();

            if messages.is_empty() {
                Err(GeneDataError::parse("Pharos target", "response has no data.target"))
            } else {
                Err(GeneDataError::UpstreamGraphQlError { messages })
            }
        }
    }
}

/// The proxy wraps the Melodi result in a JSON string, so it is decoded twice.
fn decode_embedded_json(value: Value) -> Result<EnrichResult> {
    match value {
        Value::String(inner) => serde_json::from_str(&inner)
            .map_err(|e| GeneDataError::parse("Melodi Presto embedded result", e)),
        other => Err(GeneDataError::parse(
            "Melodi Presto",
            format!("expected a JSON-encoded string, got {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait::async_trait]
impl GeneDataSource for GeneDataClient {
    async fn fetch_organism_articles(&self, organism: Organism, gene: &str) -> Result<Vec<Article>> {
        let url = request::organism_articles_url(self.config.api_base_url(), organism, gene);
        let body = self.get_json(&url, "organism articles").await?;
        let articles: Vec<Article> = decode(body, "organism articles")?;

        tracing::debug!("Fetched {} {} articles for {}", articles.len(), organism, gene);
        Ok(articles)
    }

    async fn fetch_ortholog_genes(&self, gene: &str) -> Result<OrthologResult> {
        let url = request::ortholog_overview_url(self.config.api_base_url(), gene);
        let body = self.get_json(&url, "ortholog overview").await?;
        let records: Vec<OrthologRecord> = decode(body, "ortholog overview")?;

        let orthologs = orthologs_by_species(records);
        tracing::debug!("Fetched orthologs for {} in {} species", gene, orthologs.len());
        Ok(orthologs)
    }

    async fn fetch_pharos_target(&self, gene: &str) -> Result<TargetRecord> {
        let url = self.config.pharos_url();
        tracing::debug!("POST {} (Pharos target {})", url, gene);

        let response = self
            .client
            .post(url)
            .json(&request::pharos_request(gene))
            .send()
            .await?;
        let envelope = read_json(response, "Pharos response").await?;

        pharos_target(envelope)
    }

    async fn fetch_melodi_presto(&self, gene: &str) -> Result<EnrichResult> {
        let url = request::melodi_presto_url(self.config.melodi_url(), gene);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let outer = read_json(response, "Melodi Presto").await?;

        decode_embedded_json(outer)
    }

    async fn fetch_pubmed_titles(&self, ids: &[String]) -> Result<PubMedTitles> {
        let url = request::pubmed_titles_url(self.config.api_base_url(), ids);
        self.get_json(&url, "PubMed titles").await
    }

    async fn fetch_gwas_info(&self, gene: &str) -> Result<GwasResult> {
        let url = request::gwas_info_url(self.config.api_base_url(), gene);
        self.get_json(&url, "GWAS information").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pharos_target_extracted() {
        let target = pharos_target(json!({
            "data": {"target": {"name": "Cellular tumor antigen p53", "tdl": "Tchem", "fam": "TF", "novelty": 0.0001}}
        }))
        .unwrap();
        assert_eq!(target.name.as_deref(), Some("Cellular tumor antigen p53"));
        assert_eq!(target.fam.as_deref(), Some("TF"));
    }

    #[test]
    fn test_pharos_missing_target_is_parse_error() {
        for envelope in [json!({}), json!({"data": {}}), json!({"data": {"target": null}})] {
            let err = pharos_target(envelope).unwrap_err();
            assert!(matches!(err, GeneDataError::ParseError { .. }), "got {:?}", err);
        }
    }

    #[test]
    fn test_pharos_graphql_errors_are_upstream() {
        let err = pharos_target(json!({
            "errors": [{"message": "Syntax Error: Expected Name"}],
            "data": null
        }))
        .unwrap_err();
        match err {
            GeneDataError::UpstreamGraphQlError { messages } => {
                assert_eq!(messages, vec!["Syntax Error: Expected Name"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_double_decode() {
        let decoded = decode_embedded_json(json!("{\"a\":1}")).unwrap();
        assert_eq!(decoded, json!({"a": 1}));
    }

    #[test]
    fn test_double_decode_failures() {
        assert!(matches!(
            decode_embedded_json(json!("not json")),
            Err(GeneDataError::ParseError { .. })
        ));
        assert!(matches!(
            decode_embedded_json(json!({"a": 1})),
            Err(GeneDataError::ParseError { .. })
        ));
    }

    #[test]
    fn test_client_keeps_config() {
        let client = GeneDataClient::new(ClientConfig::default().with_api_base_url("http://localhost:1/")).unwrap();
        assert_eq!(client.config().api_base_url, "http://localhost:1/");
    }
}
