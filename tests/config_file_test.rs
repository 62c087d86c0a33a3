use anyhow::Result;
use gene_data_client::utils::validation::Validate;
use gene_data_client::{ClientConfig, GeneDataClient, GeneDataSource, Organism};
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// Config file pointing at a mock backend drives real requests
#[tokio::test]
async fn test_client_from_toml_file() -> Result<()> {
    let server = MockServer::start_async().await;
    let temp_dir = TempDir::new()?;

    let config_content = format!(
        r#"
api_base_url = "{}"
api_base_path = "{}"
organisms = ["human", "zebrafish"]
default_limit = 10
timeout_seconds = 5
user_agent = "gene-data-tests/0.1"
"#,
        server.url("/"),
        server.url("/mouseclinic/")
    );

    let config_path = temp_dir.path().join("gene-data.toml");
    tokio::fs::write(&config_path, config_content).await?;

    let config = ClientConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.organisms, vec![Organism::Human, Organism::Zebrafish]);
    assert_eq!(config.default_limit, 10);

    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/getZebrafish/")
                .query_param("g", "brca2")
                .header("user-agent", "gene-data-tests/0.1");
            then.status(200).json_body(json!([{"PubMedID": "1"}]));
        })
        .await;

    let client = GeneDataClient::new(config)?;
    let articles = client
        .fetch_organism_articles(Organism::Zebrafish, "brca2")
        .await?;

    api_mock.assert_async().await;
    assert_eq!(articles.len(), 1);
    Ok(())
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = ClientConfig::from_toml_str("api_base_url = ").unwrap_err();
    assert_eq!(err.category(), gene_data_client::ErrorCategory::Config);
}

#[test]
fn test_client_usable_from_blocking_code() {
    let config = ClientConfig::default().with_api_base_url("http://127.0.0.1:1/");
    let client = GeneDataClient::new(config).unwrap();

    let result = tokio_test::block_on(client.fetch_ortholog_genes("BRCA1"));
    assert!(result.is_err());
}
