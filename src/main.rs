use clap::Parser;
use gene_data_client::utils::{logger, validation::Validate};
use gene_data_client::{
    CliConfig, ClientConfig, Command, ErrorCategory, GeneDataClient, GeneDataError,
    GeneDataSource,
};
use serde::Serialize;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting gene-data CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(e.category()));
    }
}

async fn run(cli: &CliConfig) -> Result<(), GeneDataError> {
    let config = cli.client_config()?;
    config.validate()?;

    if let Command::Organisms = cli.command {
        return print_json(&config.organisms);
    }

    let client = GeneDataClient::new(config)?;
    dispatch(&client, client.config(), &cli.command).await
}

async fn dispatch(
    source: &dyn GeneDataSource,
    config: &ClientConfig,
    command: &Command,
) -> Result<(), GeneDataError> {
    match command {
        Command::Articles { organism, gene } => {
            let articles = source.fetch_organism_articles(*organism, gene).await?;
            tracing::info!(
                "✅ {} articles for {} ({}), default display limit {}",
                articles.len(),
                gene,
                organism,
                config.default_limit
            );
            print_json(&articles)
        }
        Command::Orthologs { gene } => print_json(&source.fetch_ortholog_genes(gene).await?),
        Command::Pharos { gene } => print_json(&source.fetch_pharos_target(gene).await?),
        Command::Melodi { gene } => print_json(&source.fetch_melodi_presto(gene).await?),
        Command::Titles { ids } => print_json(&source.fetch_pubmed_titles(ids).await?),
        Command::Gwas { gene } => print_json(&source.fetch_gwas_info(gene).await?),
        Command::Organisms => print_json(&config.organisms),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), GeneDataError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| GeneDataError::parse("output", e))?;
    println!("{}", rendered);
    Ok(())
}

fn exit_code(category: ErrorCategory) -> i32 {
    match category {
        ErrorCategory::Config => 2,
        ErrorCategory::Network => 3,
        ErrorCategory::Upstream => 4,
        ErrorCategory::Parse => 5,
    }
}
