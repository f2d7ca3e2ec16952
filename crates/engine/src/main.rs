//! Sheetsmith - Main entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sheetsmith_engine::cli::{self, Cli};
use sheetsmith_engine::infrastructure::{
    csv_catalogs::load_catalogs, dnd5e_api::Dnd5eApiClient, json_store::JsonFileCharacterStore,
};
use sheetsmith_engine::{App, EngineConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetsmith_engine=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();
    let config = EngineConfig::from_env();

    let catalogs = Arc::new(load_catalogs(&config));
    let store = JsonFileCharacterStore::open(&config.characters_db).await?;
    let enrichment = Dnd5eApiClient::new(&config.dnd5e_api_url, config.dnd5e_api_timeout);

    let app = Arc::new(App::new(Arc::new(store), Arc::new(enrichment), catalogs));
    cli::run(args.command, app, &config).await
}
