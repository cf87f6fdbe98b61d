//! tarotd - tarot reading daemon

use anyhow::{Context, Result};
use std::sync::Arc;
use tarot_shared::CardCatalog;
use tarotd::{
    server, AppState, Config, GeminiClient, GenerationParams, InterpretationGenerator,
    ReadingPipeline, SqliteReadingStore,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("[BOOT] tarotd v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    let catalog = CardCatalog::standard();
    let issues = catalog.validate();
    if !issues.is_empty() {
        for issue in &issues {
            error!("[FATAL] Card catalog: {}", issue);
        }
        std::process::exit(78);
    }
    info!("[BOOT] Card catalog ready ({} cards)", catalog.len());

    let api_key = match config.llm.api_key() {
        Ok(key) => key,
        Err(e) => {
            error!("[FATAL] {:#}", e);
            std::process::exit(78);
        }
    };
    let client = GeminiClient::new(&config.llm, api_key)?;
    let generator = InterpretationGenerator::new(
        Arc::new(client),
        GenerationParams::from(&config.llm),
    );
    info!("[BOOT] Text generation: model={}", generator.model());

    let store = SqliteReadingStore::open(&config.store.path)
        .context("Failed to open reading store")?;
    info!("[BOOT] Reading store at {}", store.path().display());

    let pipeline = ReadingPipeline::new(catalog, generator, Arc::new(store));

    info!("[READY] tarotd operational");
    server::run(AppState::new(pipeline), &config.server).await
}
