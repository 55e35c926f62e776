//! Loads the ingredient catalog from a JSON file.
//!
//! Usage: `load-ingredients [path]`. Without a path the file named by `INGREDIENTS_PATH` is
//! read. Entries already in the catalog are skipped, so the import can be rerun safely.

use foodgram::server::{
    config::ImportConfig,
    error::Error,
    service::ingredient::{IngredientImportEntry, IngredientService},
    startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ImportConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.ingredients_path.clone());

    if let Err(e) = run(&config, &path).await {
        tracing::error!("Failed to load ingredients from {}: {}", path, e);
        std::process::exit(1);
    }
}

async fn run(config: &ImportConfig, path: &str) -> Result<(), Error> {
    let contents = tokio::fs::read_to_string(path).await?;
    let entries: Vec<IngredientImportEntry> = serde_json::from_str(&contents)?;

    tracing::info!("Read {} ingredients from {}", entries.len(), path);

    let db = startup::connect_to_database(&config.database_url).await?;
    let summary = IngredientService::new(&db).import(entries).await?;

    tracing::info!(
        "Added {} ingredients, skipped {}",
        summary.added,
        summary.skipped
    );

    Ok(())
}
