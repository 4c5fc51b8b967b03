use anyhow::{Context, Result};

use fhir_processor::pipeline::RECORDS_BLOB;
use fhir_processor::storage::{AzureBlobClient, BlobStore, StorageConfig};

/// Fetch the last processed batch from the blob store and print it.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = StorageConfig::from_env().context("Failed loading storage configuration")?;
    let store = AzureBlobClient::new(&config);

    match store.download_json(RECORDS_BLOB).await? {
        Some(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        None => {
            tracing::warn!("⚠ {} not found in container {}", RECORDS_BLOB, config.container);
        }
    }

    Ok(())
}
