use anyhow::{Context, Result};

use fhir_processor::pipeline;
use fhir_processor::storage::{AzureBlobClient, StorageConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = StorageConfig::from_env().context("Failed loading storage configuration")?;
    let store = AzureBlobClient::new(&config);
    tracing::info!("✓ Storage client ready for container {}", config.container);

    let patients = pipeline::sample_patients();
    let records = pipeline::run(&patients, &store).await?;

    tracing::info!("Processed Patient Data:");
    for record in &records {
        tracing::info!(
            "{} | {} | {} | {} | {}",
            record.patient_id.as_deref().unwrap_or(""),
            record.name,
            record.gender.as_deref().unwrap_or(""),
            record.birth_date.as_deref().unwrap_or(""),
            record.address
        );
    }

    Ok(())
}
