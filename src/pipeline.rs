use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::export::records_to_csv;
use crate::models::PatientRecord;
use crate::storage::BlobStore;
use crate::transform::{display_id, enrich_resource, project_resource, validate_resource};

/// Blob holding the projected records as a JSON array.
pub const RECORDS_BLOB: &str = "processed_patients.json";

/// Blob holding the CSV rendering, wrapped under the `csv_data` key.
pub const CSV_BLOB: &str = "processed_patients.csv";

/// Run every resource through validate → enrich → project.
///
/// Resources are handled strictly in input order; the output keeps
/// that order for the subset that survives. Invalid or malformed
/// resources are logged and skipped, never fail the batch.
pub fn process_patients(resources: &[Value]) -> Vec<PatientRecord> {
    let mut records = Vec::with_capacity(resources.len());

    for resource in resources {
        let violations = validate_resource(resource);
        if !violations.is_empty() {
            tracing::warn!(
                "⚠ Skipping resource {}: {}",
                display_id(resource),
                violations.join("; ")
            );
            continue;
        }

        let enriched = enrich_resource(resource);

        match project_resource(&enriched) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::error!("✗ Failed to project resource {}: {}", display_id(resource), e);
            }
        }
    }

    records
}

/// Process the batch and persist both artifacts.
///
/// Storage failures abort the run; per-resource validation and
/// projection failures only skip the offending resource.
pub async fn run(resources: &[Value], store: &dyn BlobStore) -> Result<Vec<PatientRecord>> {
    let records = process_patients(resources);

    if records.is_empty() {
        tracing::warn!("⚠ No resources survived processing, nothing to persist");
        return Ok(records);
    }

    let payload = serde_json::to_value(&records).context("Failed serializing records")?;
    store
        .upload_json(&payload, RECORDS_BLOB)
        .await
        .with_context(|| format!("Failed uploading {}", RECORDS_BLOB))?;

    let csv_data = records_to_csv(&records)?;
    store
        .upload_json(&json!({ "csv_data": csv_data }), CSV_BLOB)
        .await
        .with_context(|| format!("Failed uploading {}", CSV_BLOB))?;

    tracing::info!(
        "✓ Persisted {} records to {} and {}",
        records.len(),
        RECORDS_BLOB,
        CSV_BLOB
    );
    Ok(records)
}

/// Default two-patient dataset processed when no other input is wired
/// up.
pub fn sample_patients() -> Vec<Value> {
    vec![
        json!({
            "resourceType": "Patient",
            "id": "pat1",
            "name": [{ "family": "Smith", "given": ["John"] }],
            "gender": "male",
            "birthDate": "1974-12-25",
            "address": [{
                "line": ["123 Main St"],
                "city": "Anytown",
                "state": "CA",
                "postalCode": "12345"
            }]
        }),
        json!({
            "resourceType": "Patient",
            "id": "pat2",
            "name": [{ "family": "Johnson", "given": ["Sarah"] }],
            "gender": "female",
            "birthDate": "1985-06-15",
            "address": [{
                "line": ["456 Oak Ave"],
                "city": "Somewhere",
                "state": "NY",
                "postalCode": "67890"
            }]
        }),
    ]
}
