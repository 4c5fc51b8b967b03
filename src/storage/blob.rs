use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;

use super::StorageConfig;
use crate::models::StorageError;

/// Storage collaborator contract: JSON blobs with overwrite-on-upload.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Serialize `data` and store it under `blob_name`, replacing any
    /// existing blob of that name.
    async fn upload_json(&self, data: &Value, blob_name: &str) -> Result<(), StorageError>;

    /// Fetch and parse the blob named `blob_name`; `None` when the
    /// blob does not exist.
    async fn download_json(&self, blob_name: &str) -> Result<Option<Value>, StorageError>;
}

/// Azure Blob Storage client authenticating with a SAS token.
pub struct AzureBlobClient {
    http: Client,
    blob_endpoint: String,
    sas_token: String,
    container: String,
}

impl AzureBlobClient {
    /// Create a client for the container named in `config`.
    pub fn new(config: &StorageConfig<'_>) -> Self {
        Self {
            http: Client::new(),
            blob_endpoint: config.blob_endpoint.trim_end_matches('/').to_string(),
            sas_token: config.sas_token.trim_start_matches('?').to_string(),
            container: config.container.to_string(),
        }
    }

    /// Full request URL for a blob, SAS token appended.
    fn blob_url(&self, blob_name: &str) -> String {
        format!(
            "{}/{}/{}?{}",
            self.blob_endpoint, self.container, blob_name, self.sas_token
        )
    }
}

#[async_trait]
impl BlobStore for AzureBlobClient {
    async fn upload_json(&self, data: &Value, blob_name: &str) -> Result<(), StorageError> {
        let body = serde_json::to_string(data).map_err(|source| StorageError::Json {
            blob_name: blob_name.to_string(),
            source,
        })?;

        let response = self
            .http
            .put(self.blob_url(blob_name))
            .header("x-ms-blob-type", "BlockBlob")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StorageError::UnexpectedStatus {
                blob_name: blob_name.to_string(),
                status: response.status(),
            });
        }

        tracing::info!("✓ Uploaded {}", blob_name);
        Ok(())
    }

    async fn download_json(&self, blob_name: &str) -> Result<Option<Value>, StorageError> {
        let response = self.http.get(self.blob_url(blob_name)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("Blob {} not found", blob_name);
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StorageError::UnexpectedStatus {
                blob_name: blob_name.to_string(),
                status: response.status(),
            });
        }

        let bytes = response.bytes().await?;
        let value = serde_json::from_slice(&bytes).map_err(|source| StorageError::Json {
            blob_name: blob_name.to_string(),
            source,
        })?;

        tracing::debug!("✓ Downloaded {}", blob_name);
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_url_joins_endpoint_container_and_sas() {
        let config = StorageConfig::new(
            "https://acct.blob.core.windows.net/",
            "?sv=2022-11-02&sig=abc",
            "patients",
        );
        let client = AzureBlobClient::new(&config);

        assert_eq!(
            client.blob_url("processed_patients.json"),
            "https://acct.blob.core.windows.net/patients/processed_patients.json?sv=2022-11-02&sig=abc"
        );
    }
}
