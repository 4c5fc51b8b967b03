use std::borrow::Cow;
use std::env;

use crate::models::StorageError;

/// Blob storage configuration with `Cow` for flexible string handling.
///
/// Resolved once at process start and passed by reference to the
/// storage client; a missing setting aborts startup.
#[derive(Debug, Clone)]
pub struct StorageConfig<'a> {
    pub blob_endpoint: Cow<'a, str>,
    pub sas_token: Cow<'a, str>,
    pub container: Cow<'a, str>,
}

impl<'a> StorageConfig<'a> {
    /// Create new storage configuration
    pub fn new(
        blob_endpoint: impl Into<Cow<'a, str>>,
        sas_token: impl Into<Cow<'a, str>>,
        container: impl Into<Cow<'a, str>>,
    ) -> Self {
        Self {
            blob_endpoint: blob_endpoint.into(),
            sas_token: sas_token.into(),
            container: container.into(),
        }
    }

    /// Build configuration from an Azure storage connection string.
    ///
    /// Only the `BlobEndpoint` and `SharedAccessSignature` segments
    /// are consumed; anything else is ignored.
    pub fn from_connection_string(
        raw: &str,
        container: impl Into<Cow<'a, str>>,
    ) -> Result<Self, StorageError> {
        let mut blob_endpoint = None;
        let mut sas_token = None;

        for segment in raw.split(';').filter(|segment| !segment.is_empty()) {
            // SAS tokens contain '=' themselves, split at the first one only
            if let Some((key, value)) = segment.split_once('=') {
                match key.trim() {
                    "BlobEndpoint" => blob_endpoint = Some(value.to_string()),
                    "SharedAccessSignature" => sas_token = Some(value.to_string()),
                    _ => {}
                }
            }
        }

        let blob_endpoint = blob_endpoint.ok_or_else(|| {
            StorageError::BadConnectionString("missing BlobEndpoint segment".to_string())
        })?;
        let sas_token = sas_token.ok_or_else(|| {
            StorageError::BadConnectionString("missing SharedAccessSignature segment".to_string())
        })?;

        Ok(Self::new(blob_endpoint, sas_token, container))
    }

    /// Load configuration from environment variables, fail-fast.
    pub fn from_env() -> Result<StorageConfig<'static>, StorageError> {
        let connection_string = env::var("AZURE_STORAGE_CONNECTION_STRING")
            .map_err(|_| StorageError::MissingSetting("AZURE_STORAGE_CONNECTION_STRING"))?;
        let container = env::var("AZURE_STORAGE_CONTAINER_NAME")
            .map_err(|_| StorageError::MissingSetting("AZURE_STORAGE_CONTAINER_NAME"))?;

        StorageConfig::from_connection_string(&connection_string, container)
    }
}
