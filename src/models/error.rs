use thiserror::Error;

/// Raised when a resource field is present but not the expected shape.
///
/// Projection of the offending resource is abandoned; the batch keeps
/// going with the remaining resources.
#[derive(Debug, Error)]
#[error("invalid `{field}` on resource {resource_id}: {reason}")]
pub struct TransformError {
    pub resource_id: String,
    pub field: &'static str,
    pub reason: String,
}

impl TransformError {
    /// Create a shape error for a field of `resource_id`.
    pub fn shape(
        resource_id: impl Into<String>,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            field,
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by the blob storage collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("missing required setting: {0}")]
    MissingSetting(&'static str),

    #[error("malformed connection string: {0}")]
    BadConnectionString(String),

    #[error("request to blob store failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("blob store returned {status} for {blob_name}")]
    UnexpectedStatus {
        blob_name: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid JSON payload for {blob_name}: {source}")]
    Json {
        blob_name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_error_names_field_and_resource() {
        let err = TransformError::shape("pat1", "name", "expected an array, got a string");
        assert_eq!(
            err.to_string(),
            "invalid `name` on resource pat1: expected an array, got a string"
        );
    }

    #[test]
    fn test_missing_setting_message() {
        let err = StorageError::MissingSetting("AZURE_STORAGE_CONNECTION_STRING");
        assert_eq!(
            err.to_string(),
            "missing required setting: AZURE_STORAGE_CONNECTION_STRING"
        );
    }
}
