pub mod export;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod transform;

pub use models::{PatientRecord, StorageError, TransformError};
pub use storage::{AzureBlobClient, BlobStore, StorageConfig};
