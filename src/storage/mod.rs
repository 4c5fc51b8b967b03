pub mod blob;
pub mod config;

pub use blob::{AzureBlobClient, BlobStore};
pub use config::StorageConfig;
