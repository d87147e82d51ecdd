use async_trait::async_trait;
use thiserror::Error;

pub mod azure;
pub mod container;

pub use container::BlobContainer;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("invalid storage account key: {0}")]
    InvalidKey(String),
    #[error("failed to sign container access: {0}")]
    Signing(String),
    #[error("invalid container url: {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("storage request for {resource} failed with status {status}: {message}")]
    Status {
        resource: String,
        status: u16,
        message: String,
    },
    #[error("failed to parse blob listing: {0}")]
    Xml(#[from] quick_xml::DeError),
}

/// Blobs whose server-side copy was accepted by the storage service.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CopySummary {
    pub started: Vec<String>,
}

#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Opens a container of a storage account the caller holds the key for.
    fn open_container(
        &self,
        account_name: &str,
        account_key: &str,
        container_name: &str,
    ) -> Result<BlobContainer, BlobError>;

    /// Starts a server-side copy of every blob in `source` (or only those in
    /// `file_names`) into `destination`. Returns once each copy is accepted;
    /// completion is not awaited.
    async fn copy_blobs(
        &self,
        source: &BlobContainer,
        destination: &BlobContainer,
        file_names: Option<&[String]>,
    ) -> Result<CopySummary, BlobError>;
}
