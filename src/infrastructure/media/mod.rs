use async_trait::async_trait;
use thiserror::Error;

pub mod client;
pub mod models;

use models::{
    Asset, AssetContainerSas, AssetProperties, Job, JobProperties, ListContainerSasInput,
    Transform, TransformOutput,
};

#[derive(Debug, Error)]
pub enum MediaError {
    /// Structured error returned by the management API.
    #[error("{message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
    #[error("failed to acquire access token: {0}")]
    Auth(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid resource url: {0}")]
    InvalidUrl(String),
}

/// Operations the functions need from the Media Services account.
///
/// `get_*` return `Ok(None)` when the resource does not exist.
#[async_trait]
pub trait MediaServices: Send + Sync {
    async fn get_asset(&self, name: &str) -> Result<Option<Asset>, MediaError>;

    async fn create_or_update_asset(
        &self,
        name: &str,
        properties: &AssetProperties,
    ) -> Result<Asset, MediaError>;

    async fn list_container_sas(
        &self,
        asset_name: &str,
        input: &ListContainerSasInput,
    ) -> Result<AssetContainerSas, MediaError>;

    async fn get_transform(&self, name: &str) -> Result<Option<Transform>, MediaError>;

    async fn create_or_update_transform(
        &self,
        name: &str,
        outputs: &[TransformOutput],
    ) -> Result<Transform, MediaError>;

    async fn get_job(&self, transform_name: &str, job_name: &str)
    -> Result<Option<Job>, MediaError>;

    async fn create_job(
        &self,
        transform_name: &str,
        job_name: &str,
        properties: &JobProperties,
    ) -> Result<Job, MediaError>;
}
