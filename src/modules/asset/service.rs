use super::dto::{
    CreateEmptyAssetRequest, CreateEmptyAssetResponse, StartBlobContainerCopyRequest,
    StartBlobContainerCopyResponse,
};
use crate::common::error::{AppError, required};
use crate::common::naming::{legacy_asset_id, legacy_container_name, unique_name};
use crate::infrastructure::media::models::{
    Asset, AssetContainerPermission, AssetProperties, ListContainerSasInput,
    StorageEncryptionFormat,
};
use crate::infrastructure::storage::BlobContainer;
use crate::state::AppState;
use anyhow::anyhow;
use time::{Duration, OffsetDateTime};
use tracing::info;

const CONTAINER_SAS_LIFETIME: Duration = Duration::hours(4);

pub struct AssetService;

impl AssetService {
    pub async fn create_empty_asset(
        state: AppState,
        req: CreateEmptyAssetRequest,
    ) -> Result<CreateEmptyAssetResponse, AppError> {
        let prefix = required(req.asset_name_prefix, "assetNamePrefix")?;
        let asset_name = unique_name(&prefix);

        let asset = Self::create_asset(&state, &asset_name, req.asset_storage_account).await?;
        let asset_id = asset
            .properties
            .asset_id
            .ok_or_else(|| anyhow!("Asset {} was created without an assetId", asset_name))?;

        info!("Created asset {}", asset_name);

        Ok(CreateEmptyAssetResponse {
            asset_name,
            asset_id: legacy_asset_id(&asset_id),
            destination_container: legacy_container_name(&asset_id),
        })
    }

    /// Creates an unencrypted asset whose alternate id and description are its name.
    pub async fn create_asset(
        state: &AppState,
        name: &str,
        storage_account: Option<String>,
    ) -> Result<Asset, AppError> {
        let properties = AssetProperties {
            alternate_id: Some(name.to_string()),
            description: Some(name.to_string()),
            storage_account_name: storage_account,
            storage_encryption_format: StorageEncryptionFormat::None,
            ..Default::default()
        };

        Ok(state.media.create_or_update_asset(name, &properties).await?)
    }

    pub async fn start_blob_container_copy(
        state: AppState,
        req: StartBlobContainerCopyRequest,
    ) -> Result<StartBlobContainerCopyResponse, AppError> {
        let asset_name = required(req.asset_name, "assetName")?;
        let account_name = required(req.source_storage_account_name, "sourceStorageAccountName")?;
        let account_key = required(req.source_storage_account_key, "sourceStorageAccountKey")?;
        let source_container = required(req.source_container, "sourceContainer")?;

        let asset = state
            .media
            .get_asset(&asset_name)
            .await?
            .ok_or_else(|| AppError::not_found("Asset not found"))?;

        let source = state
            .blobs
            .open_container(&account_name, &account_key, &source_container)?;

        let sas = state
            .media
            .list_container_sas(
                &asset_name,
                &ListContainerSasInput {
                    permissions: AssetContainerPermission::ReadWrite,
                    expiry_time: OffsetDateTime::now_utc() + CONTAINER_SAS_LIFETIME,
                },
            )
            .await?;
        let sas_url = sas
            .asset_container_sas_urls
            .first()
            .ok_or_else(|| anyhow!("No container SAS URL returned for asset {}", asset_name))?;
        let destination = BlobContainer::from_sas_url(sas_url)?;

        let summary = state
            .blobs
            .copy_blobs(&source, &destination, req.file_names.as_deref())
            .await?;

        info!(
            "Started copy of {} blob(s) from {}/{} into asset {}",
            summary.started.len(),
            account_name,
            source_container,
            asset_name
        );

        Ok(StartBlobContainerCopyResponse {
            destination_container: asset
                .container_name()
                .unwrap_or_else(|| destination.name().to_string()),
        })
    }
}
