use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- CreateEmptyAsset ---

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmptyAssetRequest {
    /// Required. The asset is named `<assetNamePrefix>-<uuid>`.
    pub asset_name_prefix: Option<String>,
    /// Accepted for compatibility with older callers; ignored.
    pub asset_creation_option: Option<String>,
    /// Attached storage account to create the asset in.
    pub asset_storage_account: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmptyAssetResponse {
    pub asset_name: String,
    /// `nb:cid:UUID:<assetId>`
    pub asset_id: String,
    /// `asset-<assetId>`
    pub destination_container: String,
}

// --- StartBlobContainerCopyToAsset ---

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartBlobContainerCopyRequest {
    pub asset_name: Option<String>,
    pub source_storage_account_name: Option<String>,
    pub source_storage_account_key: Option<String>,
    pub source_container: Option<String>,
    /// Copy only these blobs; all blobs when absent.
    pub file_names: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartBlobContainerCopyResponse {
    pub destination_container: String,
}
