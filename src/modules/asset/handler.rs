use super::dto::{
    CreateEmptyAssetRequest, CreateEmptyAssetResponse, StartBlobContainerCopyRequest,
    StartBlobContainerCopyResponse,
};
use super::service::AssetService;
use crate::common::extract::JsonBody;
use crate::common::response::ApiSuccess;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::info;

/// Create an empty asset
#[utoipa::path(
    post,
    path = "/api/CreateEmptyAsset",
    request_body = CreateEmptyAssetRequest,
    responses(
        (status = 200, description = "Asset created", body = CreateEmptyAssetResponse),
        (status = 400, description = "Missing input or management API error", body = String),
        (status = 401, description = "Missing or invalid function key")
    ),
    tag = "Assets",
    security(("function_key" = []))
)]
pub async fn create_empty_asset(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateEmptyAssetRequest>,
) -> impl IntoResponse {
    info!("CreateEmptyAsset was triggered");

    match AssetService::create_empty_asset(state, req).await {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Start copying a blob container into an asset
///
/// Returns once the storage service has accepted a copy request for every
/// selected blob; it does not wait for the copies to finish.
#[utoipa::path(
    post,
    path = "/api/StartBlobContainerCopyToAsset",
    request_body = StartBlobContainerCopyRequest,
    responses(
        (status = 200, description = "Copy started", body = StartBlobContainerCopyResponse),
        (status = 400, description = "Missing input, asset not found or copy failure", body = String),
        (status = 401, description = "Missing or invalid function key")
    ),
    tag = "Assets",
    security(("function_key" = []))
)]
pub async fn start_blob_container_copy_to_asset(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<StartBlobContainerCopyRequest>,
) -> impl IntoResponse {
    info!("StartBlobContainerCopyToAsset was triggered");

    match AssetService::start_blob_container_copy(state, req).await {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}
