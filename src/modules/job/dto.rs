use crate::infrastructure::media::models::JobState;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// --- SubmitMediaJob ---

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMediaJobRequest {
    pub input_asset_name: Option<String>,
    pub transform_name: Option<String>,
    /// Output assets are named `<outputAssetNamePrefix>-<uuid>`.
    pub output_asset_name_prefix: Option<String>,
    pub asset_storage_account: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMediaJobResponse {
    pub job_name: String,
    /// Output asset of the last encoder preset, if any.
    pub encoder_output_asset_name: Option<String>,
    /// Output asset of the last analyzer preset, if any.
    pub video_analyzer_output_asset_name: Option<String>,
}

// --- MonitorMediaJob ---

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MonitorMediaJobRequest {
    pub job_name: Option<String>,
    pub transform_name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonitorMediaJobResponse {
    pub job_status: JobState,
}
