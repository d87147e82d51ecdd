use super::dto::{
    MonitorMediaJobRequest, MonitorMediaJobResponse, SubmitMediaJobRequest,
    SubmitMediaJobResponse,
};
use crate::common::error::{AppError, required};
use crate::common::naming::{job_name, unique_name};
use crate::infrastructure::media::models::{
    JobInput, JobInputAsset, JobOutput, JobOutputAsset, JobProperties, PresetKind,
};
use crate::modules::asset::service::AssetService;
use crate::state::AppState;
use anyhow::anyhow;
use tracing::{debug, info};

pub struct JobService;

impl JobService {
    /// Creates one output asset per transform output and submits the job.
    ///
    /// Output assets created before a failing step are not removed.
    pub async fn submit_job(
        state: AppState,
        req: SubmitMediaJobRequest,
    ) -> Result<SubmitMediaJobResponse, AppError> {
        let input_asset_name = required(req.input_asset_name, "inputAssetName")?;
        let transform_name = required(req.transform_name, "transformName")?;
        let output_prefix = required(req.output_asset_name_prefix, "outputAssetNamePrefix")?;

        let job_name = job_name();

        state
            .media
            .get_asset(&input_asset_name)
            .await?
            .ok_or_else(|| AppError::not_found("Asset for input not found"))?;
        let transform = state
            .media
            .get_transform(&transform_name)
            .await?
            .ok_or_else(|| AppError::not_found("Transform not found"))?;

        let mut encoder_output_asset_name = None;
        let mut video_analyzer_output_asset_name = None;
        let mut outputs = Vec::with_capacity(transform.properties.outputs.len());

        for output in &transform.properties.outputs {
            let output_asset_name = unique_name(&output_prefix);
            match output.preset.kind() {
                Some(PresetKind::Encoder) => {
                    encoder_output_asset_name = Some(output_asset_name.clone())
                }
                Some(PresetKind::Analyzer) => {
                    video_analyzer_output_asset_name = Some(output_asset_name.clone())
                }
                None => debug!(
                    "Output asset {} has an unclassified preset {:?}",
                    output_asset_name,
                    output.preset.odata_type()
                ),
            }

            AssetService::create_asset(
                &state,
                &output_asset_name,
                req.asset_storage_account.clone(),
            )
            .await?;
            outputs.push(JobOutput::Asset(JobOutputAsset::new(output_asset_name)));
        }

        let properties = JobProperties::new(
            JobInput::Asset(JobInputAsset {
                asset_name: input_asset_name,
            }),
            outputs,
        );
        let job = state
            .media
            .create_job(&transform_name, &job_name, &properties)
            .await?;

        info!(
            "Submitted job {} under transform {} with {} output(s)",
            job.name,
            transform_name,
            properties.outputs.len()
        );

        Ok(SubmitMediaJobResponse {
            job_name,
            encoder_output_asset_name,
            video_analyzer_output_asset_name,
        })
    }

    pub async fn monitor_job(
        state: AppState,
        req: MonitorMediaJobRequest,
    ) -> Result<MonitorMediaJobResponse, AppError> {
        let job_name = required(req.job_name, "jobName")?;
        let transform_name = required(req.transform_name, "transformName")?;

        let job = state
            .media
            .get_job(&transform_name, &job_name)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))?;

        let job_status = job
            .properties
            .state
            .ok_or_else(|| anyhow!("Job {} has no state", job_name))?;

        Ok(MonitorMediaJobResponse { job_status })
    }
}
