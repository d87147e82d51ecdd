use super::dto::{CreateTransformRequest, CreateTransformResponse};
use crate::common::error::{AppError, required};
use crate::infrastructure::media::models::TransformOutput;
use crate::state::AppState;
use anyhow::anyhow;
use tracing::info;

pub struct TransformService;

impl TransformService {
    /// Returns the existing transform of that name, creating it first if needed.
    ///
    /// Lookup and creation are two separate calls. A concurrent create of the
    /// same name surfaces as a management API error and is not retried.
    pub async fn create_transform(
        state: AppState,
        req: CreateTransformRequest,
    ) -> Result<CreateTransformResponse, AppError> {
        let transform_name = required(req.transform_name, "transformName")?;
        let raw_outputs = required(req.transform_outputs, "transformOutputs")?;

        let outputs = raw_outputs
            .into_iter()
            .enumerate()
            .map(|(i, raw)| {
                serde_json::from_value::<TransformOutput>(raw)
                    .map_err(|e| anyhow!("transformOutputs[{}] is invalid: {}", i, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let transform = match state.media.get_transform(&transform_name).await? {
            Some(existing) => {
                info!("Transform {} already exists", transform_name);
                existing
            }
            None => {
                info!(
                    "Creating transform {} with {} output(s)",
                    transform_name,
                    outputs.len()
                );
                state
                    .media
                    .create_or_update_transform(&transform_name, &outputs)
                    .await?
            }
        };

        Ok(CreateTransformResponse {
            transform_id: transform.id,
        })
    }
}
