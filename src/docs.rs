use crate::infrastructure::media::models::JobState;
use crate::middleware::function_key::FUNCTION_KEY_HEADER;
use crate::modules::asset::dto::*;
use crate::modules::job::dto::*;
use crate::modules::transform::dto::*;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::asset::handler::create_empty_asset,
        crate::modules::asset::handler::start_blob_container_copy_to_asset,
        crate::modules::transform::handler::create_transform,
        crate::modules::job::handler::submit_media_job,
        crate::modules::job::handler::monitor_media_job,
        crate::modules::job::handler::monitor_media_job_query,
    ),
    components(
        schemas(
            CreateEmptyAssetRequest, CreateEmptyAssetResponse,
            StartBlobContainerCopyRequest, StartBlobContainerCopyResponse,
            CreateTransformRequest, CreateTransformResponse,
            SubmitMediaJobRequest, SubmitMediaJobResponse,
            MonitorMediaJobRequest, MonitorMediaJobResponse,
            JobState,
        )
    ),
    tags(
        (name = "Assets", description = "Asset creation and blob ingest"),
        (name = "Transforms", description = "Encoding and analysis recipes"),
        (name = "Jobs", description = "Job submission and monitoring")
    ),
    security(
        ("function_key" = [])
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "function_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(FUNCTION_KEY_HEADER))),
            );
        }
    }
}
