use super::dto::{
    MonitorMediaJobRequest, MonitorMediaJobResponse, SubmitMediaJobRequest,
    SubmitMediaJobResponse,
};
use super::service::JobService;
use crate::common::extract::JsonBody;
use crate::common::response::ApiSuccess;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

/// Submit a job for an input asset
#[utoipa::path(
    post,
    path = "/api/SubmitMediaJob",
    request_body = SubmitMediaJobRequest,
    responses(
        (status = 200, description = "Job submitted", body = SubmitMediaJobResponse),
        (status = 400, description = "Missing input, asset/transform not found or management API error", body = String),
        (status = 401, description = "Missing or invalid function key")
    ),
    tag = "Jobs",
    security(("function_key" = []))
)]
pub async fn submit_media_job(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SubmitMediaJobRequest>,
) -> impl IntoResponse {
    info!("SubmitMediaJob was triggered");

    match JobService::submit_job(state, req).await {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get the state of a job
#[utoipa::path(
    post,
    path = "/api/MonitorMediaJob",
    request_body = MonitorMediaJobRequest,
    responses(
        (status = 200, description = "Job state", body = MonitorMediaJobResponse),
        (status = 400, description = "Missing input, job not found or management API error", body = String),
        (status = 401, description = "Missing or invalid function key")
    ),
    tag = "Jobs",
    security(("function_key" = []))
)]
pub async fn monitor_media_job(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<MonitorMediaJobRequest>,
) -> impl IntoResponse {
    info!("MonitorMediaJob was triggered");

    match JobService::monitor_job(state, req).await {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get the state of a job (query parameters)
#[utoipa::path(
    get,
    path = "/api/MonitorMediaJob",
    params(MonitorMediaJobRequest),
    responses(
        (status = 200, description = "Job state", body = MonitorMediaJobResponse),
        (status = 400, description = "Missing input, job not found or management API error", body = String),
        (status = 401, description = "Missing or invalid function key")
    ),
    tag = "Jobs",
    security(("function_key" = []))
)]
pub async fn monitor_media_job_query(
    State(state): State<AppState>,
    Query(req): Query<MonitorMediaJobRequest>,
) -> impl IntoResponse {
    info!("MonitorMediaJob was triggered");

    match JobService::monitor_job(state, req).await {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}
