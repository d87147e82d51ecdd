use super::dto::{CreateTransformRequest, CreateTransformResponse};
use super::service::TransformService;
use crate::common::extract::JsonBody;
use crate::common::response::ApiSuccess;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::info;

/// Create a transform unless one with the same name exists
#[utoipa::path(
    post,
    path = "/api/CreateTransform",
    request_body = CreateTransformRequest,
    responses(
        (status = 200, description = "Transform id", body = CreateTransformResponse),
        (status = 400, description = "Missing input, invalid outputs or management API error", body = String),
        (status = 401, description = "Missing or invalid function key")
    ),
    tag = "Transforms",
    security(("function_key" = []))
)]
pub async fn create_transform(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTransformRequest>,
) -> impl IntoResponse {
    info!("CreateTransform was triggered");

    match TransformService::create_transform(state, req).await {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}
