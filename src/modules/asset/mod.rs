use crate::state::AppState;
use axum::Router;
use axum::routing::post;

pub mod dto;
pub mod handler;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/CreateEmptyAsset", post(handler::create_empty_asset))
        .route(
            "/StartBlobContainerCopyToAsset",
            post(handler::start_blob_container_copy_to_asset),
        )
}
