use crate::state::AppState;
use axum::Router;
use axum::routing::post;

pub mod dto;
pub mod handler;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/SubmitMediaJob", post(handler::submit_media_job))
        .route(
            "/MonitorMediaJob",
            post(handler::monitor_media_job).get(handler::monitor_media_job_query),
        )
}
