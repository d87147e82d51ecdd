use crate::docs::ApiDoc;
use crate::middleware::function_key::function_key_guard;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn configure_routes(state: AppState) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(|| async { "ok" }))
        .nest("/api", function_routes(state))
        .layer(cors)
}

fn function_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(crate::modules::asset::router())
        .merge(crate::modules::transform::router())
        .merge(crate::modules::job::router())
        .route_layer(middleware::from_fn_with_state(state, function_key_guard))
}
