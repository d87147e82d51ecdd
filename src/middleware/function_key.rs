use crate::common::response::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

pub const FUNCTION_KEY_HEADER: &str = "x-functions-key";

/// Requires the configured function key, passed either as the
/// `x-functions-key` header or as the `code` query parameter.
pub async fn function_key_guard(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.config.function_key.as_deref() else {
        return Ok(next.run(req).await);
    };

    let from_header = req
        .headers()
        .get(FUNCTION_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    let from_query = req.uri().query().and_then(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(name, _)| name == "code")
            .map(|(_, value)| value.into_owned())
    });

    let authorized = from_header.is_some_and(|key| secure_compare(key, expected))
        || from_query.is_some_and(|key| secure_compare(&key, expected));

    if !authorized {
        return Err(ApiError(
            "Unauthorized: missing or invalid function key".to_string(),
            StatusCode::UNAUTHORIZED,
        ));
    }

    Ok(next.run(req).await)
}

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
