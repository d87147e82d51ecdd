use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransformRequest {
    pub transform_name: Option<String>,
    /// Transform outputs, each `{ "preset": {...}, "onError"?, "relativePriority"? }`.
    /// The preset is recognised by its `@odata.type`, by a wrapper key such as
    /// `builtInStandardEncoderPreset`, or by its fields.
    #[schema(value_type = Option<Vec<Object>>)]
    pub transform_outputs: Option<Vec<Value>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransformResponse {
    pub transform_id: String,
}
