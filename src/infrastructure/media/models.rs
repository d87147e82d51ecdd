//! Wire types of the Media Services v3 management API.
//!
//! Only the properties the functions read or write are modelled; unknown
//! properties returned by the service are ignored on decode.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

const ODATA_TYPE: &str = "@odata.type";

fn invalid(msg: impl std::fmt::Display) -> serde_json::Error {
    <serde_json::Error as serde::de::Error>::custom(msg)
}

// --- ASSETS ---

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageEncryptionFormat {
    #[default]
    None,
    #[serde(alias = "StorageEncrypted")]
    MediaStorageClientEncryption,
    CommonEncryptionProtected,
    EnvelopeEncryptionProtected,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetProperties {
    #[serde(default, skip_serializing)]
    pub asset_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_account_name: Option<String>,
    #[serde(default)]
    pub storage_encryption_format: StorageEncryptionFormat,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: AssetProperties,
}

impl Asset {
    /// Name of the blob container backing the asset, falling back to the
    /// `asset-<assetId>` convention when the service omits it.
    pub fn container_name(&self) -> Option<String> {
        self.properties
            .container
            .clone()
            .or_else(|| self.properties.asset_id.map(|id| format!("asset-{}", id)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetContainerPermission {
    Read,
    ReadWrite,
    ReadWriteDelete,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContainerSasInput {
    pub permissions: AssetContainerPermission,
    #[serde(with = "time::serde::rfc3339")]
    pub expiry_time: time::OffsetDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetContainerSas {
    #[serde(default)]
    pub asset_container_sas_urls: Vec<String>,
}

// --- TRANSFORMS & PRESETS ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetKind {
    Encoder,
    Analyzer,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltInStandardEncoderPreset {
    #[serde(default = "default_preset_name")]
    pub preset_name: String,
}

fn default_preset_name() -> String {
    "AdaptiveStreaming".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardEncoderPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
    #[serde(default)]
    pub codecs: Vec<Value>,
    #[serde(default)]
    pub formats: Vec<Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightsType {
    AudioInsightsOnly,
    VideoInsightsOnly,
    AllInsights,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnalyzerPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights_to_extract: Option<InsightsType>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioAnalyzerPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_language: Option<String>,
}

/// Processing recipe of a transform output.
///
/// On the wire a preset is an object discriminated by `@odata.type`. Request
/// payloads may instead name the preset with a wrapper key
/// (`{"videoAnalyzerPreset": {...}}`) or leave it to be recognised by its
/// fields. Presets of an unknown type are kept verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum Preset {
    BuiltInStandardEncoder(BuiltInStandardEncoderPreset),
    StandardEncoder(StandardEncoderPreset),
    VideoAnalyzer(VideoAnalyzerPreset),
    AudioAnalyzer(AudioAnalyzerPreset),
    Other(Map<String, Value>),
}

impl Preset {
    const BUILT_IN_STANDARD_ENCODER: &'static str = "#Microsoft.Media.BuiltInStandardEncoderPreset";
    const STANDARD_ENCODER: &'static str = "#Microsoft.Media.StandardEncoderPreset";
    const VIDEO_ANALYZER: &'static str = "#Microsoft.Media.VideoAnalyzerPreset";
    const AUDIO_ANALYZER: &'static str = "#Microsoft.Media.AudioAnalyzerPreset";

    /// Audio analyzer presets count as analyzers, so their output asset is
    /// reported as `videoAnalyzerOutputAssetName` like a video analyzer's.
    pub fn kind(&self) -> Option<PresetKind> {
        match self {
            Preset::BuiltInStandardEncoder(_) | Preset::StandardEncoder(_) => {
                Some(PresetKind::Encoder)
            }
            Preset::VideoAnalyzer(_) | Preset::AudioAnalyzer(_) => Some(PresetKind::Analyzer),
            Preset::Other(_) => None,
        }
    }

    pub fn odata_type(&self) -> Option<&str> {
        match self {
            Preset::BuiltInStandardEncoder(_) => Some(Self::BUILT_IN_STANDARD_ENCODER),
            Preset::StandardEncoder(_) => Some(Self::STANDARD_ENCODER),
            Preset::VideoAnalyzer(_) => Some(Self::VIDEO_ANALYZER),
            Preset::AudioAnalyzer(_) => Some(Self::AUDIO_ANALYZER),
            Preset::Other(map) => map.get(ODATA_TYPE).and_then(Value::as_str),
        }
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let Value::Object(mut map) = value else {
            return Err(invalid("preset must be a JSON object"));
        };

        if let Some(tag) = map.remove(ODATA_TYPE) {
            let tag = tag
                .as_str()
                .ok_or_else(|| invalid("@odata.type must be a string"))?
                .to_string();
            return match tag.as_str() {
                Self::BUILT_IN_STANDARD_ENCODER => Self::typed(map, Preset::BuiltInStandardEncoder),
                Self::STANDARD_ENCODER => Self::typed(map, Preset::StandardEncoder),
                Self::VIDEO_ANALYZER => Self::video_analyzer(map),
                Self::AUDIO_ANALYZER => Self::typed(map, Preset::AudioAnalyzer),
                _ => {
                    map.insert(ODATA_TYPE.to_string(), Value::String(tag));
                    Ok(Preset::Other(map))
                }
            };
        }

        if map.len() == 1 {
            let wrapped = [
                "builtInStandardEncoderPreset",
                "standardEncoderPreset",
                "videoAnalyzerPreset",
                "audioAnalyzerPreset",
            ]
            .into_iter()
            .find(|key| map.contains_key(*key));
            if let Some(key) = wrapped {
                let inner = match map.remove(key) {
                    Some(Value::Object(inner)) => inner,
                    _ => return Err(invalid(format!("{} must be a JSON object", key))),
                };
                return match key {
                    "builtInStandardEncoderPreset" => Self::typed(inner, Preset::BuiltInStandardEncoder),
                    "standardEncoderPreset" => Self::typed(inner, Preset::StandardEncoder),
                    "videoAnalyzerPreset" => Self::video_analyzer(inner),
                    _ => Self::typed(inner, Preset::AudioAnalyzer),
                };
            }
        }

        if map.contains_key("presetName") {
            Self::typed(map, Preset::BuiltInStandardEncoder)
        } else if map.contains_key("codecs") || map.contains_key("formats") {
            Self::typed(map, Preset::StandardEncoder)
        } else if map.contains_key("insightsToExtract") || map.contains_key("audioInsightsOnly") {
            Self::video_analyzer(map)
        } else if map.contains_key("audioLanguage") {
            Self::typed(map, Preset::AudioAnalyzer)
        } else {
            Err(invalid("unrecognized preset"))
        }
    }

    fn typed<T, F>(map: Map<String, Value>, wrap: F) -> Result<Self, serde_json::Error>
    where
        T: serde::de::DeserializeOwned,
        F: FnOnce(T) -> Preset,
    {
        serde_json::from_value(Value::Object(map)).map(wrap)
    }

    /// Maps the older `audioInsightsOnly` flag onto `insightsToExtract`.
    fn video_analyzer(mut map: Map<String, Value>) -> Result<Self, serde_json::Error> {
        if let Some(flag) = map.remove("audioInsightsOnly") {
            if flag.as_bool() == Some(true) && !map.contains_key("insightsToExtract") {
                map.insert(
                    "insightsToExtract".to_string(),
                    Value::String("AudioInsightsOnly".to_string()),
                );
            }
        }
        Self::typed(map, Preset::VideoAnalyzer)
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        let body = match self {
            Preset::BuiltInStandardEncoder(p) => serde_json::to_value(p)?,
            Preset::StandardEncoder(p) => serde_json::to_value(p)?,
            Preset::VideoAnalyzer(p) => serde_json::to_value(p)?,
            Preset::AudioAnalyzer(p) => serde_json::to_value(p)?,
            Preset::Other(map) => return Ok(Value::Object(map.clone())),
        };
        let Value::Object(mut map) = body else {
            return Err(invalid("preset did not serialize to an object"));
        };
        if let Some(tag) = self.odata_type() {
            map.insert(ODATA_TYPE.to_string(), Value::String(tag.to_string()));
        }
        Ok(Value::Object(map))
    }
}

impl Serialize for Preset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().map_err(serde::ser::Error::custom)?.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Preset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Preset::from_value(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnErrorType {
    StopProcessingJob,
    ContinueJob,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Normal,
    High,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_error: Option<OnErrorType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_priority: Option<Priority>,
    pub preset: Preset,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub outputs: Vec<TransformOutput>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transform {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: TransformProperties,
}

// --- JOBS ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum JobState {
    Queued,
    Scheduled,
    Processing,
    Finished,
    Error,
    Canceled,
    Canceling,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInputAsset {
    pub asset_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInputHttp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_uri: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@odata.type")]
pub enum JobInput {
    #[serde(rename = "#Microsoft.Media.JobInputAsset")]
    Asset(JobInputAsset),
    #[serde(rename = "#Microsoft.Media.JobInputHttp")]
    Http(JobInputHttp),
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOutputAsset {
    pub asset_name: String,
    #[serde(default, skip_serializing)]
    pub state: Option<JobState>,
    #[serde(default, skip_serializing)]
    pub progress: Option<i32>,
}

impl JobOutputAsset {
    pub fn new(asset_name: impl Into<String>) -> Self {
        Self {
            asset_name: asset_name.into(),
            state: None,
            progress: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@odata.type")]
pub enum JobOutput {
    #[serde(rename = "#Microsoft.Media.JobOutputAsset")]
    Asset(JobOutputAsset),
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProperties {
    pub input: JobInput,
    pub outputs: Vec<JobOutput>,
    #[serde(default, skip_serializing)]
    pub state: Option<JobState>,
    #[serde(default, skip_serializing)]
    pub created: Option<String>,
    #[serde(default, skip_serializing)]
    pub last_modified: Option<String>,
}

impl JobProperties {
    pub fn new(input: JobInput, outputs: Vec<JobOutput>) -> Self {
        Self {
            input,
            outputs,
            state: None,
            created: None,
            last_modified: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub properties: JobProperties,
}

/// Request envelope for create-or-update calls.
#[derive(Debug, Serialize)]
pub struct Resource<'a, P: Serialize> {
    pub properties: &'a P,
}
