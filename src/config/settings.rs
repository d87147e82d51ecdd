use crate::config::env::{self, EnvKey};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_AAD_ENDPOINT: &str = "https://login.microsoftonline.com";
pub const DEFAULT_ARM_ENDPOINT: &str = "https://management.azure.com";
pub const DEFAULT_ARM_AAD_AUDIENCE: &str = "https://management.core.windows.net/";
pub const DEFAULT_API_VERSION: &str = "2018-07-01";
pub const DEFAULT_BLOB_ENDPOINT: &str = "https://{account}.blob.core.windows.net";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Coordinates and credentials of the Media Services account the functions act on.
#[derive(Clone, Debug, Deserialize)]
pub struct MediaServicesConfig {
    pub subscription_id: String,
    pub resource_group: String,
    pub account_name: String,
    pub aad_tenant_id: String,
    pub aad_client_id: String,
    pub aad_secret: String,
    pub aad_endpoint: String,
    pub arm_endpoint: String,
    pub arm_aad_audience: String,
    pub api_version: String,
}

impl MediaServicesConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            subscription_id: required(EnvKey::SubscriptionId)?,
            resource_group: required(EnvKey::ResourceGroup)?,
            account_name: required(EnvKey::AccountName)?,
            aad_tenant_id: required(EnvKey::AadTenantId)?,
            aad_client_id: required(EnvKey::AadClientId)?,
            aad_secret: required(EnvKey::AadSecret)?,
            aad_endpoint: env::get_or(EnvKey::AadEndpoint, DEFAULT_AAD_ENDPOINT),
            arm_endpoint: env::get_or(EnvKey::ArmEndpoint, DEFAULT_ARM_ENDPOINT),
            arm_aad_audience: env::get_or(EnvKey::ArmAadAudience, DEFAULT_ARM_AAD_AUDIENCE),
            api_version: env::get_or(EnvKey::ApiVersion, DEFAULT_API_VERSION),
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    /// When set, every function route requires this key.
    pub function_key: Option<String>,
    pub media: MediaServicesConfig,
    /// Blob endpoint template; `{account}` is replaced by the storage account name.
    pub blob_endpoint: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 7071),
            function_key: env::get_opt(EnvKey::FunctionKey),
            media: MediaServicesConfig::from_env()?,
            blob_endpoint: env::get_or(EnvKey::BlobEndpoint, DEFAULT_BLOB_ENDPOINT),
        })
    }
}

fn required(key: EnvKey) -> Result<String, ConfigError> {
    env::get_opt(key).ok_or(ConfigError::Missing(key.as_str()))
}
