use std::env;
use std::str::FromStr;

#[derive(Clone, Copy, Debug)]
pub enum EnvKey {
    ServerPort,
    FunctionKey,
    SubscriptionId,
    ResourceGroup,
    AccountName,
    AadTenantId,
    AadClientId,
    AadSecret,
    AadEndpoint,
    ArmEndpoint,
    ArmAadAudience,
    ApiVersion,
    BlobEndpoint,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::FunctionKey => "FUNCTION_KEY",
            EnvKey::SubscriptionId => "AMS_SUBSCRIPTION_ID",
            EnvKey::ResourceGroup => "AMS_RESOURCE_GROUP",
            EnvKey::AccountName => "AMS_ACCOUNT_NAME",
            EnvKey::AadTenantId => "AMS_AAD_TENANT_ID",
            EnvKey::AadClientId => "AMS_AAD_CLIENT_ID",
            EnvKey::AadSecret => "AMS_AAD_SECRET",
            EnvKey::AadEndpoint => "AMS_AAD_ENDPOINT",
            EnvKey::ArmEndpoint => "AMS_ARM_ENDPOINT",
            EnvKey::ArmAadAudience => "AMS_ARM_AAD_AUDIENCE",
            EnvKey::ApiVersion => "AMS_API_VERSION",
            EnvKey::BlobEndpoint => "STORAGE_BLOB_ENDPOINT",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_opt(key: EnvKey) -> Option<String> {
    env::var(key.as_str()).ok().filter(|v| !v.trim().is_empty())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    get_opt(key).unwrap_or_else(|| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
