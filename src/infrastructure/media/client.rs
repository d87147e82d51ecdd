use super::models::{
    Asset, AssetContainerSas, AssetProperties, Job, JobProperties, ListContainerSasInput,
    Resource, Transform, TransformOutput, TransformProperties,
};
use super::{MediaError, MediaServices};
use crate::config::settings::MediaServicesConfig;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, info};
use url::Url;

// Tokens are refreshed this long before they expire.
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(300);

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<Seconds>,
}

/// The v1 token endpoint returns `expires_in` as a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Seconds {
    Number(u64),
    Text(String),
}

impl Seconds {
    fn as_secs(&self) -> Option<u64> {
        match self {
            Seconds::Number(n) => Some(*n),
            Seconds::Text(s) => s.parse().ok(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Media Services management client over the Azure Resource Manager REST API.
#[derive(Clone)]
pub struct AzureMediaClient {
    http: Client,
    config: MediaServicesConfig,
    account_url: Url,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl AzureMediaClient {
    pub fn new(config: MediaServicesConfig) -> Result<Self, MediaError> {
        let http = Client::builder().timeout(Duration::from_secs(60)).build()?;

        let mut account_url = Url::parse(&config.arm_endpoint)
            .map_err(|e| MediaError::InvalidUrl(format!("{}: {}", config.arm_endpoint, e)))?;
        account_url
            .path_segments_mut()
            .map_err(|_| MediaError::InvalidUrl(config.arm_endpoint.clone()))?
            .pop_if_empty()
            .extend([
                "subscriptions",
                config.subscription_id.as_str(),
                "resourceGroups",
                config.resource_group.as_str(),
                "providers",
                "Microsoft.Media",
                "mediaServices",
                config.account_name.as_str(),
            ]);

        info!("Media Services client ready for account {}", config.account_name);

        Ok(Self {
            http,
            config,
            account_url,
            token: Arc::new(Mutex::new(None)),
        })
    }

    fn resource_url(&self, segments: &[&str]) -> Result<Url, MediaError> {
        let mut url = self.account_url.clone();
        url.path_segments_mut()
            .map_err(|_| MediaError::InvalidUrl(self.account_url.to_string()))?
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("api-version", &self.config.api_version);
        Ok(url)
    }

    async fn access_token(&self) -> Result<String, MediaError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.expires_at > Instant::now() + TOKEN_REFRESH_MARGIN {
                return Ok(token.access_token.clone());
            }
        }

        let url = format!(
            "{}/{}/oauth2/token",
            self.config.aad_endpoint.trim_end_matches('/'),
            self.config.aad_tenant_id
        );
        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.aad_client_id.as_str()),
                ("client_secret", self.config.aad_secret.as_str()),
                ("resource", self.config.arm_aad_audience.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Auth(format!("{}: {}", status, body)));
        }

        let token: TokenResponse = response.json().await?;
        let lifetime = token
            .expires_in
            .as_ref()
            .and_then(Seconds::as_secs)
            .unwrap_or(3600);
        debug!("Acquired management API token valid for {}s", lifetime);

        *cached = Some(CachedToken {
            access_token: token.access_token.clone(),
            expires_at: Instant::now() + Duration::from_secs(lifetime),
        });
        Ok(token.access_token)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, MediaError> {
        let token = self.access_token().await?;
        let response = request.bearer_auth(token).send().await?;
        let status = response.status();
        debug!("Management API responded {} for {}", status, response.url().path());

        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, MediaError> {
        match self.execute(self.http.get(url)).await {
            Ok(resource) => Ok(Some(resource)),
            Err(MediaError::Api { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn api_error(status: StatusCode, body: &[u8]) -> MediaError {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(ErrorResponse { error }) => MediaError::Api {
            status: status.as_u16(),
            code: error.code,
            message: error.message,
        },
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            MediaError::Api {
                status: status.as_u16(),
                code: status.canonical_reason().unwrap_or("Unknown").to_string(),
                message: if text.is_empty() {
                    format!("Operation returned an invalid status code '{}'", status)
                } else {
                    text
                },
            }
        }
    }
}

#[async_trait]
impl MediaServices for AzureMediaClient {
    async fn get_asset(&self, name: &str) -> Result<Option<Asset>, MediaError> {
        self.get(self.resource_url(&["assets", name])?).await
    }

    async fn create_or_update_asset(
        &self,
        name: &str,
        properties: &AssetProperties,
    ) -> Result<Asset, MediaError> {
        let url = self.resource_url(&["assets", name])?;
        self.execute(self.http.put(url).json(&Resource { properties }))
            .await
    }

    async fn list_container_sas(
        &self,
        asset_name: &str,
        input: &ListContainerSasInput,
    ) -> Result<AssetContainerSas, MediaError> {
        let url = self.resource_url(&["assets", asset_name, "listContainerSas"])?;
        self.execute(self.http.post(url).json(input)).await
    }

    async fn get_transform(&self, name: &str) -> Result<Option<Transform>, MediaError> {
        self.get(self.resource_url(&["transforms", name])?).await
    }

    async fn create_or_update_transform(
        &self,
        name: &str,
        outputs: &[TransformOutput],
    ) -> Result<Transform, MediaError> {
        let url = self.resource_url(&["transforms", name])?;
        let properties = TransformProperties {
            description: None,
            outputs: outputs.to_vec(),
        };
        self.execute(self.http.put(url).json(&Resource {
            properties: &properties,
        }))
        .await
    }

    async fn get_job(
        &self,
        transform_name: &str,
        job_name: &str,
    ) -> Result<Option<Job>, MediaError> {
        self.get(self.resource_url(&["transforms", transform_name, "jobs", job_name])?)
            .await
    }

    async fn create_job(
        &self,
        transform_name: &str,
        job_name: &str,
        properties: &JobProperties,
    ) -> Result<Job, MediaError> {
        let url = self.resource_url(&["transforms", transform_name, "jobs", job_name])?;
        self.execute(self.http.put(url).json(&Resource { properties }))
            .await
    }
}
