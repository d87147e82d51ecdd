use super::container::STORAGE_API_VERSION;
use super::{BlobContainer, BlobError, BlobStorage, CopySummary};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{debug, info};

/// Lifetime of the read/list SAS signed for a source container.
const SOURCE_SAS_LIFETIME: time::Duration = time::Duration::hours(4);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EnumerationResults {
    #[serde(default)]
    blobs: BlobList,
    #[serde(default)]
    next_marker: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct BlobList {
    #[serde(rename = "Blob", default)]
    blob: Vec<BlobItem>,
}

#[derive(Debug, Deserialize)]
struct BlobItem {
    #[serde(rename = "Name")]
    name: String,
}

/// Blob helper over the Azure Blob Storage REST API.
#[derive(Clone)]
pub struct AzureBlobStorage {
    client: Client,
    endpoint: String,
}

impl AzureBlobStorage {
    pub fn new(endpoint: &str) -> Result<Self, BlobError> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        info!("Blob storage helper ready ({})", endpoint);

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub async fn list_blobs(&self, container: &BlobContainer) -> Result<Vec<String>, BlobError> {
        let mut names = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let response = self
                .client
                .get(container.list_url(marker.as_deref()))
                .header("x-ms-version", STORAGE_API_VERSION)
                .send()
                .await?;

            let status = response.status();
            let body = response.text().await?;
            if !status.is_success() {
                return Err(status_error(container.name(), status, &body));
            }

            let page: EnumerationResults =
                quick_xml::de::from_str(body.trim_start_matches('\u{feff}'))?;
            names.extend(page.blobs.blob.into_iter().map(|b| b.name));

            match page.next_marker.filter(|m| !m.is_empty()) {
                Some(next) => marker = Some(next),
                None => break,
            }
        }

        debug!("Listed {} blob(s) in {}", names.len(), container.name());
        Ok(names)
    }

    /// Issues a Copy Blob request and returns the reported copy status.
    pub async fn start_copy(
        &self,
        source: &BlobContainer,
        destination: &BlobContainer,
        blob_name: &str,
    ) -> Result<String, BlobError> {
        let response = self
            .client
            .put(destination.blob_url(blob_name))
            .header("x-ms-version", STORAGE_API_VERSION)
            .header("x-ms-copy-source", source.blob_url(blob_name).as_str())
            .body("")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(blob_name, status, &body));
        }

        Ok(response
            .headers()
            .get("x-ms-copy-status")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("pending")
            .to_string())
    }
}

fn status_error(resource: &str, status: StatusCode, body: &str) -> BlobError {
    BlobError::Status {
        resource: resource.to_string(),
        status: status.as_u16(),
        message: body.trim().to_string(),
    }
}

#[async_trait]
impl BlobStorage for AzureBlobStorage {
    fn open_container(
        &self,
        account_name: &str,
        account_key: &str,
        container_name: &str,
    ) -> Result<BlobContainer, BlobError> {
        BlobContainer::with_account_key(
            &self.endpoint,
            account_name,
            account_key,
            container_name,
            "rl",
            OffsetDateTime::now_utc() + SOURCE_SAS_LIFETIME,
        )
    }

    async fn copy_blobs(
        &self,
        source: &BlobContainer,
        destination: &BlobContainer,
        file_names: Option<&[String]>,
    ) -> Result<CopySummary, BlobError> {
        let wanted: Option<HashSet<&str>> =
            file_names.map(|names| names.iter().map(String::as_str).collect());

        let mut summary = CopySummary::default();
        for name in self.list_blobs(source).await? {
            if let Some(wanted) = &wanted {
                if !wanted.contains(name.as_str()) {
                    continue;
                }
            }
            let copy_status = self.start_copy(source, destination, &name).await?;
            debug!("Copy of {} into {}: {}", name, destination.name(), copy_status);
            summary.started.push(name);
        }

        info!(
            "Started copy of {} blob(s) from {} to {}",
            summary.started.len(),
            source.name(),
            destination.name()
        );
        Ok(summary)
    }
}
