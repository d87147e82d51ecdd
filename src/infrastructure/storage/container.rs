use super::BlobError;
use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};
use url::Url;

pub const STORAGE_API_VERSION: &str = "2018-11-09";

/// Handle on a blob container together with the SAS that authorises it.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobContainer {
    name: String,
    url: Url,
    sas: String,
}

impl BlobContainer {
    /// Builds a handle whose SAS is signed locally with the account key.
    ///
    /// `endpoint` may contain an `{account}` placeholder.
    pub fn with_account_key(
        endpoint: &str,
        account_name: &str,
        account_key: &str,
        container_name: &str,
        permissions: &str,
        expiry: OffsetDateTime,
    ) -> Result<Self, BlobError> {
        let key = STANDARD
            .decode(account_key.trim())
            .map_err(|e| BlobError::InvalidKey(e.to_string()))?;

        let endpoint = endpoint.replace("{account}", account_name);
        let mut url = Url::parse(&endpoint)
            .map_err(|e| BlobError::InvalidUrl(format!("{}: {}", endpoint, e)))?;
        url.path_segments_mut()
            .map_err(|_| BlobError::InvalidUrl(endpoint.clone()))?
            .pop_if_empty()
            .push(container_name);

        let sas = container_sas(&key, account_name, container_name, permissions, expiry)?;

        Ok(Self {
            name: container_name.to_string(),
            url,
            sas,
        })
    }

    /// Builds a handle from a container URL that already carries a SAS query.
    pub fn from_sas_url(sas_url: &str) -> Result<Self, BlobError> {
        let mut url =
            Url::parse(sas_url).map_err(|e| BlobError::InvalidUrl(format!("{}: {}", sas_url, e)))?;
        let sas = url.query().unwrap_or_default().to_string();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| BlobError::InvalidUrl(sas_url.to_string()))?
            .pop_if_empty();

        let name = url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string)
            .ok_or_else(|| BlobError::InvalidUrl(url.to_string()))?;

        Ok(Self { name, url, sas })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blob_url(&self, blob_name: &str) -> Url {
        let mut url = self.url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.extend(blob_name.split('/'));
        }
        self.with_sas(url)
    }

    pub fn list_url(&self, marker: Option<&str>) -> Url {
        let mut url = self.with_sas(self.url.clone());
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("restype", "container").append_pair("comp", "list");
            if let Some(marker) = marker {
                query.append_pair("marker", marker);
            }
        }
        url
    }

    fn with_sas(&self, mut url: Url) -> Url {
        if !self.sas.is_empty() {
            url.set_query(Some(&self.sas));
        }
        url
    }
}

/// Service SAS for a whole container (`sr=c`).
fn container_sas(
    key: &[u8],
    account_name: &str,
    container_name: &str,
    permissions: &str,
    expiry: OffsetDateTime,
) -> Result<String, BlobError> {
    let expiry = expiry
        .to_offset(UtcOffset::UTC)
        .replace_nanosecond(0)
        .map_err(|e| BlobError::Signing(e.to_string()))?
        .format(&Rfc3339)
        .map_err(|e| BlobError::Signing(e.to_string()))?;
    let resource = format!("/blob/{}/{}", account_name, container_name);

    // sp, st, se, resource, si, sip, spr, sv, sr, snapshot, rscc, rscd, rsce, rscl, rsct
    let string_to_sign = [
        permissions,
        "",
        expiry.as_str(),
        resource.as_str(),
        "",
        "",
        "",
        STORAGE_API_VERSION,
        "c",
        "",
        "",
        "",
        "",
        "",
        "",
    ]
    .join("\n");

    let mut mac = Hmac::<Sha256>::new_from_slice(key)
        .map_err(|e| BlobError::InvalidKey(e.to_string()))?;
    mac.update(string_to_sign.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());

    Ok(url::form_urlencoded::Serializer::new(String::new())
        .append_pair("sv", STORAGE_API_VERSION)
        .append_pair("sr", "c")
        .append_pair("sp", permissions)
        .append_pair("se", &expiry)
        .append_pair("sig", &signature)
        .finish())
}
