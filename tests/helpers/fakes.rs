use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;
use vod_functions::infrastructure::media::models::{
    Asset, AssetContainerSas, AssetProperties, Job, JobProperties, JobState,
    ListContainerSasInput, Preset, Transform, TransformOutput, TransformProperties,
};
use vod_functions::infrastructure::media::{MediaError, MediaServices};
use vod_functions::infrastructure::storage::{
    BlobContainer, BlobError, BlobStorage, CopySummary,
};

/// In-memory Media Services account.
#[derive(Default)]
pub struct FakeMediaServices {
    pub assets: Mutex<HashMap<String, Asset>>,
    pub transforms: Mutex<HashMap<String, Transform>>,
    pub jobs: Mutex<HashMap<(String, String), Job>>,
    pub transform_creates: Mutex<usize>,
    /// When set, transform creation fails with this `(code, message)`.
    pub transform_error: Mutex<Option<(String, String)>>,
}

impl FakeMediaServices {
    pub fn insert_asset(&self, name: &str) -> Asset {
        let asset = Asset {
            id: format!("/assets/{}", name),
            name: name.to_string(),
            properties: AssetProperties {
                asset_id: Some(Uuid::new_v4()),
                alternate_id: Some(name.to_string()),
                ..Default::default()
            },
        };
        self.assets
            .lock()
            .unwrap()
            .insert(name.to_string(), asset.clone());
        asset
    }

    /// Inserts a transform whose outputs use the given presets, each given as JSON.
    pub fn insert_transform(&self, name: &str, presets: &[serde_json::Value]) {
        let outputs = presets
            .iter()
            .map(|preset| TransformOutput {
                on_error: None,
                relative_priority: None,
                preset: Preset::from_value(preset.clone()).unwrap(),
            })
            .collect();
        self.transforms
            .lock()
            .unwrap()
            .insert(name.to_string(), transform(name, outputs));
    }

    pub fn set_job_state(&self, transform_name: &str, job_name: &str, state: JobState) {
        let mut jobs = self.jobs.lock().unwrap();
        let job = jobs
            .entry((transform_name.to_string(), job_name.to_string()))
            .or_insert_with(|| Job {
                id: format!("/transforms/{}/jobs/{}", transform_name, job_name),
                name: job_name.to_string(),
                properties: serde_json::from_value(json!({
                    "input": {
                        "@odata.type": "#Microsoft.Media.JobInputAsset",
                        "assetName": "input"
                    },
                    "outputs": []
                }))
                .unwrap(),
            });
        job.properties.state = Some(state);
    }

    pub fn asset(&self, name: &str) -> Option<Asset> {
        self.assets.lock().unwrap().get(name).cloned()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.lock().unwrap().len()
    }

    pub fn submitted_jobs(&self) -> Vec<(String, Job)> {
        self.jobs
            .lock()
            .unwrap()
            .iter()
            .map(|((transform_name, _), job)| (transform_name.clone(), job.clone()))
            .collect()
    }
}

fn transform(name: &str, outputs: Vec<TransformOutput>) -> Transform {
    Transform {
        id: format!("/transforms/{}", name),
        name: name.to_string(),
        properties: TransformProperties {
            description: None,
            outputs,
        },
    }
}

#[async_trait]
impl MediaServices for FakeMediaServices {
    async fn get_asset(&self, name: &str) -> Result<Option<Asset>, MediaError> {
        Ok(self.asset(name))
    }

    async fn create_or_update_asset(
        &self,
        name: &str,
        properties: &AssetProperties,
    ) -> Result<Asset, MediaError> {
        let mut properties = properties.clone();
        properties.asset_id = Some(Uuid::new_v4());
        let asset = Asset {
            id: format!("/assets/{}", name),
            name: name.to_string(),
            properties,
        };
        self.assets
            .lock()
            .unwrap()
            .insert(name.to_string(), asset.clone());
        Ok(asset)
    }

    async fn list_container_sas(
        &self,
        asset_name: &str,
        _input: &ListContainerSasInput,
    ) -> Result<AssetContainerSas, MediaError> {
        let asset = self.asset(asset_name).ok_or_else(|| MediaError::Api {
            status: 404,
            code: "ResourceNotFound".to_string(),
            message: format!("Asset {} not found", asset_name),
        })?;
        let container = asset.container_name().unwrap_or_default();
        Ok(AssetContainerSas {
            asset_container_sas_urls: vec![format!(
                "https://mediastorage.blob.core.windows.net/{}?sv=2018-11-09&sr=c&sp=rw&sig=fake",
                container
            )],
        })
    }

    async fn get_transform(&self, name: &str) -> Result<Option<Transform>, MediaError> {
        Ok(self.transforms.lock().unwrap().get(name).cloned())
    }

    async fn create_or_update_transform(
        &self,
        name: &str,
        outputs: &[TransformOutput],
    ) -> Result<Transform, MediaError> {
        if let Some((code, message)) = self.transform_error.lock().unwrap().clone() {
            return Err(MediaError::Api {
                status: 400,
                code,
                message,
            });
        }
        *self.transform_creates.lock().unwrap() += 1;
        let created = transform(name, outputs.to_vec());
        self.transforms
            .lock()
            .unwrap()
            .insert(name.to_string(), created.clone());
        Ok(created)
    }

    async fn get_job(
        &self,
        transform_name: &str,
        job_name: &str,
    ) -> Result<Option<Job>, MediaError> {
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .get(&(transform_name.to_string(), job_name.to_string()))
            .cloned())
    }

    async fn create_job(
        &self,
        transform_name: &str,
        job_name: &str,
        properties: &JobProperties,
    ) -> Result<Job, MediaError> {
        let mut properties = properties.clone();
        properties.state = Some(JobState::Queued);
        let job = Job {
            id: format!("/transforms/{}/jobs/{}", transform_name, job_name),
            name: job_name.to_string(),
            properties,
        };
        self.jobs.lock().unwrap().insert(
            (transform_name.to_string(), job_name.to_string()),
            job.clone(),
        );
        Ok(job)
    }
}

/// A recorded `copy_blobs` call.
#[derive(Clone, Debug)]
pub struct CopyRequest {
    pub source: String,
    pub destination: String,
    pub file_names: Option<Vec<String>>,
}

/// Blob storage that signs containers for real but only records copies.
#[derive(Default)]
pub struct FakeBlobStorage {
    pub copies: Mutex<Vec<CopyRequest>>,
}

impl FakeBlobStorage {
    pub fn copies(&self) -> Vec<CopyRequest> {
        self.copies.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStorage for FakeBlobStorage {
    fn open_container(
        &self,
        account_name: &str,
        account_key: &str,
        container_name: &str,
    ) -> Result<BlobContainer, BlobError> {
        BlobContainer::with_account_key(
            "https://{account}.blob.core.windows.net",
            account_name,
            account_key,
            container_name,
            "rl",
            OffsetDateTime::now_utc() + Duration::hours(1),
        )
    }

    async fn copy_blobs(
        &self,
        source: &BlobContainer,
        destination: &BlobContainer,
        file_names: Option<&[String]>,
    ) -> Result<CopySummary, BlobError> {
        self.copies.lock().unwrap().push(CopyRequest {
            source: source.name().to_string(),
            destination: destination.name().to_string(),
            file_names: file_names.map(<[String]>::to_vec),
        });
        Ok(CopySummary {
            started: file_names
                .map(<[String]>::to_vec)
                .unwrap_or_else(|| vec!["video.mp4".to_string()]),
        })
    }
}
