use crate::config::settings::AppConfig;
use crate::infrastructure::media::MediaServices;
use crate::infrastructure::storage::BlobStorage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub media: Arc<dyn MediaServices>,
    pub blobs: Arc<dyn BlobStorage>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        media: Arc<dyn MediaServices>,
        blobs: Arc<dyn BlobStorage>,
    ) -> Self {
        Self {
            config,
            media,
            blobs,
        }
    }
}
