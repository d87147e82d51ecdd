#![allow(dead_code)]

pub mod fakes;

use axum_test::TestServer;
use fakes::{FakeBlobStorage, FakeMediaServices};
use std::sync::Arc;
use vod_functions::app::create_app;
use vod_functions::config::settings::{AppConfig, MediaServicesConfig};
use vod_functions::infrastructure::media::MediaServices;
use vod_functions::infrastructure::storage::BlobStorage;
use vod_functions::state::AppState;

pub const FUNCTION_KEY: &str = "test-function-key";

/// Base64 of a throwaway storage account key.
pub const ACCOUNT_KEY: &str = "c3VwZXItc2VjcmV0LWFjY291bnQta2V5";

/// Test application backed by in-memory fakes
pub struct TestApp {
    pub server: TestServer,
    pub media: Arc<FakeMediaServices>,
    pub blobs: Arc<FakeBlobStorage>,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn create_test_config(function_key: Option<&str>) -> AppConfig {
    AppConfig {
        server_port: 0,
        function_key: function_key.map(str::to_string),
        media: MediaServicesConfig {
            subscription_id: "00000000-0000-0000-0000-000000000000".to_string(),
            resource_group: "media-rg".to_string(),
            account_name: "mediaaccount".to_string(),
            aad_tenant_id: "tenant".to_string(),
            aad_client_id: "client".to_string(),
            aad_secret: "secret".to_string(),
            aad_endpoint: "http://127.0.0.1:1".to_string(),
            arm_endpoint: "http://127.0.0.1:1".to_string(),
            arm_aad_audience: "https://management.core.windows.net/".to_string(),
            api_version: "2018-07-01".to_string(),
        },
        blob_endpoint: "https://{account}.blob.core.windows.net".to_string(),
    }
}

/// Setup a test application without a function key
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_key(None).await
}

pub async fn setup_test_app_with_key(function_key: Option<&str>) -> TestApp {
    let media = Arc::new(FakeMediaServices::default());
    let blobs = Arc::new(FakeBlobStorage::default());

    let media_dyn: Arc<dyn MediaServices> = media.clone();
    let blobs_dyn: Arc<dyn BlobStorage> = blobs.clone();
    let state = AppState::new(create_test_config(function_key), media_dyn, blobs_dyn);

    let server = TestServer::new(create_app(state)).expect("Failed to create test server");

    TestApp {
        server,
        media,
        blobs,
    }
}
