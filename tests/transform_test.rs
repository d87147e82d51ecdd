mod helpers;

use helpers::setup_test_app;
use serde_json::{Value, json};
use vod_functions::infrastructure::media::models::{InsightsType, Preset};

#[tokio::test]
async fn test_create_transform() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/api/CreateTransform")
        .json(&json!({
            "transformName": "adaptive",
            "transformOutputs": [
                {
                    "onError": "StopProcessingJob",
                    "relativePriority": "Normal",
                    "preset": {
                        "@odata.type": "#Microsoft.Media.BuiltInStandardEncoderPreset",
                        "presetName": "AdaptiveStreaming"
                    }
                },
                {
                    "preset": { "videoAnalyzerPreset": { "audioInsightsOnly": true } }
                }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), 200);

    let data: Value = response.json();
    assert_eq!(data["transformId"], "/transforms/adaptive");

    let transforms = app.media.transforms.lock().unwrap();
    let outputs = &transforms["adaptive"].properties.outputs;
    assert_eq!(outputs.len(), 2);
    assert!(matches!(outputs[0].preset, Preset::BuiltInStandardEncoder(_)));
    match &outputs[1].preset {
        Preset::VideoAnalyzer(preset) => assert_eq!(
            preset.insights_to_extract,
            Some(InsightsType::AudioInsightsOnly)
        ),
        other => panic!("unexpected preset {:?}", other),
    }
}

#[tokio::test]
async fn test_create_transform_is_idempotent() {
    let app = setup_test_app().await;
    let client = app.client();

    let body = json!({
        "transformName": "adaptive",
        "transformOutputs": [
            { "preset": { "presetName": "AdaptiveStreaming" } }
        ]
    });

    let first: Value = client.post("/api/CreateTransform").json(&body).await.json();
    let second: Value = client.post("/api/CreateTransform").json(&body).await.json();

    assert_eq!(first["transformId"], second["transformId"]);
    assert_eq!(*app.media.transform_creates.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_create_transform_keeps_existing_outputs() {
    let app = setup_test_app().await;
    let client = app.client();

    app.media.insert_transform(
        "adaptive",
        &[json!({ "@odata.type": "#Microsoft.Media.AudioAnalyzerPreset", "audioLanguage": "en-US" })],
    );

    let response = client
        .post("/api/CreateTransform")
        .json(&json!({
            "transformName": "adaptive",
            "transformOutputs": [
                { "preset": { "presetName": "H264MultipleBitrate720p" } }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(*app.media.transform_creates.lock().unwrap(), 0);

    let transforms = app.media.transforms.lock().unwrap();
    assert!(matches!(
        transforms["adaptive"].properties.outputs[0].preset,
        Preset::AudioAnalyzer(_)
    ));
}

#[tokio::test]
async fn test_create_transform_missing_fields() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.post("/api/CreateTransform").json(&json!({})).await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.text(),
        "Please pass transformName in the input object"
    );

    let response = client
        .post("/api/CreateTransform")
        .json(&json!({ "transformName": "adaptive" }))
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.text(),
        "Please pass transformOutputs in the input object"
    );
}

#[tokio::test]
async fn test_create_transform_invalid_output() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/api/CreateTransform")
        .json(&json!({
            "transformName": "adaptive",
            "transformOutputs": [
                { "preset": { "presetName": "AdaptiveStreaming" } },
                { "preset": { "somethingElse": 1 } }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert!(
        response
            .text()
            .starts_with("Error: transformOutputs[1] is invalid")
    );
    assert_eq!(*app.media.transform_creates.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_create_transform_api_error() {
    let app = setup_test_app().await;
    let client = app.client();

    *app.media.transform_error.lock().unwrap() = Some((
        "BadRequest".to_string(),
        "The preset name is not supported".to_string(),
    ));

    let response = client
        .post("/api/CreateTransform")
        .json(&json!({
            "transformName": "adaptive",
            "transformOutputs": [
                { "preset": { "presetName": "Unknown" } }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.text(),
        "AMS API call error: The preset name is not supported"
    );
}
