use crate::support::{composer_for, mount_post, mount_profile, png_image};
use serde_json::json;
use stylemind::{ComposerError, ComposerPhase, RequestFailure, ValidationError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn blank_urls_send_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-style"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut composer = composer_for(&server);
    let err = composer
        .request_style_analysis(&[" ".to_string(), String::new()])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ComposerError::Validation(ValidationError::NoUrls)
    ));
    server.verify().await;
}

#[tokio::test]
async fn generation_is_unreachable_without_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-post"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut composer = composer_for(&server);
    composer.set_topic("picnic");
    composer.set_image(png_image());

    assert!(!composer.can_generate());
    let err = composer.request_post_generation().await.unwrap_err();
    assert!(matches!(
        err,
        ComposerError::Validation(ValidationError::MissingProfile)
    ));
    server.verify().await;
}

#[tokio::test]
async fn backend_error_envelope_keeps_composer_idle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-style"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "could not find any text to analyze"
        })))
        .mount(&server)
        .await;

    let mut composer = composer_for(&server);
    let err = composer
        .request_style_analysis(&["http://a".to_string()])
        .await
        .unwrap_err();

    assert!(err.to_string().contains("could not find any text"));
    assert!(composer.profile().is_none());
    let status = composer.status();
    assert!(!status.busy);
    assert_eq!(status.phase, ComposerPhase::Idle);
}

#[tokio::test]
async fn failed_generation_keeps_last_post() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/generate-post"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": "First draft",
            "image_desc": "river"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/generate-post"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "Empty image upload" })),
        )
        .mount(&server)
        .await;

    let mut composer = composer_for(&server);
    composer
        .request_style_analysis(&["http://a".to_string()])
        .await
        .unwrap();
    composer.set_topic("picnic");
    composer.set_image(png_image());
    composer.request_post_generation().await.unwrap();

    let err = composer.request_post_generation().await.unwrap_err();

    match err {
        ComposerError::Request(RequestFailure::Status {
            status, message, ..
        }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Empty image upload");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(composer.post().unwrap().content, "First draft");
    assert!(!composer.is_busy());
}

#[tokio::test]
async fn server_error_then_retry_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-style"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_profile(&server).await;
    mount_post(&server, "unused").await;

    let mut composer = composer_for(&server);
    let urls = ["http://a".to_string()];

    let first = composer.request_style_analysis(&urls).await.map(|_| ());
    assert!(matches!(
        first,
        Err(ComposerError::Request(RequestFailure::Status {
            status: 500,
            ..
        }))
    ));
    assert!(!composer.is_busy());

    composer.request_style_analysis(&urls).await.unwrap();
    assert_eq!(composer.status().phase, ComposerPhase::Analyzed);
}
