use crate::support::{PNG, composer_for, mount_post, mount_profile, png_image};
use serde_json::json;
use stylemind::ui::render;
use stylemind::{ComposerPhase, ImageAttachment, StyleProfile};
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn analyze_then_generate_against_http_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-style"))
        .and(body_json(json!({ "urls": ["http://a", "http://b"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "result": {
                "avg_length": 42,
                "is_polite": true,
                "top_endings": ["요", "죠"],
                "style_prompt": "X"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_post(&server, "Sunny day by the river.").await;

    let mut composer = composer_for(&server);
    composer.set_url(0, "http://a").unwrap();
    composer.add_url_slot();
    let last = composer.add_url_slot();
    composer.set_url(last, "http://b").unwrap();

    let profile = composer.analyze_current_urls().await.unwrap().clone();
    assert_eq!(
        profile,
        StyleProfile {
            avg_length: 42.0,
            is_polite: true,
            top_endings: vec!["요".into(), "죠".into()],
            style_prompt: "X".into(),
        }
    );
    assert!(composer.can_generate());

    composer.set_topic("Weekend picnic");
    composer.set_image(png_image());
    let post = composer.request_post_generation().await.unwrap().clone();

    assert_eq!(post.content, "Sunny day by the river.");
    assert_eq!(composer.status().phase, ComposerPhase::Generated);
    assert!(!composer.is_busy());

    let doc = render::post_markdown(composer.topic(), &post);
    assert!(doc.starts_with("# Weekend picnic"));
    assert!(doc.contains("a picnic mat beside the river"));
}

#[tokio::test]
async fn image_loaded_from_disk_is_uploaded() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    mount_post(&server, "Body").await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("snap.png");
    std::fs::write(&file, PNG).unwrap();
    let image = ImageAttachment::from_path(&file.to_string_lossy(), &Default::default())
        .await
        .unwrap();

    let mut composer = composer_for(&server);
    composer
        .request_style_analysis(&["http://a".to_string()])
        .await
        .unwrap();
    composer.set_topic("snapshot");
    composer.set_image(image);
    composer.request_post_generation().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let upload = requests
        .iter()
        .find(|r| r.url.path() == "/api/generate-post")
        .expect("generate-post was called");
    let body = &upload.body;
    assert!(
        body.windows(PNG.len()).any(|w| w == PNG),
        "image bytes missing from multipart body"
    );
    assert!(
        body.windows(b"filename=\"snap.png\"".len())
            .any(|w| w == b"filename=\"snap.png\"")
    );
}
