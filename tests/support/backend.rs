use serde_json::json;
use std::sync::Arc;
use stylemind::config::ApiConfig;
use stylemind::{BackendClient, ImageAttachment, PostComposer};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PNG: [u8; 9] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];

pub fn composer_for(server: &MockServer) -> PostComposer {
    let config = ApiConfig {
        base_url: format!("{}/api", server.uri()),
        ..ApiConfig::default()
    };
    PostComposer::with_backend(Arc::new(BackendClient::new(&config).expect("valid base url")))
}

pub fn png_image() -> ImageAttachment {
    ImageAttachment::from_bytes(PNG.to_vec(), "han-river.png", &Default::default())
        .expect("png fixture")
}

pub async fn mount_profile(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/analyze-style"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "result": {
                "avg_length": 42,
                "is_polite": true,
                "top_endings": ["요", "죠"],
                "style_prompt": "X"
            }
        })))
        .mount(server)
        .await;
}

pub async fn mount_post(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/api/generate-post"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": content,
            "image_desc": "a picnic mat beside the river"
        })))
        .mount(server)
        .await;
}
