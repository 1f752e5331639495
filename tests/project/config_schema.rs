use stylemind::config::Config;

#[test]
fn empty_config_deserializes_with_defaults() {
    let parsed: Config = toml::from_str("").expect("empty config should deserialize");

    assert_eq!(parsed.api.base_url, "http://localhost:8080/api");
    assert_eq!(parsed.api.analyze_timeout_secs, 120);
    assert_eq!(parsed.api.generate_timeout_secs, 300);
    assert_eq!(parsed.media.max_file_size_mb, 25);
    assert!(parsed.validate().is_ok());
}

#[test]
fn full_config_round_trips_through_toml() {
    let toml = r#"
[api]
base_url = "https://stylemind.internal/api"
connect_timeout_secs = 5
analyze_timeout_secs = 60
generate_timeout_secs = 240

[media]
max_file_size_mb = 8
"#;

    let parsed: Config = toml::from_str(toml).expect("full config should deserialize");
    assert_eq!(parsed.api.connect_timeout_secs, 5);
    assert_eq!(parsed.media.max_file_size_mb, 8);

    let rendered = toml::to_string_pretty(&parsed).expect("config should serialize");
    let reparsed: Config = toml::from_str(&rendered).expect("rendered config should parse");
    assert_eq!(reparsed.api.base_url, parsed.api.base_url);
    assert_eq!(reparsed.api.generate_timeout_secs, 240);
}

#[test]
fn config_path_is_not_serialized() {
    let rendered = toml::to_string_pretty(&Config::default()).unwrap();
    assert!(!rendered.contains("config_path"));
    assert!(rendered.contains("[api]"));
}
