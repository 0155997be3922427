use appsapi_rs::api::environment::RegionMatch;
use appsapi_rs::cli::args::DeviceOverrides;
use appsapi_rs::cli::setup::{build_session, resolve};
use appsapi_rs::config::AppConfig;
use appsapi_rs::data::regions::{DeviceType, Region};

const NO_SECRETS: &str = r#"
[device]
country = "CA"

[overrides]
host = "http://localhost:8080"
"#;

#[tokio::test]
async fn session_builds_without_optional_secrets() {
    let config = AppConfig::from_toml_str(NO_SECRETS).expect("config parses");
    let session = build_session(&config, &DeviceOverrides::default()).expect("session builds");

    assert_eq!(session.config.region, Region::Ca);
    assert_eq!(session.config.host, "http://localhost:8080");
}

#[tokio::test]
async fn strict_mode_rejects_unknown_country_override() {
    let config = AppConfig::from_toml_str(NO_SECRETS).expect("config parses");
    let overrides = DeviceOverrides {
        country: Some("gb".to_string()),
        strict: true,
        ..DeviceOverrides::default()
    };
    assert!(build_session(&config, &overrides).is_err());
}

#[tokio::test]
async fn cache_control_override_reaches_session() {
    let config = AppConfig::from_toml_str(NO_SECRETS).expect("config parses");
    let overrides = DeviceOverrides {
        cache_control: Some("max-age=60".to_string()),
        ..DeviceOverrides::default()
    };
    let session = build_session(&config, &overrides).expect("session builds");
    assert_eq!(session.options.cache_control, "max-age=60");
}

#[test]
fn command_line_overrides_win_over_config() {
    let config = AppConfig::from_toml_str(NO_SECRETS).expect("config parses");
    let overrides = DeviceOverrides {
        country: Some("au".to_string()),
        device_type: Some(DeviceType::AndroidTv),
        downloads: true,
        ..DeviceOverrides::default()
    };

    let resolution = resolve(&config, &overrides);
    assert_eq!(resolution.region_match, RegionMatch::Matched(Region::Au));
    assert_eq!(resolution.config.device_type, DeviceType::AndroidTv);
    assert!(resolution.config.downloads_enabled);
    assert_eq!(resolution.config.host, "http://localhost:8080");
}
