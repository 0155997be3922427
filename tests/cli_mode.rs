use appsapi_rs::cli::args::{Cli, CliMode, KeyValue};
use appsapi_rs::data::regions::DeviceType;
use clap::Parser;

#[test]
fn parses_init_mode() {
    let cli = Cli::parse_from(["appsapi", "--init"]);
    let mode = cli.to_mode().expect("to_mode failed");
    assert!(matches!(mode, CliMode::Init));
}

#[test]
fn defaults_to_resolve_mode() {
    let cli = Cli::parse_from(["appsapi"]);
    let mode = cli.to_mode().expect("to_mode failed");
    assert_eq!(mode, CliMode::Resolve);
}

#[test]
fn parses_routes_with_filter() {
    let cli = Cli::parse_from(["appsapi", "--routes", "--filter", "movies"]);
    let mode = cli.to_mode().expect("to_mode failed");
    assert_eq!(
        mode,
        CliMode::Routes {
            filter: Some("movies".to_string())
        }
    );
}

#[test]
fn filter_requires_routes() {
    let result = Cli::try_parse_from(["appsapi", "--filter", "movies"]);
    assert!(result.is_err(), "--filter should need --routes");
}

#[test]
fn parses_call_with_params() {
    let cli = Cli::parse_from([
        "appsapi",
        "--call",
        "get_search_content",
        "-p",
        "term=star trek",
        "--param",
        "termCount=50",
        "--login",
    ]);
    let mode = cli.to_mode().expect("to_mode failed");
    match mode {
        CliMode::Call {
            route,
            params,
            body,
            login,
            profile,
        } => {
            assert_eq!(route, "get_search_content");
            assert_eq!(
                params,
                vec![
                    KeyValue {
                        key: "term".to_string(),
                        value: "star trek".to_string()
                    },
                    KeyValue {
                        key: "termCount".to_string(),
                        value: "50".to_string()
                    },
                ]
            );
            assert_eq!(body, None);
            assert!(login);
            assert_eq!(profile, None);
        }
        _ => panic!("Expected Call mode"),
    }
}

#[test]
fn param_values_may_contain_equals() {
    let kv: KeyValue = "params=seasonNum=2".parse().expect("parse failed");
    assert_eq!(kv.key, "params");
    assert_eq!(kv.value, "seasonNum=2");
}

#[test]
fn rejects_param_without_equals() {
    let result = Cli::try_parse_from(["appsapi", "--call", "get_show", "-p", "showId"]);
    assert!(result.is_err(), "Should reject KEY without =VALUE");
}

#[test]
fn params_require_call() {
    let result = Cli::try_parse_from(["appsapi", "-p", "showId=1"]);
    assert!(result.is_err(), "-p should need --call");
}

#[test]
fn modes_mutually_exclusive() {
    let result = Cli::try_parse_from(["appsapi", "--status", "--detect"]);
    assert!(result.is_err(), "Should reject more than one mode");
}

#[test]
fn collects_device_overrides() {
    let cli = Cli::parse_from([
        "appsapi",
        "--status",
        "--country",
        "AU",
        "--device-type",
        "androidtv",
        "--downloads",
        "--strict",
        "--cache-control",
        "max-age=60",
    ]);
    let overrides = cli.overrides();
    assert_eq!(overrides.country.as_deref(), Some("AU"));
    assert_eq!(overrides.device_type, Some(DeviceType::AndroidTv));
    assert!(overrides.downloads);
    assert!(overrides.strict);
    assert_eq!(overrides.cache_control.as_deref(), Some("max-age=60"));
}

#[test]
fn rejects_unknown_device_type() {
    let result = Cli::try_parse_from(["appsapi", "--device-type", "toaster"]);
    assert!(result.is_err(), "Should reject unknown device types");
}

#[test]
fn parses_activate_with_profile() {
    let cli = Cli::parse_from(["appsapi", "--activate", "--profile", "2"]);
    let mode = cli.to_mode().expect("to_mode failed");
    assert_eq!(
        mode,
        CliMode::Activate {
            profile: Some("2".to_string())
        }
    );
}

#[test]
fn call_with_login_accepts_profile() {
    let cli = Cli::parse_from(["appsapi", "--call", "get_marquee", "--login", "--profile", "7"]);
    let mode = cli.to_mode().expect("to_mode failed");
    assert!(matches!(
        mode,
        CliMode::Call { login: true, profile: Some(ref id), .. } if id == "7"
    ));
}

#[test]
fn profile_requires_login_or_activate() {
    let result = Cli::try_parse_from(["appsapi", "--call", "get_marquee", "--profile", "7"]);
    assert!(result.is_err(), "--profile should need --login or --activate");
}

#[test]
fn activate_excludes_other_modes() {
    let result = Cli::try_parse_from(["appsapi", "--activate", "--status"]);
    assert!(result.is_err(), "Should reject more than one mode");
}
