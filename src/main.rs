use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::filter::LevelFilter;

use appsapi_rs::api::routes::{self, BodyKind, RequestParams, Route};
use appsapi_rs::api::session::{AppsApiSession, LoggedIn};
use appsapi_rs::api::status::{self, RegionStatus};
use appsapi_rs::cli::args::{Cli, CliMode, DeviceOverrides, KeyValue};
use appsapi_rs::cli::display::{
    RegionRow, RouteRow, environment_rows, format_fields_table, format_regions_table,
    format_routes_table, login_rows,
};
use appsapi_rs::cli::setup::{build_session, resolve};
use appsapi_rs::config::{self, AppConfig};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn fetch<State>(
    session: &AppsApiSession<State>,
    route: &Route,
    params: RequestParams,
) -> Result<()> {
    if route.streaming {
        let bytes = session.call_bytes(route, params).await?;
        io::stdout().write_all(&bytes)?;
    } else {
        let value: serde_json::Value = session.call_json(route, params).await?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}

async fn select_profile(
    session: &mut AppsApiSession<LoggedIn>,
    profile: Option<&str>,
) -> Result<()> {
    if let Some(profile_id) = profile {
        session.switch_profile(profile_id).await?;
    }
    Ok(())
}

async fn run_activate(
    config: &mut AppConfig,
    overrides: &DeviceOverrides,
    profile: Option<&str>,
) -> Result<()> {
    let session = build_session(config, overrides)?;
    let device_id = config.device_id_or_create(&config::config_file()?)?;

    let code = session.request_activation_code(&device_id).await?;
    println!(
        "Go to {}/androidtv and enter code {}",
        session.config.host, code.activation_code
    );

    let mut session = session.activate(&code, &device_id).await?;
    select_profile(&mut session, profile).await?;
    println!("{}", format_fields_table(login_rows(session.status())));
    Ok(())
}

async fn run_call(
    config: &mut AppConfig,
    overrides: &DeviceOverrides,
    route_name: &str,
    params: &[KeyValue],
    body: Option<String>,
    login: bool,
    profile: Option<&str>,
) -> Result<()> {
    let route = routes::find_route(route_name)?;

    let mut request = RequestParams::new();
    for KeyValue { key, value } in params {
        request.assign(route, key, value)?;
    }
    if let Some(body) = body {
        if route.body != BodyKind::Raw {
            anyhow::bail!("Route '{}' does not take a raw body", route.name);
        }
        request = request.raw_body(body);
    }

    let session = build_session(config, overrides)?;
    if !login {
        return fetch(&session, route, request).await;
    }

    let device_id = config.device_id_or_create(&config::config_file()?)?;
    let credentials = config
        .credentials
        .as_ref()
        .filter(|c| !c.username.is_empty())
        .context("--login requires [credentials] in the config file")?;
    let mut session = session
        .login(&credentials.username, &credentials.password, &device_id)
        .await?;
    select_profile(&mut session, profile).await?;

    fetch(&session, route, request).await
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = cli.to_mode()?;
    let overrides = cli.overrides();

    match mode {
        CliMode::Init => AppConfig::generate_config()?,
        CliMode::Routes { filter } => {
            let rows: Vec<RouteRow> = routes::routes()
                .iter()
                .filter(|route| match &filter {
                    Some(f) => route.name.contains(f.as_str()) || route.path.contains(f.as_str()),
                    None => true,
                })
                .map(RouteRow::from)
                .collect();

            match rows.is_empty() {
                true => println!("No routes match the filter"),
                false => println!("{}", format_routes_table(rows)),
            }
        }
        CliMode::Resolve => {
            let config = AppConfig::load()?;
            let resolution = resolve(&config, &overrides);
            if overrides.strict {
                resolution.clone().strict()?;
            }
            println!("{}", format_fields_table(environment_rows(&resolution)));
        }
        CliMode::Status => {
            let config = AppConfig::load()?;
            let session = build_session(&config, &overrides)?;
            let res = session.app_status().await?;
            match RegionStatus::from_response(session.config.region, &session.config.host, &res) {
                Some(status) => {
                    println!("{}", format_regions_table(vec![RegionRow::from(&status)]))
                }
                None => println!(
                    "The app is not available from this location in the {} region",
                    session.config.region
                ),
            }
        }
        CliMode::Detect => {
            let config = AppConfig::load()?;
            let session = build_session(&config, &overrides)?;
            match session.detect_region(&status::default_candidates()).await? {
                Some(status) => {
                    println!("{}", format_regions_table(vec![RegionRow::from(&status)]))
                }
                None => println!("The app is not available from this location in any region"),
            }
        }
        CliMode::Activate { profile } => {
            let mut config = AppConfig::load()?;
            run_activate(&mut config, &overrides, profile.as_deref()).await?;
        }
        CliMode::Call {
            route,
            params,
            body,
            login,
            profile,
        } => {
            let mut config = AppConfig::load()?;
            run_call(
                &mut config,
                &overrides,
                &route,
                &params,
                body,
                login,
                profile.as_deref(),
            )
            .await?;
        }
    }

    Ok(())
}
