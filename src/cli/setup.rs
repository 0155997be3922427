use anyhow::Result;

use crate::api::environment::Resolution;
use crate::api::session::{Anonymous, AppsApiSession};
use crate::cli::args::DeviceOverrides;
use crate::config::{self, AppConfig};

/// Resolves the environment from the config file, with command-line overrides applied on top.
pub fn resolve(config: &AppConfig, overrides: &DeviceOverrides) -> Resolution {
    let mut resolver = config.resolver(config.secrets());
    if let Some(device_type) = overrides.device_type {
        resolver = resolver.with_device_type(device_type);
    }

    let country = overrides
        .country
        .as_deref()
        .or(config.device.country.as_deref());
    let downloads = overrides.downloads || config.device.downloads;

    let mut resolution = resolver.resolve(country, downloads);
    resolution.config = resolution.config.with_hosts(
        config.overrides.host.clone(),
        config.overrides.syncbak_host.clone(),
    );
    resolution
}

pub fn build_session(
    config: &AppConfig,
    overrides: &DeviceOverrides,
) -> Result<AppsApiSession<Anonymous>> {
    let resolution = resolve(config, overrides);
    if overrides.strict {
        resolution.clone().strict()?;
    }

    let missing = config::missing_secrets(resolution.config.secrets());
    if !missing.is_empty() {
        tracing::warn!(
            missing = %missing.join(", "),
            "Some secrets are not configured; set them under [secrets] or via APPSAPI_* variables"
        );
    }

    let mut options = config.session_options();
    if let Some(cache_control) = &overrides.cache_control {
        options.cache_control = cache_control.clone();
    }

    AppsApiSession::from_resolution(resolution, options)
}
