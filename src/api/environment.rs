use std::collections::BTreeMap;
use std::fmt;

use crate::api::error::ApiError;
use crate::data::regions::{DeviceType, Environment, Region, SyncbakEnvironment};

/// Credentials injected into every resolved environment.
///
/// Values come from the config file or `APPSAPI_*` variables and are never printed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    pub app_secret: String,
    pub syncbak_app_key: String,
    pub syncbak_app_secret: String,
    /// Access tokens keyed by the deployment they were issued for.
    pub at_tokens: BTreeMap<Region, String>,
    pub preference_key: Option<String>,
}

impl Secrets {
    pub fn with_at_token(mut self, region: Region, token: impl Into<String>) -> Self {
        self.at_tokens.insert(region, token.into());
        self
    }

    /// The `at` query value for requests against `region`'s deployment.
    pub fn at_token(&self, region: Region) -> Option<&str> {
        self.at_tokens
            .get(&region)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }

    /// Value for a route header whose content is a secret, matched case-insensitively.
    pub fn header_value(&self, header: &str) -> Option<&str> {
        match header.to_lowercase().as_str() {
            "preference-key" => self.preference_key.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &str) -> &'static str {
            if value.is_empty() { "<unset>" } else { "<redacted>" }
        }

        f.debug_struct("Secrets")
            .field("app_secret", &redact(&self.app_secret))
            .field("syncbak_app_key", &redact(&self.syncbak_app_key))
            .field("syncbak_app_secret", &redact(&self.syncbak_app_secret))
            .field(
                "at_tokens",
                &self
                    .at_tokens
                    .iter()
                    .map(|(region, token)| (region, redact(token)))
                    .collect::<BTreeMap<_, _>>(),
            )
            .field("preference_key", &self.preference_key.as_deref().map(redact))
            .finish()
    }
}

/// Everything a session needs to talk to one backend deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub region: Region,
    pub environment: Environment,
    pub syncbak_environment: SyncbakEnvironment,
    pub host: String,
    pub syncbak_host: String,
    pub country_code: String,
    pub locate_me_in: String,
    pub downloads_enabled: bool,
    pub device_type: DeviceType,
    pub parallel_execution_allowed: bool,
    pub debug: bool,
    pub logging_enabled: bool,
    secrets: Secrets,
}

impl EnvironmentConfig {
    pub fn secrets(&self) -> &Secrets {
        &self.secrets
    }

    pub fn app_secret(&self) -> &str {
        &self.secrets.app_secret
    }

    pub fn syncbak_app_key(&self) -> &str {
        &self.secrets.syncbak_app_key
    }

    pub fn syncbak_app_secret(&self) -> &str {
        &self.secrets.syncbak_app_secret
    }

    /// Replaces the resolved hosts, e.g. to point at a staging deployment.
    pub fn with_hosts(mut self, host: Option<String>, syncbak_host: Option<String>) -> Self {
        if let Some(host) = host.filter(|h| !h.is_empty()) {
            self.host = host.trim_end_matches('/').to_string();
        }
        if let Some(syncbak_host) = syncbak_host.filter(|h| !h.is_empty()) {
            self.syncbak_host = syncbak_host.trim_end_matches('/').to_string();
        }
        self
    }
}

/// How the requested country code mapped onto the region table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionMatch {
    Matched(Region),
    /// A code was given but no region uses it; the default region was substituted.
    Unrecognized(String),
    /// No code (or an empty one) was given; the default region was used.
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: EnvironmentConfig,
    pub region_match: RegionMatch,
}

impl Resolution {
    pub fn is_fallback(&self) -> bool {
        !matches!(self.region_match, RegionMatch::Matched(_))
    }

    /// Rejects unrecognized codes instead of falling back. An absent code is still accepted.
    pub fn strict(self) -> Result<EnvironmentConfig, ApiError> {
        match self.region_match {
            RegionMatch::Unrecognized(code) => Err(ApiError::UnknownRegion(code)),
            _ => Ok(self.config),
        }
    }

    pub fn into_config(self) -> EnvironmentConfig {
        self.config
    }
}

/// Maps a device country code onto an [`EnvironmentConfig`].
#[derive(Debug, Clone)]
pub struct EnvironmentResolver {
    secrets: Secrets,
    device_type: DeviceType,
    locate_me_in: String,
}

impl EnvironmentResolver {
    pub const DEFAULT_REGION: Region = Region::Us;

    pub fn new(secrets: Secrets) -> Self {
        Self {
            secrets,
            device_type: DeviceType::default(),
            locate_me_in: String::new(),
        }
    }

    pub fn with_device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }

    /// Country the user asked the backend to treat them as being in.
    pub fn with_locate_me_in(mut self, locate_me_in: impl Into<String>) -> Self {
        self.locate_me_in = locate_me_in.into();
        self
    }

    /// Pure lookup. Unrecognized codes fall back to the default region and are flagged
    /// on the returned [`Resolution`].
    pub fn resolve(&self, country_code: Option<&str>, downloads_enabled: bool) -> Resolution {
        let (region, region_match) = match country_code.filter(|c| !c.is_empty()) {
            None => (Self::DEFAULT_REGION, RegionMatch::Absent),
            Some(code) => match Region::from_code(code) {
                Some(region) => (region, RegionMatch::Matched(region)),
                None => (Self::DEFAULT_REGION, RegionMatch::Unrecognized(code.to_string())),
            },
        };

        let environment = region.environment();
        let syncbak_environment = SyncbakEnvironment::Prod;
        let country_code = match country_code.filter(|c| !c.is_empty()) {
            Some(code) => code.to_string(),
            None => Self::DEFAULT_REGION.code().to_string(),
        };

        let config = EnvironmentConfig {
            region,
            environment,
            syncbak_environment,
            host: environment.host().to_string(),
            syncbak_host: syncbak_environment.host().to_string(),
            country_code,
            locate_me_in: self.locate_me_in.clone(),
            downloads_enabled,
            device_type: self.device_type,
            parallel_execution_allowed: true,
            debug: false,
            logging_enabled: false,
            secrets: self.secrets.clone(),
        };

        Resolution {
            config,
            region_match,
        }
    }
}
