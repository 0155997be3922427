use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use crate::api::environment::{EnvironmentResolver, Secrets};
use crate::api::session::SessionOptions;
use crate::data::regions::{DeviceType, Region};

const TEMPLATE: &str = include_str!("config/template.toml");

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub device: Device,
    #[serde(default)]
    pub secrets: SecretsConfig,
    pub credentials: Option<Credentials>,
    #[serde(default)]
    pub overrides: Overrides,
}

#[derive(Debug, Default, Deserialize)]
pub struct Device {
    pub country: Option<String>,
    #[serde(default)]
    pub device_type: DeviceType,
    #[serde(default)]
    pub locate_me_in: String,
    #[serde(default)]
    pub downloads: bool,
    pub locale: Option<String>,
    pub cache_control: Option<String>,
    pub device_id: Option<String>,
}

#[derive(Default, Deserialize)]
pub struct SecretsConfig {
    pub app_secret: Option<String>,
    pub syncbak_app_key: Option<String>,
    pub syncbak_app_secret: Option<String>,
    #[serde(default)]
    pub at_token: AtTokens,
    pub preference_key: Option<String>,
}

/// `[secrets.at_token]`: each deployment issues its own access token.
#[derive(Default, Deserialize)]
pub struct AtTokens {
    pub us: Option<String>,
    pub ca: Option<String>,
    pub au: Option<String>,
}

impl AtTokens {
    fn get(&self, region: Region) -> &Option<String> {
        match region {
            Region::Us => &self.us,
            Region::Ca => &self.ca,
            Region::Au => &self.au,
        }
    }
}

impl fmt::Debug for SecretsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretsConfig { .. }")
    }
}

#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Overrides {
    pub host: Option<String>,
    pub syncbak_host: Option<String>,
}

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "appsapi-rs")
        .ok_or_else(|| anyhow::anyhow!("Could not resolve project directory."))
}

pub fn config_file() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// 16-hex-digit identifier derived from `seed`. An empty seed gets a random identity.
pub fn derive_device_id(seed: &str) -> String {
    let seed = match seed.trim() {
        "" => uuid::Uuid::new_v4().to_string(),
        seed => seed.to_string(),
    };

    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..16].to_string()
}

/// Writes `device_id` into the `[device]` section of the file at `path`, keeping its comments.
pub fn persist_device_id(path: &Path, device_id: &str) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    let mut doc: toml_edit::DocumentMut = contents.parse()?;
    doc["device"]["device_id"] = toml_edit::value(device_id);
    fs::write(path, doc.to_string())?;
    tracing::debug!("Saved device id to {}", path.display());
    Ok(())
}

impl AppConfig {
    fn prompt(label: &str, masked: bool) -> io::Result<String> {
        if masked {
            let value = rpassword::prompt_password(format!("Enter {label}: "))
                .map_err(|e| io::Error::other(e.to_string()))?;
            Ok(value.trim().to_string())
        } else {
            print!("Enter {label}: ");
            io::stdout().flush()?; // ensure prompt appears before waiting for input

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            Ok(input.trim().to_string())
        }
    }

    pub fn generate_config() -> Result<()> {
        let config_file = config_file()?;
        if let Some(config_dir) = config_file.parent() {
            fs::create_dir_all(config_dir)?;
        }

        // Interactive terminal required for credential input
        if !io::stdin().is_terminal() {
            anyhow::bail!(
                "Cannot run --init in non-interactive mode.\n\
                 Please run this command in an interactive terminal, or manually create:\n\
                 {:#?}",
                config_file
            );
        }

        let country = Self::prompt("country code (US, CA, AU)", false)?;
        let username = Self::prompt("account username (blank to skip)", false)?;
        let password = match username.is_empty() {
            true => String::new(),
            false => Self::prompt("account password", true)?,
        };
        let app_secret = Self::prompt("app secret", true)?;
        let syncbak_app_key = Self::prompt("syncbak app key", true)?;
        let syncbak_app_secret = Self::prompt("syncbak app secret", true)?;
        let at_token = Self::prompt("access token for this region (blank to skip)", true)?;

        // Parse template and fill in values while preserving comments/format
        let mut doc: toml_edit::DocumentMut = TEMPLATE.parse()?;
        if !country.is_empty() {
            doc["device"]["country"] = toml_edit::value(country.to_uppercase());
        }
        doc["device"]["device_id"] = toml_edit::value(derive_device_id(&username));
        doc["credentials"]["username"] = toml_edit::value(username);
        doc["credentials"]["password"] = toml_edit::value(password);
        doc["secrets"]["app_secret"] = toml_edit::value(app_secret);
        doc["secrets"]["syncbak_app_key"] = toml_edit::value(syncbak_app_key);
        doc["secrets"]["syncbak_app_secret"] = toml_edit::value(syncbak_app_secret);
        let region_key = country.to_lowercase();
        if !at_token.is_empty() && Region::from_code(&region_key).is_some() {
            doc["secrets"]["at_token"][region_key.as_str()] = toml_edit::value(at_token);
        }

        fs::write(&config_file, doc.to_string())?;
        println!("Wrote config to {}", config_file.display());

        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let parsed: AppConfig = toml::from_str(contents)?;
        Ok(parsed)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from: {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn load() -> Result<Self> {
        let config_file = config_file()?;

        // ensure the config exists (creates from template if needed)
        if !config_file.exists() {
            println!(
                "Config file not found, creating from template at {}",
                config_file.display()
            );
            Self::generate_config()?;
        }

        Self::load_from(&config_file)
    }

    /// Collects secrets, letting `lookup` (normally the process environment) override the file.
    pub fn secrets_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Secrets {
        let pick = |var: &str, file: &Option<String>| {
            non_empty(lookup(var)).or_else(|| non_empty(file.clone()))
        };

        Secrets {
            app_secret: pick("APPSAPI_APP_SECRET", &self.secrets.app_secret).unwrap_or_default(),
            syncbak_app_key: pick("APPSAPI_SYNCBAK_APP_KEY", &self.secrets.syncbak_app_key)
                .unwrap_or_default(),
            syncbak_app_secret: pick("APPSAPI_SYNCBAK_APP_SECRET", &self.secrets.syncbak_app_secret)
                .unwrap_or_default(),
            at_tokens: Region::ALL
                .iter()
                .filter_map(|region| {
                    let var = format!("APPSAPI_AT_TOKEN_{}", region.code());
                    pick(&var, self.secrets.at_token.get(*region)).map(|token| (*region, token))
                })
                .collect::<BTreeMap<_, _>>(),
            preference_key: pick("APPSAPI_PREFERENCE_KEY", &self.secrets.preference_key),
        }
    }

    pub fn secrets(&self) -> Secrets {
        self.secrets_with(|var| std::env::var(var).ok())
    }

    pub fn resolver(&self, secrets: Secrets) -> EnvironmentResolver {
        EnvironmentResolver::new(secrets)
            .with_device_type(self.device.device_type)
            .with_locate_me_in(self.device.locate_me_in.clone())
    }

    pub fn session_options(&self) -> SessionOptions {
        let defaults = SessionOptions::default();
        SessionOptions {
            cache_control: non_empty(self.device.cache_control.clone())
                .unwrap_or(defaults.cache_control),
            locale: non_empty(self.device.locale.clone()).unwrap_or(defaults.locale),
        }
    }

    /// The configured device id, else one derived from the account name.
    /// `None` when neither is set.
    pub fn device_id(&self) -> Option<String> {
        non_empty(self.device.device_id.clone()).or_else(|| {
            self.credentials
                .as_ref()
                .map(|c| c.username.trim())
                .filter(|username| !username.is_empty())
                .map(derive_device_id)
        })
    }

    /// Like [`device_id`](Self::device_id), but creates a random id when none exists and
    /// saves it to `path` so later runs reuse it.
    pub fn device_id_or_create(&mut self, path: &Path) -> Result<String> {
        if let Some(id) = self.device_id() {
            return Ok(id);
        }

        let id = derive_device_id("");
        persist_device_id(path, &id)?;
        self.device.device_id = Some(id.clone());
        Ok(id)
    }
}

/// Names of the required secrets that are still empty.
pub fn missing_secrets(secrets: &Secrets) -> Vec<&'static str> {
    [
        ("app_secret", secrets.app_secret.as_str()),
        ("syncbak_app_key", secrets.syncbak_app_key.as_str()),
        ("syncbak_app_secret", secrets.syncbak_app_secret.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(name, _)| name)
    .collect()
}
