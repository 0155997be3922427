use clap::{ArgGroup, Parser};
use std::str::FromStr;

use crate::data::regions::DeviceType;

/// APPSAPI - Command-line client for the streaming apps-api backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None,)]
#[command(group(
    ArgGroup::new("mode")
        .args(["init", "routes", "resolve", "status", "detect", "activate", "call"])
        .multiple(false)
        .required(false)
))]
#[command(group(ArgGroup::new("auth").args(["login", "activate"]).multiple(false)))]
pub struct Cli {
    /// Re-initializes application config file
    #[arg(long)]
    pub init: bool,

    /// List the route table
    #[arg(long)]
    pub routes: bool,

    /// Only list routes whose name or path contains this text
    #[arg(long, requires = "routes")]
    pub filter: Option<String>,

    /// Show the environment resolved for this device (default)
    #[arg(long)]
    pub resolve: bool,

    /// Query the backend's app status for the resolved environment
    #[arg(long)]
    pub status: bool,

    /// Probe every regional deployment and report the first that serves this location
    #[arg(long)]
    pub detect: bool,

    /// Link this device with an activation code entered on another screen
    #[arg(long)]
    pub activate: bool,

    /// Call a route by name, e.g. get_search_content
    #[arg(long, value_name = "ROUTE")]
    pub call: Option<String>,

    /// Request parameter as key=value; may be repeated
    #[arg(short, long = "param", value_name = "KEY=VALUE", requires = "call")]
    pub params: Vec<KeyValue>,

    /// Raw request body for routes that take one
    #[arg(long, requires = "call")]
    pub body: Option<String>,

    /// Log in with the configured credentials before calling
    #[arg(long, requires = "call")]
    pub login: bool,

    /// Switch to this profile id once logged in
    #[arg(long, value_name = "ID", requires = "auth")]
    pub profile: Option<String>,

    /// Country code override (e.g. us, ca, au)
    #[arg(short, long)]
    pub country: Option<String>,

    /// Device type override (androidphone, androidtv)
    #[arg(long)]
    pub device_type: Option<DeviceType>,

    /// Mark downloads as enabled for this device
    #[arg(long)]
    pub downloads: bool,

    /// Fail instead of falling back when the country code is unrecognized
    #[arg(long)]
    pub strict: bool,

    /// Cache-Control header value sent with every request
    #[arg(long)]
    pub cache_control: Option<String>,

    /// Increase verbosity (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl FromStr for KeyValue {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self {
                key: key.to_string(),
                value: value.to_string(),
            }),
            _ => anyhow::bail!("Invalid parameter: '{s}'; expected KEY=VALUE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliMode {
    Init,
    Routes {
        filter: Option<String>,
    },
    Resolve,
    Status,
    Detect,
    Activate {
        profile: Option<String>,
    },
    Call {
        route: String,
        params: Vec<KeyValue>,
        body: Option<String>,
        login: bool,
        profile: Option<String>,
    },
}

/// Device settings given on the command line; each one overrides the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceOverrides {
    pub country: Option<String>,
    pub device_type: Option<DeviceType>,
    pub downloads: bool,
    pub strict: bool,
    pub cache_control: Option<String>,
}

impl Cli {
    pub fn to_mode(&self) -> anyhow::Result<CliMode> {
        if self.init {
            return Ok(CliMode::Init);
        }
        if self.routes {
            return Ok(CliMode::Routes {
                filter: self.filter.clone(),
            });
        }
        if self.status {
            return Ok(CliMode::Status);
        }
        if self.detect {
            return Ok(CliMode::Detect);
        }
        if self.activate {
            return Ok(CliMode::Activate {
                profile: self.profile.clone(),
            });
        }
        if let Some(route) = &self.call {
            if route.trim().is_empty() {
                anyhow::bail!("--call requires a route name");
            }
            return Ok(CliMode::Call {
                route: route.clone(),
                params: self.params.clone(),
                body: self.body.clone(),
                login: self.login,
                profile: self.profile.clone(),
            });
        }

        Ok(CliMode::Resolve)
    }

    pub fn overrides(&self) -> DeviceOverrides {
        DeviceOverrides {
            country: self.country.clone(),
            device_type: self.device_type,
            downloads: self.downloads,
            strict: self.strict,
            cache_control: self.cache_control.clone(),
        }
    }
}
