use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Regions with a dedicated backend deployment. Everything else is served by `Us`.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String")]
pub enum Region {
    Us,
    Ca,
    Au,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Us, Region::Ca, Region::Au];

    /// Exact lookup on the lowercased code. No trimming or aliasing.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "us" => Some(Self::Us),
            "ca" => Some(Self::Ca),
            "au" => Some(Self::Au),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Ca => "CA",
            Region::Au => "AU",
        }
    }

    pub fn environment(&self) -> Environment {
        ENVIRONMENT_TABLE
            .iter()
            .find(|(region, _)| region == self)
            .map(|(_, env)| *env)
            .unwrap_or(Environment::Prod)
    }
}

/// Region to deployment mapping. Regions missing here use `Environment::Prod`.
const ENVIRONMENT_TABLE: [(Region, Environment); 2] = [
    (Region::Au, Environment::AuProd),
    (Region::Ca, Environment::RowProd),
];

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Region {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| anyhow::anyhow!("Invalid region: {s}; expected 'us', 'ca' or 'au'"))
    }
}

impl TryFrom<String> for Region {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Named deployments of the apps-api backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    Prod,
    RowProd,
    AuProd,
}

impl Environment {
    pub fn host(&self) -> &'static str {
        match self {
            Environment::Prod => "https://www.paramountplus.com",
            // Canada moved off tv.cbs.com onto the international deployment.
            Environment::RowProd => "https://www.intl.paramountplus.com",
            Environment::AuProd => "https://www.tenallaccess.com.au",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Environment::Prod => "PROD",
            Environment::RowProd => "ROW_PROD",
            Environment::AuProd => "AU_PROD",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Deployments of the Syncbak local-station service. Every region uses `Prod`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SyncbakEnvironment {
    #[default]
    Prod,
}

impl SyncbakEnvironment {
    pub fn host(&self) -> &'static str {
        match self {
            SyncbakEnvironment::Prod => "https://api.syncbak.com",
        }
    }
}

impl fmt::Display for SyncbakEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncbakEnvironment::Prod => write!(f, "PROD"),
        }
    }
}

/// Path segment identifying the calling platform to the backend.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum DeviceType {
    #[default]
    AndroidPhone,
    AndroidTv,
}

impl DeviceType {
    pub fn as_segment(&self) -> &'static str {
        match self {
            DeviceType::AndroidPhone => "androidphone",
            DeviceType::AndroidTv => "androidtv",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_segment())
    }
}

impl FromStr for DeviceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "androidphone" | "phone" => Ok(Self::AndroidPhone),
            "androidtv" | "tv" => Ok(Self::AndroidTv),
            _ => anyhow::bail!("Invalid device type: {s}; expected 'androidphone' or 'androidtv'"),
        }
    }
}

impl TryFrom<String> for DeviceType {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
