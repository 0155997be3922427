use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::api::routes::{self, RequestParams};
use crate::api::session::AppsApiSession;
use crate::data::regions::Region;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStatusResponse {
    pub app_version: AppVersion,
    #[serde(default)]
    pub app_config: Map<String, Value>,
    #[serde(default)]
    pub locales_support: Vec<LocaleSupport>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppVersion {
    #[serde(default)]
    pub available_in_region: bool,
    pub client_region: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleSupport {
    pub lang: String,
    #[serde(default)]
    pub is_default_language: bool,
}

/// What the backend reports about one region's deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStatus {
    pub region: Region,
    pub host: String,
    pub country: String,
    pub locale: String,
    pub mvpd: bool,
    pub live_tv: bool,
    pub home: bool,
    pub movies: bool,
    pub movies_trending: bool,
    pub movie_genres: bool,
    pub brands: bool,
    pub sports_hq: bool,
    pub profiles: bool,
    pub syncbak: bool,
    pub live_feed_id: Option<String>,
}

// The backend serializes most switches as "true"/"false" strings.
fn flag(config: &Map<String, Value>, key: &str) -> bool {
    match config.get(key) {
        Some(Value::String(s)) => s == "true",
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}

impl RegionStatus {
    /// Returns `None` when the app is not offered in the caller's location.
    pub fn from_response(region: Region, host: &str, res: &AppStatusResponse) -> Option<Self> {
        if !res.app_version.available_in_region {
            return None;
        }

        let config = &res.app_config;
        let country = res
            .app_version
            .client_region
            .clone()
            .unwrap_or_else(|| region.code().to_string());

        let locale = res
            .locales_support
            .iter()
            .find(|l| l.is_default_language)
            .map(|l| l.lang.clone())
            .unwrap_or_else(|| "en-us".to_string());

        let mvpd = config
            .get("mvpd_enabled_countries")
            .and_then(Value::as_array)
            .is_some_and(|countries| countries.iter().any(|c| c.as_str() == Some(country.as_str())));

        // The US deployment always has the full catalog.
        let full_catalog = region == Region::Us;

        Some(Self {
            region,
            host: host.to_string(),
            locale,
            mvpd,
            live_tv: !flag(config, "livetv_disabled"),
            home: full_catalog || flag(config, "homepage_configurator_enabled"),
            movies: full_catalog || flag(config, "movies_enabled"),
            movies_trending: full_catalog || flag(config, "movies_trending_enabled"),
            movie_genres: full_catalog || flag(config, "movies_genres_enabled"),
            brands: full_catalog || flag(config, "brands_enabled"),
            sports_hq: flag(config, "sports_hq_enabled"),
            profiles: flag(config, "user_profiles"),
            syncbak: flag(config, "syncbak_enabled"),
            live_feed_id: config
                .get("live_tv_national_feed_content_id")
                .and_then(Value::as_str)
                .map(str::to_string),
            country,
        })
    }
}

impl<State> AppsApiSession<State> {
    async fn fetch_app_status(&self, region: Region, host: &str) -> Result<AppStatusResponse> {
        let route = routes::find_route("get_app_status")?;
        let res = self
            .prepare_for_host(host, region, route, RequestParams::new())?
            .send()
            .await
            .context("Failed to send app status request")?
            .error_for_status()
            .context("App status request returned unsuccessful status")?;

        let body: AppStatusResponse = res
            .json()
            .await
            .context("Failed to parse app status response")?;

        Ok(body)
    }

    pub async fn app_status(&self) -> Result<AppStatusResponse> {
        self.fetch_app_status(self.config.region, &self.config.host)
            .await
    }

    /// Probes each candidate host in order, with that region's own access token, and returns
    /// the first region that serves the app.
    pub async fn detect_region(
        &self,
        candidates: &[(Region, String)],
    ) -> Result<Option<RegionStatus>> {
        for (region, host) in candidates {
            match self.fetch_app_status(*region, host).await {
                Ok(res) => {
                    if let Some(status) = RegionStatus::from_response(*region, host, &res) {
                        tracing::info!(%region, country = %status.country, "App available in region");
                        return Ok(Some(status));
                    }
                    tracing::debug!(%region, "App not available in region");
                }
                Err(e) => tracing::warn!(%region, error = %e, "Region probe failed; skipping"),
            }
        }

        Ok(None)
    }
}

/// Every region paired with its deployment host.
pub fn default_candidates() -> Vec<(Region, String)> {
    Region::ALL
        .iter()
        .map(|region| (*region, region.environment().host().to_string()))
        .collect()
}
