use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::{Instant, sleep};

use crate::api::environment::{EnvironmentConfig, RegionMatch, Resolution};
use crate::api::error::ApiError;
use crate::api::routes::{self, BodyKind, Header, RequestParams, Route};
use crate::data::regions::Region;

const USER_AGENT: &str = "okhttp/3.14.2";
const DEVICE_TYPE_PARAM: &str = "deviceType";

/// Per-session request defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub cache_control: String,
    pub locale: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            cache_control: "no-cache".to_string(),
            locale: "en-us".to_string(),
        }
    }
}

/// HTTP adapter bound to one resolved environment.
pub struct AppsApiSession<State> {
    pub client: reqwest::Client,
    pub config: EnvironmentConfig,
    pub options: SessionOptions,
    pub state: State,
}

pub struct Anonymous;

pub struct LoggedIn {
    pub status: LoginStatus,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    success: bool,
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginStatus {
    #[serde(default)]
    pub is_logged_in: bool,
    pub active_profile: Option<Profile>,
    #[serde(default)]
    pub account_profiles: Vec<Profile>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: serde_json::Value,
    pub name: String,
    pub profile_pic_path: Option<String>,
}

impl Profile {
    /// The id as it appears in request paths; the backend sends it as a number or a string.
    pub fn id_string(&self) -> String {
        match &self.id {
            serde_json::Value::String(id) => id.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProfileSwitchResponse {
    #[serde(default)]
    success: bool,
    profile: Option<Profile>,
}

/// Code the user enters on the activation web page to link this device.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationCode {
    pub activation_code: String,
    pub device_token: String,
    /// Milliseconds between status polls.
    pub retry_interval: u64,
    /// Milliseconds before the code stops being valid.
    pub retry_duration: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    Pending,
    /// The backend wants a fresh code.
    Expired,
    Activated,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivationStatusResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    regenerate_code: bool,
}

fn encode_form(pairs: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .cookie_store(true)
        .build()
        .context("Failed to build HTTP client")?;
    Ok(client)
}

impl AppsApiSession<Anonymous> {
    pub fn new(config: EnvironmentConfig, options: SessionOptions) -> Result<Self> {
        tracing::debug!(
            environment = %config.environment,
            host = %config.host,
            device_type = %config.device_type,
            "Creating apps-api session"
        );

        Ok(Self {
            client: build_client()?,
            config,
            options,
            state: Anonymous,
        })
    }

    /// Builds a session from a resolver result, logging when the region was a fallback.
    pub fn from_resolution(resolution: Resolution, options: SessionOptions) -> Result<Self> {
        match &resolution.region_match {
            RegionMatch::Matched(region) => tracing::debug!(%region, "Resolved region"),
            RegionMatch::Unrecognized(code) => tracing::warn!(
                code = %code,
                fallback = %resolution.config.region,
                "Unrecognized country code; using default environment"
            ),
            RegionMatch::Absent => tracing::info!(
                fallback = %resolution.config.region,
                "No country code configured; using default environment"
            ),
        }

        Self::new(resolution.into_config(), options)
    }

    pub async fn login(
        self,
        username: &str,
        password: &str,
        device_id: &str,
    ) -> Result<AppsApiSession<LoggedIn>> {
        let route = routes::find_route("post_login")?;
        let params = RequestParams::new()
            .form("j_username", username)
            .form("j_password", password)
            .form("deviceId", device_id);

        let res: LoginResponse = self
            .call_json(route, params)
            .await
            .context("Login request failed")?;

        if !res.success {
            let message = res.message.unwrap_or_else(|| "no reason given".to_string());
            return Err(ApiError::LoginFailed(message).into());
        }

        self.into_logged_in().await
    }

    /// Asks the backend for a code that links this device from another screen.
    pub async fn request_activation_code(&self, device_id: &str) -> Result<ActivationCode> {
        let route = routes::find_route("get_activation_code")?;
        let params = RequestParams::new().form("deviceId", device_id);
        self.call_json(route, params)
            .await
            .context("Failed to request activation code")
    }

    /// Checks once whether `code` has been entered.
    pub async fn poll_activation(
        &self,
        code: &ActivationCode,
        device_id: &str,
    ) -> Result<ActivationState> {
        let route = routes::find_route("get_activation_code_status")?;
        let params = RequestParams::new()
            .form("activationCode", code.activation_code.as_str())
            .form("deviceToken", code.device_token.as_str())
            .form("deviceId", device_id);

        let res: ActivationStatusResponse = self.call_json(route, params).await?;
        let state = match (res.regenerate_code, res.success) {
            (true, _) => ActivationState::Expired,
            (false, true) => ActivationState::Activated,
            (false, false) => ActivationState::Pending,
        };
        tracing::debug!(?state, "Polled activation status");
        Ok(state)
    }

    /// Polls until `code` is entered, expires, or runs out of time.
    pub async fn activate(
        self,
        code: &ActivationCode,
        device_id: &str,
    ) -> Result<AppsApiSession<LoggedIn>> {
        let deadline = Instant::now() + Duration::from_millis(code.retry_duration);
        let interval = Duration::from_millis(code.retry_interval);

        loop {
            sleep(interval).await;
            match self.poll_activation(code, device_id).await? {
                ActivationState::Activated => return self.into_logged_in().await,
                ActivationState::Expired => return Err(ApiError::ActivationExpired.into()),
                ActivationState::Pending if Instant::now() >= deadline => {
                    return Err(ApiError::ActivationTimedOut(code.retry_duration / 1000).into());
                }
                ActivationState::Pending => {}
            }
        }
    }

    async fn into_logged_in(self) -> Result<AppsApiSession<LoggedIn>> {
        let status = self.login_status().await?;
        if let Some(profile) = &status.active_profile {
            tracing::info!(profile = %profile.name, "Logged in");
        }

        Ok(AppsApiSession {
            client: self.client,
            config: self.config,
            options: self.options,
            state: LoggedIn { status },
        })
    }
}

impl AppsApiSession<LoggedIn> {
    pub fn status(&self) -> &LoginStatus {
        &self.state.status
    }

    /// Makes `profile_id` the active profile for the rest of the session.
    pub async fn switch_profile(&mut self, profile_id: &str) -> Result<&Profile> {
        let route = routes::find_route("switch_profile")?;
        let res: ProfileSwitchResponse = self
            .call_json(route, RequestParams::new().path("profileId", profile_id))
            .await?;

        let profile = match (res.success, res.profile) {
            (true, Some(profile)) => profile,
            _ => return Err(ApiError::ProfileSwitchFailed(profile_id.to_string()).into()),
        };
        tracing::info!(profile = %profile.name, "Switched profile");

        let active = self.state.status.active_profile.insert(profile);
        Ok(&*active)
    }

    /// Drops the authenticated cookie jar and returns a fresh anonymous session.
    pub fn logout(self) -> Result<AppsApiSession<Anonymous>> {
        tracing::debug!("Logging out");
        AppsApiSession::new(self.config, self.options)
    }
}

impl<State> AppsApiSession<State> {
    pub async fn login_status(&self) -> Result<LoginStatus> {
        let route = routes::find_route("get_login_status")?;
        self.call_json(route, RequestParams::new()).await
    }

    /// Fills the device type and default query parameters the backend expects on every call.
    fn complete_params(
        &self,
        region: Region,
        route: &Route,
        mut params: RequestParams,
    ) -> RequestParams {
        if route.has_path_param(DEVICE_TYPE_PARAM) && params.path_value(DEVICE_TYPE_PARAM).is_none()
        {
            params = params.path(DEVICE_TYPE_PARAM, self.config.device_type.as_segment());
        }

        let mut defaults = vec![("locale".to_string(), self.options.locale.clone())];
        if let Some(at) = self.config.secrets().at_token(region) {
            defaults.push(("at".to_string(), at.to_string()));
        }
        if !self.config.locate_me_in.is_empty() {
            defaults.push(("LOCATEMEIN".to_string(), self.config.locate_me_in.clone()));
        }

        let mut query: Vec<(String, String)> = defaults
            .into_iter()
            .filter(|(key, _)| !params.has_query(key))
            .collect();
        query.append(&mut params.query);
        params.query = query;
        params
    }

    /// Builds a request against `host`, using the `at` token issued for `region`.
    pub(crate) fn prepare_for_host(
        &self,
        host: &str,
        region: Region,
        route: &Route,
        params: RequestParams,
    ) -> Result<reqwest::RequestBuilder> {
        let params = self.complete_params(region, route, params);
        let url = route.build_url(host, &params)?;

        tracing::debug!(route = route.name, method = %route.method, %url, "Preparing request");

        let mut req = self
            .client
            .request(route.method.as_reqwest(), url)
            .header(CACHE_CONTROL, self.options.cache_control.as_str());

        for header in route.headers {
            req = match header {
                Header::Fixed(name, value) => req.header(*name, *value),
                Header::Secret(name) => {
                    let value = self.config.secrets().header_value(name).ok_or(
                        ApiError::MissingSecret {
                            route: route.name,
                            header: *name,
                        },
                    )?;
                    req.header(*name, value)
                }
            };
        }

        // Raw routes declare their own Content-Type, so form pairs are encoded by hand.
        req = match (route.body, params.body) {
            (BodyKind::Raw, Some(_)) if !params.form.is_empty() => {
                return Err(ApiError::BodyConflict { route: route.name }.into());
            }
            (BodyKind::Raw, Some(body)) => req.body(body),
            (BodyKind::Raw, None) if !params.form.is_empty() => req.body(encode_form(&params.form)),
            (BodyKind::Form, _) if !params.form.is_empty() => req.form(&params.form),
            _ => req,
        };

        Ok(req)
    }

    pub fn prepare(&self, route: &Route, params: RequestParams) -> Result<reqwest::RequestBuilder> {
        self.prepare_for_host(&self.config.host, self.config.region, route, params)
    }

    pub async fn send(&self, route: &Route, params: RequestParams) -> Result<reqwest::Response> {
        let res = self
            .prepare(route, params)?
            .send()
            .await
            .with_context(|| format!("Failed to send {} request", route.name))?
            .error_for_status()
            .with_context(|| format!("{} request returned unsuccessful status", route.name))?;

        Ok(res)
    }

    pub async fn call_json<T: DeserializeOwned>(
        &self,
        route: &Route,
        params: RequestParams,
    ) -> Result<T> {
        let res = self.send(route, params).await?;
        let body = res
            .json()
            .await
            .with_context(|| format!("Failed to parse {} response", route.name))?;
        Ok(body)
    }

    pub async fn call_bytes(&self, route: &Route, params: RequestParams) -> Result<Vec<u8>> {
        let res = self.send(route, params).await?;
        let body = res
            .bytes()
            .await
            .with_context(|| format!("Failed to read {} response body", route.name))?;
        Ok(body.to_vec())
    }

    /// Looks up `name` in the route table and calls it, returning the JSON body untyped.
    pub async fn call_named(&self, name: &str, params: RequestParams) -> Result<serde_json::Value> {
        let route = routes::find_route(name)?;
        self.call_json(route, params).await
    }
}
