mod table;

use regex::{Captures, Regex};
use reqwest::Url;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::api::error::ApiError;

pub use table::ROUTES;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_reqwest(&self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Where a request value goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// `{name}` in the template, percent-encoded as a single segment.
    Path(&'static str),
    /// `{name}` in the template; the value is already percent-encoded and may span several
    /// segments.
    RawPath(&'static str),
    /// A single named query parameter.
    Query(&'static str),
    /// Arbitrary query parameters.
    QueryMap,
    /// A single named form field.
    Field(&'static str),
    /// Arbitrary form fields.
    FieldMap,
    /// Caller-supplied request body.
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    None,
    Form,
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    Fixed(&'static str, &'static str),
    /// Header whose value is a credential, filled from the configured secrets.
    Secret(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub params: &'static [Param],
    pub body: BodyKind,
    pub headers: &'static [Header],
    pub streaming: bool,
    pub response: &'static str,
}

impl Route {
    const fn new(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            name,
            method,
            path,
            params: &[],
            body: BodyKind::None,
            headers: &[],
            streaming: false,
            response: "",
        }
    }

    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Get, path)
    }

    pub const fn post(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Post, path)
    }

    pub const fn takes(mut self, params: &'static [Param]) -> Self {
        self.params = params;
        self
    }

    pub const fn sends(mut self, body: BodyKind) -> Self {
        self.body = body;
        self
    }

    pub const fn with_headers(mut self, headers: &'static [Header]) -> Self {
        self.headers = headers;
        self
    }

    pub const fn streaming(mut self) -> Self {
        self.streaming = true;
        self
    }

    pub const fn returns(mut self, response: &'static str) -> Self {
        self.response = response;
        self
    }

    pub fn path_params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().filter_map(|p| match p {
            Param::Path(name) | Param::RawPath(name) => Some(*name),
            _ => None,
        })
    }

    pub fn has_path_param(&self, key: &str) -> bool {
        self.path_params().any(|name| name == key)
    }

    fn is_raw_path_param(&self, key: &str) -> bool {
        self.params
            .iter()
            .any(|p| matches!(p, Param::RawPath(name) if *name == key))
    }

    pub fn accepts_query(&self, key: &str) -> bool {
        self.params.iter().any(|p| match p {
            Param::Query(name) => *name == key,
            Param::QueryMap => true,
            _ => false,
        })
    }

    pub fn accepts_form(&self, key: &str) -> bool {
        self.params.iter().any(|p| match p {
            Param::Field(name) => *name == key,
            Param::FieldMap | Param::Body => true,
            _ => false,
        })
    }

    /// Names of the `{placeholders}` in the path template, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let path: &'static str = self.path;
        PLACEHOLDER
            .captures_iter(path)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// Expands the template against `base` and appends the query pairs of `params`.
    pub fn build_url(&self, base: &str, params: &RequestParams) -> Result<Url, ApiError> {
        let template: &'static str = self.path;
        let (template, fixed_query) = match template.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (template, None),
        };

        let mut url = Url::parse(base).map_err(|e| ApiError::InvalidBaseUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base.to_string(),
                reason: "URL cannot be a base".to_string(),
            });
        }

        for raw_segment in template.split('/').filter(|s| !s.is_empty()) {
            let mut missing: Option<String> = None;
            let mut spans_segments = false;

            let expanded = PLACEHOLDER.replace_all(raw_segment, |caps: &Captures<'_>| {
                let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                if self.is_raw_path_param(name) {
                    spans_segments = true;
                }
                match params.path_value(name) {
                    Some(value) => value.to_string(),
                    None => {
                        missing.get_or_insert_with(|| name.to_string());
                        String::new()
                    }
                }
            });

            if let Some(name) = missing {
                return Err(ApiError::MissingPathParam {
                    route: self.name,
                    name,
                });
            }

            if spans_segments {
                // set_path keeps existing escapes, so encoded values pass through untouched
                let path = format!(
                    "{}/{}",
                    url.path().trim_end_matches('/'),
                    expanded.trim_start_matches('/')
                );
                url.set_path(&path);
            } else if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop_if_empty().push(&expanded);
            }
        }

        url.set_query(fixed_query);
        if !params.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&params.query);
        }

        Ok(url)
    }
}

pub fn routes() -> &'static [Route] {
    ROUTES
}

pub fn find_route(name: &str) -> Result<&'static Route, ApiError> {
    ROUTES
        .iter()
        .find(|route| route.name == name)
        .ok_or_else(|| ApiError::UnknownRoute(name.to_string()))
}

/// Values for a single request, split by where they end up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pub path: BTreeMap<String, String>,
    pub query: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.path.insert(key.into(), value.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((key.into(), value.into()));
        self
    }

    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn path_value(&self, key: &str) -> Option<&str> {
        self.path.get(key).map(String::as_str)
    }

    pub fn has_query(&self, key: &str) -> bool {
        self.query.iter().any(|(k, _)| k == key)
    }

    /// Places `key=value` wherever `route` accepts it: path first, then query, then form.
    pub fn assign(&mut self, route: &Route, key: &str, value: &str) -> Result<(), ApiError> {
        if route.has_path_param(key) {
            self.path.insert(key.to_string(), value.to_string());
        } else if route.accepts_query(key) {
            self.query.push((key.to_string(), value.to_string()));
        } else if route.accepts_form(key) {
            self.form.push((key.to_string(), value.to_string()));
        } else {
            return Err(ApiError::UnexpectedParam {
                route: route.name,
                key: key.to_string(),
            });
        }
        Ok(())
    }
}
