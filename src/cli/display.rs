use tabled::{
    Table, Tabled,
    settings::{Alignment, Style, object::Columns, style::HorizontalLine},
};

use crate::api::environment::{EnvironmentConfig, RegionMatch, Resolution};
use crate::api::routes::{Param, Route};
use crate::api::session::LoginStatus;
use crate::api::status::RegionStatus;

#[derive(Tabled)]
pub struct RouteRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Method")]
    pub method: String,
    #[tabled(rename = "Path")]
    pub path: String,
    #[tabled(rename = "Params")]
    pub params: String,
    #[tabled(rename = "Response")]
    pub response: String,
}

impl From<&Route> for RouteRow {
    fn from(route: &Route) -> Self {
        let params = route
            .params
            .iter()
            .filter_map(|p| match p {
                Param::Path("deviceType") => None,
                Param::Path(name) => Some(format!("{{{name}}}")),
                Param::RawPath(name) => Some(format!("{{{name}*}}")),
                Param::Query(name) => Some(format!("?{name}")),
                Param::QueryMap => Some("?*".to_string()),
                Param::Field(name) => Some(format!("form:{name}")),
                Param::FieldMap => Some("form:*".to_string()),
                Param::Body => Some("body".to_string()),
            })
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            name: route.name.to_string(),
            method: route.method.to_string(),
            path: route.path.to_string(),
            params,
            response: route.response.to_string(),
        }
    }
}

#[derive(Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Tabled)]
pub struct RegionRow {
    #[tabled(rename = "Region")]
    pub region: String,
    #[tabled(rename = "Host")]
    pub host: String,
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Locale")]
    pub locale: String,
    #[tabled(rename = "Live TV")]
    pub live_tv: String,
    #[tabled(rename = "Movies")]
    pub movies: String,
    #[tabled(rename = "Sports HQ")]
    pub sports_hq: String,
    #[tabled(rename = "MVPD")]
    pub mvpd: String,
    #[tabled(rename = "Profiles")]
    pub profiles: String,
}

fn row(field: &'static str, value: String) -> FieldRow {
    FieldRow { field, value }
}

fn yes_no(value: bool) -> String {
    match value {
        true => "yes".to_string(),
        false => "no".to_string(),
    }
}

impl From<&RegionStatus> for RegionRow {
    fn from(status: &RegionStatus) -> Self {
        Self {
            region: status.region.to_string(),
            host: status.host.clone(),
            country: status.country.clone(),
            locale: status.locale.clone(),
            live_tv: yes_no(status.live_tv),
            movies: yes_no(status.movies),
            sports_hq: yes_no(status.sports_hq),
            mvpd: yes_no(status.mvpd),
            profiles: yes_no(status.profiles),
        }
    }
}

fn apply_style(table: &mut Table) {
    let table_style = Style::modern()
        .horizontals([(1, HorizontalLine::inherit(Style::modern()))])
        .remove_horizontal()
        .remove_frame();

    table.with(table_style);
}

pub fn format_routes_table(rows: Vec<RouteRow>) -> Table {
    let mut table = Table::new(rows);
    apply_style(&mut table);
    table.modify(Columns::one(1), Alignment::center());
    table
}

pub fn environment_rows(resolution: &Resolution) -> Vec<FieldRow> {
    let config: &EnvironmentConfig = &resolution.config;
    let region_match = match &resolution.region_match {
        RegionMatch::Matched(region) => format!("matched {region}"),
        RegionMatch::Unrecognized(code) => format!("unrecognized '{code}', using default"),
        RegionMatch::Absent => "no code given, using default".to_string(),
    };
    let secret_state = |value: &str| match value.is_empty() {
        true => "<unset>".to_string(),
        false => "<set>".to_string(),
    };

    vec![
        row("Region", config.region.to_string()),
        row("Region match", region_match),
        row("Environment", config.environment.to_string()),
        row("Host", config.host.clone()),
        row("Syncbak environment", config.syncbak_environment.to_string()),
        row("Syncbak host", config.syncbak_host.clone()),
        row("Country code", config.country_code.clone()),
        row("Locate me in", config.locate_me_in.clone()),
        row("Device type", config.device_type.to_string()),
        row("Downloads enabled", yes_no(config.downloads_enabled)),
        row("App secret", secret_state(config.app_secret())),
        row("Syncbak app key", secret_state(config.syncbak_app_key())),
        row("Syncbak app secret", secret_state(config.syncbak_app_secret())),
        row(
            "Access token",
            secret_state(config.secrets().at_token(config.region).unwrap_or_default()),
        ),
    ]
}

pub fn login_rows(status: &LoginStatus) -> Vec<FieldRow> {
    let active = status
        .active_profile
        .as_ref()
        .map(|p| format!("{} ({})", p.name, p.id_string()))
        .unwrap_or_else(|| "none".to_string());
    let profiles = status
        .account_profiles
        .iter()
        .map(|p| format!("{} ({})", p.name, p.id_string()))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        row("Logged in", yes_no(status.is_logged_in)),
        row("Active profile", active),
        row("Profiles", profiles),
    ]
}

pub fn format_fields_table(rows: Vec<FieldRow>) -> Table {
    let mut table = Table::new(rows);
    apply_style(&mut table);
    table.modify(Columns::first(), Alignment::right());
    table
}

pub fn format_regions_table(rows: Vec<RegionRow>) -> Table {
    let mut table = Table::new(rows);
    apply_style(&mut table);
    table
}
