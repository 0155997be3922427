use std::collections::HashSet;

use appsapi_rs::api::error::ApiError;
use appsapi_rs::api::routes::{
    self, BodyKind, Header, HttpMethod, Param, RequestParams, find_route,
};

const BASE: &str = "https://www.paramountplus.com";

#[test]
fn table_covers_every_declared_endpoint() {
    assert_eq!(routes::routes().len(), 115);
}

#[test]
fn route_names_are_unique() {
    let mut seen = HashSet::new();
    for route in routes::routes() {
        assert!(seen.insert(route.name), "duplicate route name: {}", route.name);
    }
}

#[test]
fn every_placeholder_has_a_path_param_and_vice_versa() {
    for route in routes::routes() {
        let placeholders: HashSet<_> = route.placeholders().into_iter().collect();
        let declared: HashSet<_> = route.path_params().collect();
        assert_eq!(placeholders, declared, "mismatch in {}", route.name);
    }
}

#[test]
fn every_route_names_a_response_and_absolute_path() {
    for route in routes::routes() {
        assert!(!route.response.is_empty(), "{} has no response", route.name);
        assert!(route.path.starts_with('/'), "{} path is relative", route.name);
    }
}

#[test]
fn form_routes_are_posts() {
    for route in routes::routes() {
        if route.body != BodyKind::None {
            assert_eq!(route.method, HttpMethod::Post, "{} sends a body", route.name);
        }
    }
}

#[test]
fn looks_up_routes_by_name() {
    let route = find_route("get_show").expect("get_show exists");
    assert_eq!(route.method, HttpMethod::Get);
    assert_eq!(route.path, "/apps-api/v3.0/{deviceType}/shows/{showId}.json");

    let err = find_route("get_everything").expect_err("unknown route");
    assert!(matches!(err, ApiError::UnknownRoute(name) if name == "get_everything"));
}

#[test]
fn login_route_is_a_form_encoded_body() {
    let route = find_route("post_login").expect("post_login exists");
    assert_eq!(route.body, BodyKind::Raw);
    assert!(route.params.contains(&Param::Body));
    assert_eq!(
        route.headers,
        &[Header::Fixed(
            "Content-Type",
            "application/x-www-form-urlencoded;charset=UTF-8"
        )]
    );
}

#[test]
fn preference_key_header_is_a_secret() {
    let route = find_route("get_list_of_preferences").expect("route exists");
    assert_eq!(route.headers, &[Header::Secret("preference-key")]);
}

#[test]
fn builds_url_with_path_params_and_query() {
    let route = find_route("get_video_by_season_and_episode").expect("route exists");
    let params = RequestParams::new()
        .path("deviceType", "androidtv")
        .path("showId", "61456254")
        .path("seasonNumber", "2")
        .path("episodeNumber", "10")
        .query("locale", "en-us");

    let url = route.build_url(BASE, &params).expect("url builds");
    assert_eq!(
        url.as_str(),
        "https://www.paramountplus.com/apps-api/v3.0/androidtv/episode/61456254/2/10.json?locale=en-us"
    );
}

#[test]
fn encodes_path_values_as_single_segments() {
    let route = find_route("get_show_page_data").expect("route exists");
    let params = RequestParams::new()
        .path("deviceType", "androidphone")
        .path("showName", "star trek/picard");

    let url = route.build_url(BASE, &params).expect("url builds");
    assert_eq!(
        url.path(),
        "/apps-api/v3.0/androidphone/shows/slug/star%20trek%2Fpicard.json"
    );
}

#[test]
fn raw_path_values_span_segments() {
    let route = find_route("home_carousel_content_section").expect("route exists");
    let params = RequestParams::new().path("path", "/v3.0/androidphone/home/configurator/shows.json");

    let url = route.build_url(BASE, &params).expect("url builds");
    assert_eq!(
        url.path(),
        "/apps-api/v3.0/androidphone/home/configurator/shows.json"
    );
}

#[test]
fn raw_path_values_are_not_encoded_twice() {
    let route = find_route("download_brand_video").expect("route exists");
    let params = RequestParams::new().path("downloadUrl", "videos/a%20b.mp4");

    let url = route.build_url("https://h", &params).expect("url builds");
    assert_eq!(url.as_str(), "https://h/base/videos/a%20b.mp4");
}

#[test]
fn path_values_escape_percent_signs() {
    let route = find_route("get_show").expect("route exists");
    let params = RequestParams::new()
        .path("deviceType", "androidphone")
        .path("showId", "50%");

    let url = route.build_url(BASE, &params).expect("url builds");
    assert_eq!(url.path(), "/apps-api/v3.0/androidphone/shows/50%25.json");
}

#[test]
fn profile_switch_route_takes_profile_id() {
    let route = find_route("switch_profile").expect("route exists");
    assert_eq!(route.method, HttpMethod::Post);
    let params = RequestParams::new()
        .path("deviceType", "androidtv")
        .path("profileId", "42");

    let url = route.build_url(BASE, &params).expect("url builds");
    assert_eq!(
        url.path(),
        "/apps-api/v2.0/androidtv/user/account/profile/switch/42.json"
    );
}

#[test]
fn keeps_fixed_query_from_template() {
    let route = find_route("get_cbs_sports_channel").expect("route exists");
    let params = RequestParams::new()
        .path("deviceType", "androidphone")
        .query("device", "android");

    let url = route.build_url(BASE, &params).expect("url builds");
    assert_eq!(
        url.query(),
        Some("match=guid%7CMl_8xlr__D9RFI3OY8uXQmUK8c_Dfj2o&device=android")
    );
}

#[test]
fn keeps_base_path_prefix() {
    let route = find_route("look_up_user_ip").expect("route exists");
    let url = route
        .build_url("http://localhost:9000/proxy", &RequestParams::new())
        .expect("url builds");
    assert_eq!(url.as_str(), "http://localhost:9000/proxy/apps/user/ip.json");
}

#[test]
fn missing_path_param_is_an_error() {
    let route = find_route("get_show").expect("route exists");
    let params = RequestParams::new().path("deviceType", "androidphone");

    let err = route.build_url(BASE, &params).expect_err("showId missing");
    assert!(matches!(
        err,
        ApiError::MissingPathParam { route: "get_show", name } if name == "showId"
    ));
}

#[test]
fn invalid_base_url_is_an_error() {
    let route = find_route("get_schedule").expect("route exists");
    let params = RequestParams::new().path("deviceType", "androidphone");
    let err = route.build_url("not a url", &params).expect_err("bad base");
    assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
}

#[test]
fn assign_places_values_by_route_kind() {
    let search = find_route("get_search_content").expect("route exists");
    let mut params = RequestParams::new();
    params.assign(search, "term", "picard").expect("query map");
    assert_eq!(params.query, vec![("term".to_string(), "picard".to_string())]);

    let unbind = find_route("unbind_mvpd_auth_z").expect("route exists");
    let mut params = RequestParams::new();
    params.assign(unbind, "mvpdId", "AllAccess").expect("field map");
    assert_eq!(params.form, vec![("mvpdId".to_string(), "AllAccess".to_string())]);

    let show = find_route("get_show").expect("route exists");
    let mut params = RequestParams::new();
    params.assign(show, "showId", "408").expect("path param");
    assert_eq!(params.path_value("showId"), Some("408"));
}

#[test]
fn assign_honours_named_query_and_field_params() {
    let status = find_route("get_app_status").expect("route exists");
    let mut params = RequestParams::new();
    params.assign(status, "osv", "13").expect("named query");
    let err = params.assign(status, "rows", "5").expect_err("not declared");
    assert!(matches!(
        err,
        ApiError::UnexpectedParam { route: "get_app_status", key } if key == "rows"
    ));

    let remove = find_route("remove_my_show").expect("route exists");
    let mut params = RequestParams::new();
    params.assign(remove, "showId", "408").expect("named field");
    assert_eq!(params.form, vec![("showId".to_string(), "408".to_string())]);
    assert!(params.assign(remove, "other", "x").is_err());
}

#[test]
fn routes_without_params_reject_everything() {
    let route = find_route("get_schedule").expect("route exists");
    let mut params = RequestParams::new();
    assert!(params.assign(route, "rows", "10").is_err());
    assert!(params.assign(route, "deviceType", "androidtv").is_ok());
}
