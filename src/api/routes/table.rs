//! Every endpoint the apps-api backend declares for mobile and TV clients.
//!
//! Each route also requires a `Cache-Control` header, which the session always sends.

use super::Param::{Body, Field, FieldMap, Path, Query, QueryMap, RawPath};
use super::{BodyKind, Header, Route};

pub static ROUTES: &[Route] = &[
    Route::post("add_my_show", "/apps-api/{deviceType}/lists/favoriteshows/unique/{uniqueName}/item/add.json")
        .takes(&[Path("deviceType"), Path("uniqueName"), QueryMap])
        .returns("ShowAddedEndpointResponse"),
    Route::get("add_to_the_preferences_list", "/apps-api/v3.0/{deviceType}/preference/{preferenceContainer}/{preferenceType}/add.json")
        .takes(&[Path("deviceType"), Path("preferenceContainer"), Path("preferenceType"), QueryMap])
        .returns("PreferedShowsResponse"),
    Route::post("amazon_cancel_receipt_server_request", "/apps-api/v3.0/{deviceType}/subscription/amazon/cancel.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("AmazonIAPRelatedServerResponse"),
    Route::post("amazon_purchase_request", "/apps-api/v3.0/{deviceType}/subscription/amazon/purchase.json")
        .takes(&[Path("deviceType"), Body])
        .sends(BodyKind::Raw)
        .returns("AmazonIAPRelatedServerResponse"),
    Route::post("amazon_rvs_server_request", "/apps-api/v3.0/{deviceType}/subscription/amazon/receipt.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("AmazonRVSServerResponse"),
    Route::post("amazon_switch_product_server_request", "/apps-api/v3.0/{deviceType}/subscription/amazon/product/migrate.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("AmazonIAPRelatedServerResponse"),
    Route::post("amazon_verify_auto_login_server_request", "/apps-api/v3.0/{deviceType}/amazon/device/restoration.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("AutoLoginServerResponse"),
    Route::get("continue_watching", "/apps-api/v3.0/{deviceType}/video/continuewatching/watch-history.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("HistoryResponse"),
    Route::post("convert_mvpd_auth_z", "/apps-api/v2.0/{deviceType}/mvpd/user/convert.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("MvpdAuthZResponse"),
    Route::post("create_account_by_email", "/apps-api/v3.0/{deviceType}/useraccount/registration.json")
        .takes(&[Path("deviceType"), Body])
        .sends(BodyKind::Raw)
        .with_headers(&[Header::Fixed("Content-Type", "application/x-www-form-urlencoded;charset=UTF-8")])
        .returns("CreateEndpointResponse"),
    Route::post("create_my_shows_list", "/apps-api/{deviceType}/lists/favoriteshows/create.json")
        .takes(&[Path("deviceType"), Field("uniqueName")])
        .sends(BodyKind::Form)
        .returns("MyShowEndpointResponse"),
    Route::post("deauthorize_mvpd_auth_z", "/apps-api/v2.0/{deviceType}/mvpd/auth/deauthorize/user.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("MvpdAuthZResponse"),
    Route::get("download_brand_video", "/base/{downloadUrl}")
        .takes(&[RawPath("downloadUrl")])
        .streaming()
        .returns("ResponseBody"),
    Route::get("dynamic_play_video", "/apps-api/v3.1/{deviceType}/dynamicplay/show/{showId}.json")
        .takes(&[Path("deviceType"), Path("showId"), QueryMap])
        .returns("DynamicVideoResponse"),
    Route::post("forgot_password", "/apps-api/{deviceType}/auth/useraccount/password/reset/request.json")
        .takes(&[Path("deviceType"), Body])
        .sends(BodyKind::Raw)
        .with_headers(&[Header::Fixed("Content-Type", "application/x-www-form-urlencoded;charset=UTF-8")])
        .returns("CreateEndpointResponse"),
    Route::get("get_account_token", "/apps-api/v3.0/{deviceType}/login/device/autologin/token.json")
        .takes(&[Path("deviceType")])
        .returns("AccountTokenResponse"),
    Route::post("get_activation_code", "/apps-api/v2.0/{deviceType}/ott/auth/code.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("ActivationCodeResponse"),
    Route::post("get_activation_code_status", "/apps-api/v2.0/{deviceType}/ott/auth/status.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("ActivationCodeStatusResponse"),
    Route::get("get_anonymous_drm_session", "/apps-api/v3.0/{deviceType}/irdeto-control/anonymous-session-token.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("DRMSessionEndpointResponse"),
    Route::get("get_app_status", "/apps-api/v2.0/{deviceType}/app/status.json")
        .takes(&[Path("deviceType"), Query("osv"), Query("hwv")])
        .returns("StatusEndpointResponse"),
    Route::get("get_brand", "/apps-api/v3.0/{deviceType}/brands/{brandSlug}.json")
        .takes(&[Path("deviceType"), Path("brandSlug"), QueryMap])
        .returns("BrandResponse"),
    Route::get("get_brands", "/apps-api/v3.0/{deviceType}/brands.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("BrandsResponse"),
    Route::get("get_brands_a_to_z_content", "/apps-api/v3.0/{deviceType}/brands/{brandSlug}/AtoZ.json")
        .takes(&[Path("deviceType"), Path("brandSlug"), QueryMap])
        .returns("BrandPageResponse"),
    Route::get("get_brands_trending_content", "/apps-api/v3.0/{deviceType}/brands/{brandSlug}/trending.json")
        .takes(&[Path("deviceType"), Path("brandSlug"), QueryMap])
        .returns("BrandPageResponse"),
    Route::get("get_cp_next_episode", "/apps-api/v3.0/{deviceType}/continuousplay/shows/{showId}/content/{contentId}/nextEpisode.json")
        .takes(&[Path("deviceType"), Path("showId"), Path("contentId"), QueryMap])
        .returns("CPNextEpisodeResponse"),
    Route::get("get_cp_promoted_show_video", "/apps-api/v3.0/{deviceType}/continuousplay/hint/promoted.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("PromotedVideoEndCardResponse"),
    Route::get("get_cp_related_show_history_video", "/apps-api/v3.0/{deviceType}/continuousplay/shows/{showId}/content/{contentId}/hint/relatedHistory.json")
        .takes(&[Path("deviceType"), Path("showId"), Path("contentId"), QueryMap])
        .returns("RelatedShowVideoEndCardResponse"),
    Route::get("get_cp_related_show_video", "/apps-api/v3.0/{deviceType}/continuousplay/content/{contentId}/related.json")
        .takes(&[Path("deviceType"), Path("contentId"), QueryMap])
        .returns("RelatedShowVideoEndCardResponse"),
    Route::get("get_cached_multi_channel_groups", "/apps-api/v3.0/{deviceType}/multiChannel.json")
        .takes(&[Path("deviceType")])
        .returns("MultiChannelGroupResponse"),
    Route::get("get_cast_info", "/apps-api/v2.0/{deviceType}/shows/{showId}/cast.json")
        .takes(&[Path("deviceType"), Path("showId"), QueryMap])
        .returns("CastEndpointResponse"),
    Route::get("get_cbs_sports_channel", "/apps-api/v3.0/{deviceType}/cbssports/events/proxy.json?match=guid%7CMl_8xlr__D9RFI3OY8uXQmUK8c_Dfj2o")
        .takes(&[Path("deviceType"), Query("device")])
        .returns("CbsSportsChannelResponse"),
    Route::get("get_cbsn_channels", "/apps-api/v3.0/{deviceType}/cbsn/schedule/feed.json")
        .takes(&[Path("deviceType")])
        .returns("CbsnChannelResponse"),
    Route::get("get_channel_listings", "/apps-api/v3.0/{deviceType}/live/channels/{channelSlug}/listings.json")
        .takes(&[Path("channelSlug"), Path("deviceType"), QueryMap])
        .returns("ListingsEndpointResponse"),
    Route::get("get_channels", "/apps-api/v3.0/{deviceType}/live/channels.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("ChannelsResponse"),
    Route::get("get_cookie_for_regeneration", "/apps-api/v3.0/{deviceType}/device/cookie/migration/regenerate.json")
        .takes(&[Path("deviceType"), Query("token")])
        .returns("AuthEndpointResponse"),
    Route::get("get_cookie_migration_token", "/apps-api/v3.0/{deviceType}/device/cookie/migration/token.json")
        .takes(&[Path("deviceType")])
        .returns("AccountTokenResponse"),
    Route::get("get_cp_show_recommendation_ml_videos", "/apps-api/v3.1/{deviceType}/continuousplay/content/{contentId}/hint/amlg/showrecommendation.json")
        .takes(&[Path("deviceType"), Path("contentId"), QueryMap])
        .returns("RelatedShowVideoEndCardResponse"),
    Route::get("get_drm_session", "/apps-api/v3.0/{deviceType}/irdeto-control/session-token.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("DRMSessionEndpointResponse"),
    Route::get("get_dmas", "/apps-api/v3.0/{deviceType}/dma.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("DmaResponse"),
    Route::get("get_etl_channels", "/apps-api/v3.0/{deviceType}/etl/liveschedule/feed.json")
        .takes(&[Path("deviceType")])
        .returns("EtlChannelResponse"),
    Route::get("get_featured_shows", "/apps-api/v2.0/{deviceType}/shows/promo/featured.json")
        .takes(&[Path("deviceType")])
        .returns("ShowsPromoFeaturedResponse"),
    Route::post("get_generated", "/apps-api/v3.0/{deviceType}/video/signature/generate.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("GenerateEndpointResponse"),
    Route::get("get_list_of_preferences", "/apps-api/v3.0/{deviceType}/preference/view.json")
        .takes(&[Path("deviceType"), QueryMap])
        .with_headers(&[Header::Secret("preference-key")])
        .returns("PreferedShowsResponse"),
    Route::get("get_listing", "/apps-api/v3.0/{deviceType}/live/channels/listings/{listingId}.json")
        .takes(&[Path("listingId"), Path("deviceType"), QueryMap])
        .returns("ListingDetailResponse"),
    Route::get("get_live_tv_affiliate", "/apps-api/v2.0/cbs/affiliate/{affiliateName}.json")
        .takes(&[Path("affiliateName")])
        .returns("AffiliateEndpointResponse"),
    Route::get("get_login_status", "/apps-api/v3.0/{deviceType}/login/status.json")
        .takes(&[Path("deviceType")])
        .returns("AuthStatusEndpointResponse"),
    Route::get("get_marquee", "/apps-api/v3.0/{deviceType}/home/marquee.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("MarqueeEndpointResponse"),
    Route::get("get_movie", "/apps-api/v3.0/{deviceType}/movies/{contentId}.json")
        .takes(&[Path("deviceType"), Path("contentId"), QueryMap])
        .returns("MovieEndpointResponse"),
    Route::get("get_movie_by_trailer", "/apps-api/v3.0/{deviceType}/movies/trailer/{contentId}.json")
        .takes(&[Path("deviceType"), Path("contentId"), QueryMap])
        .returns("MovieEndpointResponse"),
    Route::get("get_movie_genres", "/apps-api/v3.0/{deviceType}/movies/genre.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("MovieGenresEndpointResponse"),
    Route::get("get_movies", "/apps-api/v3.0/{deviceType}/movies.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("MoviesEndpointResponse"),
    Route::get("get_movies_by_genre", "/apps-api/v3.0/{deviceType}/movies.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("MoviesEndpointResponse"),
    Route::get("get_movies_trending", "/apps-api/v3.0/{deviceType}/movies/trending.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("MoviesTrendingEndpointResponse"),
    Route::get("get_multi_channel_groups", "/apps-api/v3.0/{deviceType}/multiChannel.json")
        .takes(&[Path("deviceType")])
        .returns("MultiChannelGroupResponse"),
    Route::get("get_mvpd_configs", "/apps-api/v3.0/{deviceType}/mvpd/configs.json")
        .takes(&[Path("deviceType")])
        .returns("MVPDConfigsEndpointResponse"),
    Route::get("get_my_shows", "/apps-api/{deviceType}/lists/favoriteshows/unique/{uniqueName}.json")
        .takes(&[Path("deviceType"), Path("uniqueName")])
        .returns("MyShowEndpointResponse"),
    Route::get("get_my_videos", "/apps-api/v3.0/{deviceType}/user/video/mycbs.json")
        .takes(&[Path("deviceType")])
        .returns("MyVideoResponse"),
    Route::get("get_news_hub_shows", "/apps-api/v3.0/{deviceType}/news/hub/shows.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("NewsHubShowsResponse"),
    Route::get("get_news_hub_stories", "/apps-api/v3.0/{deviceType}/news/hub/stories.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("NewsHubStoriesResponse"),
    Route::get("get_next_episode", "/apps-api/v3.0/{deviceType}/shows/{showId}/video/autoplay/nextEpisode.json")
        .takes(&[Path("deviceType"), Path("showId"), QueryMap])
        .returns("NextEpisodeResponse"),
    Route::get("get_non_local_channel_schedule_response", "/apps-api/v3.0/{deviceType}/schedule/{scheduleType}/feed.json")
        .takes(&[Path("deviceType"), Path("scheduleType")])
        .returns("NonLocalChannelScheduleResponse"),
    Route::get("get_optimizely_test_variants", "/apps-api/v3.0/{deviceType}/user/variants.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("OptimizelyTestVariantsResponse"),
    Route::get("get_page_attributes", "/apps-api/v3.0/{deviceType}/pageAttribute.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("PageAttributeResponse"),
    Route::get("get_page_attributes_group", "/apps-api/v3.0/{deviceType}/pageAttribute/tags/group.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("PageAttributeGroupResponse"),
    Route::get("get_page_attributes_new", "/apps-api/v3.0/{deviceType}/pageAttribute.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("NewPageAttributeResponse"),
    Route::get("get_related_shows", "/apps-api/v2.0/{deviceType}/shows/{showId}/related/shows.json")
        .takes(&[Path("deviceType"), Path("showId")])
        .returns("RelatedShowsEndpointResponse"),
    Route::post("get_rendezvous_authorize_device", "/apps-api/v2.0/{deviceType}/ott/devices/{partner}/auth/activate.json")
        .takes(&[Path("deviceType"), Path("partner"), QueryMap])
        .returns("ActivateEndpointResponse"),
    Route::get("get_schedule", "/apps-api/v2.0/{deviceType}/schedule.json")
        .takes(&[Path("deviceType")])
        .returns("ScheduleEndpointResponse"),
    Route::get("get_search_content", "/apps-api/v3.0/{deviceType}/contentsearch/search.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("SearchContentResponse"),
    Route::get("get_show", "/apps-api/v3.0/{deviceType}/shows/{showId}.json")
        .takes(&[Path("deviceType"), Path("showId")])
        .returns("ShowEndpointResponse"),
    Route::get("get_show_groups", "/apps-api/v2.0/{deviceType}/shows/groups.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("ShowGroupResponse"),
    Route::get("get_show_history", "/apps-api/v3.0/{deviceType}/video/show/{showId}/streams/history.json")
        .takes(&[Path("deviceType"), Path("showId"), QueryMap])
        .returns("HistoryResponse"),
    Route::get("get_show_menu", "/apps-api/v3.0/{deviceType}/shows/{showId}/menu.json")
        .takes(&[Path("deviceType"), Path("showId")])
        .returns("ShowMenuResponse"),
    Route::get("get_show_page_data", "/apps-api/v3.0/{deviceType}/shows/slug/{showName}.json")
        .takes(&[Path("showName"), Path("deviceType")])
        .returns("ShowPageDataResponse"),
    Route::get("get_show_season_availability", "/apps-api/v3.0/{deviceType}/shows/{showId}/video/season/availability.json")
        .takes(&[Path("deviceType"), Path("showId")])
        .returns("ShowSeasonAvailabilityResponse"),
    Route::get("get_show_videos", "/apps-api/v2.0/{deviceType}/shows/video/{showId}.json")
        .takes(&[Path("deviceType"), Path("showId"), QueryMap])
        .returns("VideoEndpointResponse"),
    Route::get("get_shows_by_group_id", "/apps-api/v2.0/{deviceType}/shows/group/{groupId}.json")
        .takes(&[Path("deviceType"), Path("groupId"), QueryMap])
        .returns("SingleShowGroupResponse"),
    Route::get("get_shows_section", "/apps-api/v3.0/{deviceType}/home/configurator/shows.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("HomeCarouselContentSectionResponse"),
    Route::post("get_unique_user", "/apps-api/v3.0/{deviceType}/video/signature/individualize.json")
        .takes(&[Path("deviceType")])
        .returns("IndividualizeEndpointResponse"),
    Route::get("get_upsell_info", "/apps-api/v2.0/{deviceType}/upsell.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("UpsellEndpointResponse"),
    Route::get("get_user_history", "/apps-api/v3.0/{deviceType}/video/streams/history.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("HistoryResponse"),
    Route::get("get_video_by_season_and_episode", "/apps-api/v3.0/{deviceType}/episode/{showId}/{seasonNumber}/{episodeNumber}.json")
        .takes(&[Path("deviceType"), Path("showId"), Path("seasonNumber"), Path("episodeNumber")])
        .returns("VideoSeasonEpisodeEndpointResponse"),
    Route::get("get_video_config", "/apps-api/v2.0/{deviceType}/shows/{showId}/videos/config/{uniqueName}.json")
        .takes(&[Path("deviceType"), Path("showId"), Path("uniqueName"), QueryMap])
        .returns("VideoConfigResponse"),
    Route::get("get_video_config_section", "/apps-api/v2.0/{deviceType}/videos/section/{sectionId}.json")
        .takes(&[Path("deviceType"), Path("sectionId"), QueryMap])
        .returns("VideoConfigSectionResponse"),
    Route::get("get_video_data", "/apps-api/v2.0/{deviceType}/video/cid/{contentId}.json")
        .takes(&[Path("deviceType"), Path("contentId")])
        .returns("VideoEndpointResponse"),
    Route::get("get_video_stream", "/apps-api/v3.0/{deviceType}/video/streams.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("VideoStreamsEndpoint"),
    Route::post("google_play_verify_auto_login_server_request", "/apps-api/v3.0/{deviceType}/googleplay/device/restoration.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("AutoLoginServerResponse"),
    Route::get("home_carousel_config", "/apps-api/v3.0/{deviceType}/home/configurator.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("HomeCarouselConfigResponse"),
    Route::get("home_carousel_content_section", "/apps-api{path}")
        .takes(&[RawPath("path"), QueryMap])
        .returns("HomeCarouselContentSectionResponse"),
    Route::get("home_carousel_continue_watching_section", "/apps-api{path}")
        .takes(&[RawPath("path"), QueryMap])
        .returns("HomeCarouselCWSectionResponse"),
    Route::get("home_carousel_keep_watching_section", "/apps-api{path}")
        .takes(&[RawPath("path"), QueryMap])
        .returns("HomeCarouselKWSectionResponse"),
    Route::get("home_carousel_show_group_config", "/apps-api{path}")
        .takes(&[RawPath("path"), QueryMap])
        .returns("HomeShowGroupConfigResponse"),
    Route::get("home_carousel_video_config_section", "/apps-api{path}")
        .takes(&[RawPath("path"), QueryMap])
        .returns("HomeCarouselVideoConfigSectionResponse"),
    Route::get("home_show_config", "/apps-api/v3.0/{deviceType}/{uniqueName}.json")
        .takes(&[Path("deviceType"), Path("uniqueName"), QueryMap])
        .returns("HomeShowGroupConfigResponse"),
    Route::get("home_show_group_config", "/apps-api/v3.0/{deviceType}/homeshowgroup.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("HomeShowGroupConfigResponse"),
    Route::get("home_show_group_section_config", "/apps-api/v3.0/{deviceType}/homeshowgroup/{homeShowGroupSectionId}.json")
        .takes(&[Path("deviceType"), Path("homeShowGroupSectionId"), QueryMap])
        .returns("SingleHomeShowGroupResponse"),
    Route::get("keep_watching", "/apps-api/v3.1/{deviceType}/video/keepwatching/watch-history.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("KeepWatchingResponse"),
    Route::get("look_up_user_ip", "/apps/user/ip.json")
        .returns("UserIpLookupResponse"),
    Route::post("post_chosen_trending_shows", "/apps-api/v2.0/{deviceType}/recommendation/amlg/shows/showpicker.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("RecommendationResponse"),
    Route::post("post_login", "/apps-api/v2.0/{deviceType}/auth/login.json")
        .takes(&[Path("deviceType"), Body])
        .sends(BodyKind::Raw)
        .with_headers(&[Header::Fixed("Content-Type", "application/x-www-form-urlencoded;charset=UTF-8")])
        .returns("AuthEndpointResponse"),
    Route::get("recommendation_for_you", "/apps-api/v2.0/{deviceType}/recommendation/amlg/shows/variant.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("RecommendationResponse"),
    Route::get("remove_from_the_preferences_list", "/apps-api/v3.0/{deviceType}/preference/{preferenceContainer}/{preferenceType}/remove.json")
        .takes(&[Path("deviceType"), Path("preferenceContainer"), Path("preferenceType"), QueryMap])
        .returns("PreferedShowsResponse"),
    Route::post("remove_my_show", "/apps-api/{deviceType}/lists/favoriteshows/unique/{uniqueName}/item/delete.json")
        .takes(&[Path("deviceType"), Path("uniqueName"), Field("showId")])
        .sends(BodyKind::Form)
        .returns("ShowAddedEndpointResponse"),
    Route::get("shows_you_watch", "/apps-api/v2.0/{deviceType}/video/show/history.json")
        .takes(&[Path("deviceType"), QueryMap])
        .returns("ShowsYouWatchResponse"),
    Route::post("switch_product", "/apps-api/v2.0/{deviceType}/googleplay/switchProduct.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("PlayBillingResponse"),
    Route::post("switch_profile", "/apps-api/v2.0/{deviceType}/user/account/profile/switch/{profileId}.json")
        .takes(&[Path("deviceType"), Path("profileId")])
        .returns("ProfileSwitchResponse"),
    Route::post("unbind_mvpd_auth_z", "/apps-api/v2.0/{deviceType}/mvpd/auth/user/unbind.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("MvpdAuthZResponse"),
    Route::post("unbind_mvpd_auth_z_no_param", "/apps-api/v2.0/{deviceType}/mvpd/auth/user/unbind.json")
        .takes(&[Path("deviceType"), Body])
        .sends(BodyKind::Raw)
        .returns("MvpdAuthZResponse"),
    Route::post("update_personal_identifiable_info", "/apps-api/v2.0/{deviceType}/useraccount/settings.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("UpdateProfileEndpointResponse"),
    Route::post("verify_google_play_billing_purchase", "/apps-api/v2.0/{deviceType}/googleplay/purchase.json")
        .takes(&[Path("deviceType"), Body])
        .sends(BodyKind::Raw)
        .returns("PlayBillingResponse"),
    Route::post("verify_mpvd_token", "/apps-api/v3.0/{deviceType}/mvpd/adobe/shortMediaToken.json")
        .takes(&[Path("deviceType"), Field("token")])
        .sends(BodyKind::Form)
        .returns("MvpdEndpointResponse"),
    Route::post("verify_mvpd_anon_auth_z", "/apps-api/v2.0/{deviceType}/mvpd/auth/user.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("MvpdAuthZResponse"),
    Route::post("verify_mvpd_reg_auth_z", "/apps-api/v2.0/{deviceType}/mvpd/auth/bind/user.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("MvpdAuthZResponse"),
    Route::get("verify_postal_code", "/apps-api/v2.0/zipcode/check.json")
        .takes(&[QueryMap])
        .returns("PostalCodeResponse"),
    Route::post("verify_token", "/apps-api/v2.0/{deviceType}/googleplay/verify/token.json")
        .takes(&[Path("deviceType"), FieldMap])
        .sends(BodyKind::Form)
        .returns("PlayBillingTokenVerifyResponse"),
];
