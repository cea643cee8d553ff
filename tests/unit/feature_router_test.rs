//! Unit tests for feature routing: titles, routes, and page-finished scripts.

use rstest::rstest;

use alphaedge_bridge::services::feature_router::{FeatureRouter, FeatureRouterTrait, DEFAULT_TITLE};
use alphaedge_bridge::types::feature::Feature;

fn router() -> FeatureRouter {
    FeatureRouter::new("https://alphaedge.streamlit.app")
}

#[rstest]
#[case("dashboard",       "Portfolio Dashboard",  "/")]
#[case("stock_analysis",  "Stock Analysis",       "/stock_analysis")]
#[case("recommendations", "Recommendations",      "/recommendations")]
#[case("portfolio",       "Portfolio Management", "/portfolio")]
#[case("profile",         "User Profile",         "/profile")]
#[case("help",            "Help & Support",       "/help")]
#[case("screener",        "AlphaEdge.ai",         "/screener")]
fn test_title_and_route(#[case] tag: &str, #[case] title: &str, #[case] route: &str) {
    let feature = Feature::parse(Some(tag));
    assert_eq!(router().title(&feature), title, "title for {tag}");
    assert_eq!(router().route(&feature), route, "route for {tag}");
    assert_eq!(feature.tag(), tag);
}

#[rstest]
#[case(None)]
#[case(Some(""))]
fn test_missing_feature_opens_dashboard(#[case] tag: Option<&str>) {
    assert_eq!(Feature::parse(tag), Feature::Dashboard);
}

#[rstest]
#[case("  ")]
#[case(" help ")]
#[case("Dashboard")]
fn test_feature_tags_match_exactly(#[case] tag: &str) {
    let feature = Feature::parse(Some(tag));
    assert_eq!(feature, Feature::Other(tag.to_string()));
    assert_eq!(router().title(&feature), DEFAULT_TITLE);
}

#[test]
fn test_unknown_feature_uses_default_title() {
    let feature = Feature::parse(Some("watchlist"));
    assert_eq!(feature, Feature::Other("watchlist".to_string()));
    assert_eq!(router().title(&feature), DEFAULT_TITLE);
}

#[test]
fn test_dashboard_only_hides_web_chrome() {
    let scripts = router().page_finished_scripts(&Feature::Dashboard);
    assert_eq!(scripts.len(), 1);
    assert!(scripts[0].contains(".stApp > header"));
    assert!(scripts[0].contains(".sidebar .sidebar-content"));
    assert!(!scripts[0].contains("location.href"));
}

#[test]
fn test_feature_navigation_is_guarded() {
    let scripts = router().page_finished_scripts(&Feature::Recommendations);
    assert_eq!(scripts.len(), 2);
    assert_eq!(
        scripts[1],
        r#"if(window.location.pathname!=="/recommendations"){window.location.href="/recommendations";}"#
    );
}

#[test]
fn test_start_url_is_app_root() {
    assert_eq!(router().start_url(&Feature::Help), "https://alphaedge.streamlit.app/");
    assert_eq!(router().start_url(&Feature::Dashboard), "https://alphaedge.streamlit.app/");
}
