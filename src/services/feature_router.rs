// AlphaEdge feature router
// Maps a feature tag to the window title, the web app route, and the scripts
// run once a page in the host surface has finished loading.

use crate::types::feature::Feature;

/// Title used for sections without a dedicated one.
pub const DEFAULT_TITLE: &str = "AlphaEdge.ai";

/// Hides the web app's own header and sidebar; the native window provides both.
const HIDE_WEB_CHROME_JS: &str = "(function(){\
var h=document.querySelector('.stApp > header');if(h)h.style.display='none';\
var s=document.querySelector('.sidebar .sidebar-content');if(s)s.style.display='none';\
})();";

/// Trait defining feature routing for the host surface.
pub trait FeatureRouterTrait {
    fn title(&self, feature: &Feature) -> String;
    fn route(&self, feature: &Feature) -> String;
    fn start_url(&self, feature: &Feature) -> String;
    fn page_finished_scripts(&self, feature: &Feature) -> Vec<String>;
}

/// Router rooted at the hosted web app's origin.
pub struct FeatureRouter {
    base_url: String,
}

impl FeatureRouter {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl FeatureRouterTrait for FeatureRouter {
    fn title(&self, feature: &Feature) -> String {
        let title = match feature {
            Feature::Dashboard => "Portfolio Dashboard",
            Feature::StockAnalysis => "Stock Analysis",
            Feature::Recommendations => "Recommendations",
            Feature::Portfolio => "Portfolio Management",
            Feature::Profile => "User Profile",
            Feature::Help => "Help & Support",
            Feature::Other(_) => DEFAULT_TITLE,
        };
        title.to_string()
    }

    fn route(&self, feature: &Feature) -> String {
        match feature {
            Feature::Dashboard => "/".to_string(),
            other => format!("/{}", other.tag()),
        }
    }

    /// The surface always opens on the app root; non-dashboard features are
    /// reached by the navigation script once the root has loaded.
    fn start_url(&self, _feature: &Feature) -> String {
        format!("{}/", self.base_url)
    }

    /// Scripts to evaluate after each page load.
    ///
    /// The navigation script only redirects when the current path differs,
    /// so it is safe to run again on the page it navigated to.
    fn page_finished_scripts(&self, feature: &Feature) -> Vec<String> {
        let mut scripts = vec![HIDE_WEB_CHROME_JS.to_string()];
        if *feature != Feature::Dashboard {
            let route = serde_json::Value::String(self.route(feature)).to_string();
            scripts.push(format!(
                "if(window.location.pathname!=={r}){{window.location.href={r};}}",
                r = route
            ));
        }
        scripts
    }
}
