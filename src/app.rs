//! App core for the AlphaEdge shell.
//!
//! Holds the loaded settings and the feature being opened, and builds the
//! bridge for whichever host drives the UI thread.

use tracing::info;

use crate::services::feature_router::{FeatureRouter, FeatureRouterTrait};
use crate::services::native_bridge::{NativeBridge, UiSink};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::feature::Feature;

/// Launch-time overrides, typically from the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Feature tag to open; falls back to the configured default.
    pub feature: Option<String>,
    /// Origin of the hosted web app; not persisted.
    pub base_url: Option<String>,
    /// Settings file to use instead of the platform default.
    pub config_path: Option<String>,
}

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub router: FeatureRouter,
    pub feature: Feature,
}

impl App {
    /// Loads settings and resolves the feature to open.
    pub fn new(options: &LaunchOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(options.config_path.clone());
        settings_engine.load()?;

        if let Some(url) = &options.base_url {
            settings_engine.get_settings_mut().base_url = url.clone();
        }

        let settings = settings_engine.get_settings();
        let router = FeatureRouter::new(&settings.base_url);
        let tag = options.feature.as_deref().unwrap_or(&settings.default_feature);
        let feature = Feature::parse(Some(tag));

        Ok(Self { settings_engine, router, feature })
    }

    /// Builds a bridge posting to `sink`, using the configured toast duration.
    pub fn bridge<S: UiSink>(&self, sink: S) -> NativeBridge<S> {
        NativeBridge::new(sink).with_toast_duration(self.settings_engine.get_settings().toast_duration_ms)
    }

    pub fn title(&self) -> String {
        self.router.title(&self.feature)
    }

    pub fn start_url(&self) -> String {
        self.router.start_url(&self.feature)
    }

    pub fn page_finished_scripts(&self) -> Vec<String> {
        self.router.page_finished_scripts(&self.feature)
    }

    pub fn startup(&self) {
        info!(
            feature = self.feature.tag(),
            url = %self.start_url(),
            config = self.settings_engine.get_config_path(),
            "starting AlphaEdge shell"
        );
    }

    pub fn shutdown(&self) {
        info!(feature = self.feature.tag(), "closing AlphaEdge shell");
    }
}
