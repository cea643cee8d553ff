// AlphaEdge services
// The script-facing bridge, feature routing for the host surface, and shell settings.

pub mod feature_router;
pub mod native_bridge;
pub mod settings_engine;
