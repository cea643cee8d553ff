// AlphaEdge platform paths
// Resolves where the shell keeps its settings on Windows, macOS, and Linux.
//
// `$ALPHAEDGE_CONFIG_DIR` wins everywhere; otherwise `cfg(target_os)` selects
// the platform convention at compile time.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the config directory on every platform.
pub const CONFIG_DIR_ENV: &str = "ALPHAEDGE_CONFIG_DIR";

/// Returns the configuration directory for the shell.
///
/// - **Override**: `$ALPHAEDGE_CONFIG_DIR`
/// - **Linux**: `$XDG_CONFIG_HOME/alphaedge` or `~/.config/alphaedge`
/// - **macOS**: `~/Library/Application Support/AlphaEdge`
/// - **Windows**: `%APPDATA%/AlphaEdge`
pub fn get_config_dir() -> PathBuf {
    resolve_config_dir(|key| env::var(key).ok())
}

/// Resolution logic behind [`get_config_dir`], with the environment injected.
pub fn resolve_config_dir<F>(var: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = var(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    platform_config_dir(&var)
}

#[cfg(target_os = "windows")]
fn platform_config_dir<F: Fn(&str) -> Option<String>>(var: &F) -> PathBuf {
    let appdata = var("APPDATA")
        .unwrap_or_else(|| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("AlphaEdge")
}

#[cfg(target_os = "macos")]
fn platform_config_dir<F: Fn(&str) -> Option<String>>(var: &F) -> PathBuf {
    PathBuf::from(var("HOME").unwrap_or_else(|| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
        .join("AlphaEdge")
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_config_dir<F: Fn(&str) -> Option<String>>(var: &F) -> PathBuf {
    if let Some(xdg) = var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("alphaedge")
    } else {
        let home = var("HOME").unwrap_or_else(|| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("alphaedge")
    }
}
