//! AlphaEdge shell: hosts the AlphaEdge.ai web app in an embedded browser
//! surface and exposes a small native bridge to its scripts.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod logging;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
