//! AlphaEdge desktop host.
//!
//! Uses `wry` for the embedded browser surface:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The hosted web app talks to the native side only through the bridge shim.

pub mod webview_app;
