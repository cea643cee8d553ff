//! Desktop host surface using `wry` + `tao`.
//!
//! Architecture:
//! - `with_initialization_script(BRIDGE_JS)` installs `window.AlphaEdgeBridge`
//!   (and the `AndroidBridge` alias) on every page before page scripts run.
//! - IPC from JS → Rust via `window.ipc.postMessage()`, dispatched through
//!   `rpc_handler::handle_message`.
//! - Everything visible happens on the event-loop thread: the bridge posts
//!   `UiCommand`s through an `EventLoopProxy` and the loop executes them.

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use tracing::{debug, info, warn};
use wry::{PageLoadEvent, WebViewBuilder};

use crate::app::{App, LaunchOptions};
use crate::rpc_handler::handle_message;
use crate::services::native_bridge::UiSink;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::errors::BridgeError;
use crate::types::ui::UiCommand;

const BRIDGE_JS: &str = include_str!("../../resources/bridge.js");

#[derive(Debug)]
enum UserEvent {
    Ui(UiCommand),
    /// A page in the surface finished loading.
    PageFinished(String),
}

impl UiSink for EventLoopProxy<UserEvent> {
    fn post(&self, command: UiCommand) -> Result<(), BridgeError> {
        self.send_event(UserEvent::Ui(command))
            .map_err(|e| BridgeError::UiUnavailable(e.to_string()))
    }
}

/// JS that executes a UI command inside the page, if it needs one.
fn command_script(command: &UiCommand) -> Option<String> {
    match command {
        UiCommand::ShowToast { message, duration_ms } => Some(format!(
            "window.__alphaedge_toast&&window.__alphaedge_toast({},{})",
            serde_json::Value::String(message.clone()),
            duration_ms
        )),
        UiCommand::Reply(reply) => {
            let json = serde_json::to_string(reply).ok()?;
            Some(format!("window.__alphaedge_resolve&&window.__alphaedge_resolve({})", json))
        }
        UiCommand::Close => None,
    }
}

// ─── Main entry point ───

pub fn run(options: LaunchOptions) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::new(&options)?;
    app.startup();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let settings = app.settings_engine.get_settings().clone();
    let window = WindowBuilder::new()
        .with_title(app.title())
        .with_inner_size(tao::dpi::LogicalSize::new(settings.window.width, settings.window.height))
        .build(&event_loop)?;

    let bridge = app.bridge(proxy.clone());
    let reply_proxy = proxy.clone();
    let load_proxy = proxy;

    let builder = WebViewBuilder::new()
        .with_initialization_script(BRIDGE_JS)
        .with_url(app.start_url())
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            debug!(len = body.len(), "ipc message");
            let reply = handle_message(&bridge, body);
            if reply_proxy.post(UiCommand::Reply(reply)).is_err() {
                warn!("event loop gone, IPC reply dropped");
            }
        })
        .with_on_page_load_handler(move |event, url| {
            if let PageLoadEvent::Finished = event {
                if load_proxy.send_event(UserEvent::PageFinished(url)).is_err() {
                    warn!("event loop gone, page-load event dropped");
                }
            }
        })
        .with_devtools(settings.devtools || cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("failed to get GTK vbox")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    let page_scripts = app.page_finished_scripts();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                app.shutdown();
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::PageFinished(url)) => {
                debug!(%url, "page finished");
                for js in &page_scripts {
                    if let Err(e) = webview.evaluate_script(js) {
                        warn!(error = %e, "page script failed");
                    }
                }
            }

            Event::UserEvent(UserEvent::Ui(UiCommand::Close)) => {
                info!("bridge requested close");
                app.shutdown();
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::Ui(command)) => {
                if let Some(js) = command_script(&command) {
                    if let Err(e) = webview.evaluate_script(&js) {
                        warn!(error = %e, "failed to run UI command");
                    }
                }
            }

            _ => {}
        }
    });
}
