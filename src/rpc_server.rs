//! AlphaEdge headless bridge host: newline-delimited JSON over stdin/stdout.
//!
//! Request:  {"id":1, "method":"fetch", "params":{"dataType":"user"}}
//! Response: {"id":1, "result":"{\"id\":1,...}"} or {"id":1, "error":"..."}
//! UI events: {"event":"toast","message":"...","duration_ms":2000}, {"event":"close"}
//!
//! The main thread plays the UI-owning thread: it alone writes to stdout.
//! A reader thread decodes requests and posts replies to it alongside the
//! bridge's own UI commands, so output order follows the order of posting.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use clap::Parser;
use serde_json::json;
use tracing::{info, warn};

use alphaedge_bridge::app::{App, LaunchOptions};
use alphaedge_bridge::rpc_handler::handle_message;
use alphaedge_bridge::services::native_bridge::UiSink;
use alphaedge_bridge::types::ui::UiCommand;

#[derive(Parser, Debug)]
#[command(name = "alphaedge-bridge-rpc", about = "Headless AlphaEdge bridge host", version)]
struct Cli {
    /// Settings file to use instead of the platform default
    #[arg(long)]
    config: Option<String>,
}

fn emit(out: &mut impl Write, line: &serde_json::Value) -> io::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    alphaedge_bridge::logging::init();
    let cli = Cli::parse();
    let app = App::new(&LaunchOptions { config_path: cli.config, ..LaunchOptions::default() })?;

    let (tx, rx) = mpsc::channel::<UiCommand>();
    let bridge = app.bridge(tx.clone());

    let reader = thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    warn!(error = %e, "stdin read failed");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let reply = handle_message(&bridge, &line);
            if tx.post(UiCommand::Reply(reply)).is_err() {
                break;
            }
        }
    });

    let mut out = io::stdout().lock();
    emit(&mut out, &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}))?;
    info!("headless bridge ready");

    // Ends after the reply that follows a close, or once the reader has hit
    // EOF and dropped its senders.
    let mut closing = false;
    for command in rx {
        match command {
            UiCommand::Reply(reply) => {
                emit(&mut out, &serde_json::to_value(&reply)?)?;
                if closing {
                    break;
                }
            }
            UiCommand::ShowToast { message, duration_ms } => emit(
                &mut out,
                &json!({"event": "toast", "message": message, "duration_ms": duration_ms}),
            )?,
            UiCommand::Close => {
                emit(&mut out, &json!({"event": "close"}))?;
                closing = true;
            }
        }
    }

    app.shutdown();
    // Still blocked on stdin after a close; exiting main ends it.
    drop(reader);
    Ok(())
}
