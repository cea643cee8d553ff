//! Unit tests for the native bridge operations: notify, fetch, submit, dismiss.
//!
//! The bridge posts UI work to an mpsc channel standing in for the UI-owning
//! thread, so every side effect can be observed from the receiving end.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

use serde_json::{json, Value};

use alphaedge_bridge::services::native_bridge::{NativeBridge, NativeBridgeTrait};
use alphaedge_bridge::types::bridge::SUBMIT_FALLBACK;
use alphaedge_bridge::types::ui::UiCommand;

fn setup() -> (NativeBridge<mpsc::Sender<UiCommand>>, Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel();
    (NativeBridge::new(tx), rx)
}

fn parse(s: &str) -> Value {
    serde_json::from_str(s).expect("bridge output must be valid JSON")
}

// ─── fetch ───

#[test]
fn test_fetch_user_exact_payload() {
    let (bridge, rx) = setup();
    assert_eq!(
        bridge.fetch("user"),
        r#"{"id":1,"username":"demo_user","email":"demo@alphaedge.ai"}"#
    );
    assert!(rx.try_recv().is_err(), "fetch must not touch the UI");
}

#[test]
fn test_fetch_portfolio_exact_payload() {
    let (bridge, _rx) = setup();
    assert_eq!(
        bridge.fetch("portfolio"),
        r#"{"id":1,"name":"My Portfolio","value":1250000,"daily_change_percent":1.2}"#
    );
}

#[test]
fn test_fetch_unknown_tag() {
    let (bridge, _rx) = setup();
    for tag in ["", "User", "watchlist", "portfolio ", "add_stock"] {
        assert_eq!(parse(&bridge.fetch(tag)), json!({"error": "Unknown data type"}), "tag {:?}", tag);
    }
}

#[test]
fn test_fetch_user_is_byte_identical_across_calls() {
    let (bridge, _rx) = setup();
    let first = bridge.fetch("user");
    for _ in 0..10 {
        bridge.fetch("portfolio");
        bridge.submit("add_stock", r#"{"ticker":"TCS","quantity":1,"price":1}"#);
        assert_eq!(bridge.fetch("user"), first);
    }
}

// ─── submit ───

#[test]
fn test_submit_add_stock_success_and_toast() {
    let (bridge, rx) = setup();
    let res = bridge.submit("add_stock", r#"{"ticker":"TCS","quantity":10,"price":3300.0}"#);
    assert_eq!(res, r#"{"success":true}"#);
    assert_eq!(
        rx.try_recv().unwrap(),
        UiCommand::ShowToast {
            message: "Added 10 shares of TCS at ₹3300.0".to_string(),
            duration_ms: 2000,
        }
    );
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_submit_add_stock_integral_price_renders_decimal() {
    let (bridge, rx) = setup();
    bridge.submit("add_stock", r#"{"ticker":"INFY","quantity":3,"price":1500}"#);
    match rx.try_recv().unwrap() {
        UiCommand::ShowToast { message, .. } => assert_eq!(message, "Added 3 shares of INFY at ₹1500.0"),
        other => panic!("expected toast, got {:?}", other),
    }
}

#[test]
fn test_submit_add_stock_missing_fields() {
    let (bridge, rx) = setup();
    for payload in [
        r#"{"quantity":10,"price":3300.0}"#,
        r#"{"ticker":"TCS","price":3300.0}"#,
        r#"{"ticker":"TCS","quantity":10}"#,
        r#"{}"#,
    ] {
        let res = parse(&bridge.submit("add_stock", payload));
        assert_eq!(res["success"], json!(false), "payload {}", payload);
        let err = res["error"].as_str().expect("error must be a string");
        assert!(!err.is_empty());
    }
    assert!(rx.try_recv().is_err(), "failed submissions must not notify");
}

#[test]
fn test_submit_malformed_json() {
    let (bridge, _rx) = setup();
    let res = parse(&bridge.submit("add_stock", "{ticker: TCS"));
    assert_eq!(res["success"], json!(false));
    assert!(!res["error"].as_str().unwrap().is_empty());
}

#[test]
fn test_submit_non_object_payload_fails_for_every_tag() {
    let (bridge, _rx) = setup();
    for tag in ["add_stock", "update_profile", "anything"] {
        let res = parse(&bridge.submit(tag, "[1,2,3]"));
        assert_eq!(res["success"], json!(false), "tag {}", tag);
    }
}

#[test]
fn test_submit_update_profile_is_noop() {
    let (bridge, rx) = setup();
    let res = bridge.submit("update_profile", r#"{"email":"new@alphaedge.ai"}"#);
    assert_eq!(res, r#"{"success":true}"#);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_submit_unhandled_tag_is_accepted() {
    let (bridge, rx) = setup();
    let res = bridge.submit("delete_everything", r#"{"confirm":true}"#);
    assert_eq!(res, r#"{"success":true}"#);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_submit_fallback_literal_shape() {
    assert_eq!(parse(SUBMIT_FALLBACK), json!({"success": false, "error": "JSON error"}));
}

// ─── notify / dismiss ───

#[test]
fn test_notify_posts_toast() {
    let (tx, rx) = mpsc::channel();
    let bridge = NativeBridge::new(tx).with_toast_duration(3500);
    bridge.notify("Portfolio synced");
    assert_eq!(
        rx.try_recv().unwrap(),
        UiCommand::ShowToast { message: "Portfolio synced".to_string(), duration_ms: 3500 }
    );
}

#[test]
fn test_dismiss_posts_close() {
    let (bridge, rx) = setup();
    bridge.dismiss();
    assert_eq!(rx.try_recv().unwrap(), UiCommand::Close);
}

#[test]
fn test_side_effects_survive_dropped_ui_thread() {
    let (bridge, rx) = setup();
    drop(rx);
    bridge.notify("nobody is listening");
    bridge.dismiss();
    assert_eq!(
        bridge.submit("add_stock", r#"{"ticker":"TCS","quantity":1,"price":1.5}"#),
        r#"{"success":true}"#
    );
}

#[test]
fn test_calls_from_other_threads_reach_ui_thread() {
    let (bridge, rx) = setup();
    let bridge = Arc::new(bridge);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let b = Arc::clone(&bridge);
            thread::spawn(move || {
                b.notify(&format!("from worker {}", i));
                b.fetch("user")
            })
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), bridge.fetch("user"));
    }
    bridge.dismiss();
    drop(bridge);

    let commands: Vec<UiCommand> = rx.iter().collect();
    assert_eq!(commands.len(), 5);
    assert_eq!(commands.last(), Some(&UiCommand::Close));
    let toasts = commands
        .iter()
        .filter(|c| matches!(c, UiCommand::ShowToast { message, .. } if message.starts_with("from worker")))
        .count();
    assert_eq!(toasts, 4);
}
