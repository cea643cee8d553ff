//! Native bridge exposed to script content in the hosted web app.
//!
//! Four operations: `notify`, `fetch`, `submit`, `dismiss`. Data comes back
//! synchronously as a JSON string; anything visible (toasts, closing the
//! surface) is posted to the UI-owning thread through a [`UiSink`] and the
//! call returns without waiting for it.

use std::sync::mpsc::Sender;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::types::bridge::{
    AddStockRequest, DataType, ErrorBody, PortfolioSummary, SubmitKind, SubmitResult, UserProfile,
    SUBMIT_FALLBACK, UNKNOWN_DATA_TYPE,
};
use crate::types::errors::BridgeError;
use crate::types::ui::{UiCommand, SHORT_TOAST_MS};

/// Queue onto the UI-owning thread.
pub trait UiSink {
    fn post(&self, command: UiCommand) -> Result<(), BridgeError>;
}

impl UiSink for Sender<UiCommand> {
    fn post(&self, command: UiCommand) -> Result<(), BridgeError> {
        self.send(command)
            .map_err(|e| BridgeError::UiUnavailable(e.to_string()))
    }
}

/// Trait defining the script-facing bridge operations.
///
/// Implementations never panic and never return an error to the caller:
/// failures are encoded in the returned payload or logged and dropped.
pub trait NativeBridgeTrait {
    fn notify(&self, message: &str);
    fn fetch(&self, data_type: &str) -> String;
    fn submit(&self, data_type: &str, payload: &str) -> String;
    fn dismiss(&self);
}

/// Stateless bridge over a UI sink.
pub struct NativeBridge<S: UiSink> {
    ui: S,
    toast_duration_ms: u64,
}

impl<S: UiSink> NativeBridge<S> {
    pub fn new(ui: S) -> Self {
        Self { ui, toast_duration_ms: SHORT_TOAST_MS }
    }

    pub fn with_toast_duration(mut self, duration_ms: u64) -> Self {
        self.toast_duration_ms = duration_ms;
        self
    }

    fn post(&self, command: UiCommand) {
        if let Err(e) = self.ui.post(command) {
            warn!(error = %e, "dropping UI command");
        }
    }

    fn toast(&self, message: String) {
        self.post(UiCommand::ShowToast { message, duration_ms: self.toast_duration_ms });
    }

    fn try_submit(&self, data_type: &str, payload: &str) -> Result<(), BridgeError> {
        let data: Map<String, Value> = serde_json::from_str(payload)
            .map_err(|e| BridgeError::MalformedPayload(e.to_string()))?;

        match data_type.parse::<SubmitKind>() {
            Ok(SubmitKind::AddStock) => {
                let req: AddStockRequest = serde_json::from_value(Value::Object(data))
                    .map_err(|e| BridgeError::MalformedPayload(e.to_string()))?;
                debug!(ticker = %req.ticker, quantity = req.quantity, price = req.price, "add_stock");
                self.toast(add_stock_message(&req));
            }
            Ok(SubmitKind::UpdateProfile) => {
                debug!(fields = data.len(), "update_profile accepted");
            }
            Err(_) => {
                debug!(data_type, "submit tag has no handler");
            }
        }
        Ok(())
    }
}

impl<S: UiSink> NativeBridgeTrait for NativeBridge<S> {
    fn notify(&self, message: &str) {
        debug!(text = message, "notify");
        self.toast(message.to_string());
    }

    fn fetch(&self, data_type: &str) -> String {
        debug!(data_type, "fetch");
        match data_type.parse::<DataType>() {
            Ok(DataType::User) => encode(&UserProfile::demo()),
            Ok(DataType::Portfolio) => encode(&PortfolioSummary::demo()),
            Err(_) => encode(&ErrorBody { error: UNKNOWN_DATA_TYPE.to_string() }),
        }
    }

    fn submit(&self, data_type: &str, payload: &str) -> String {
        debug!(data_type, "submit");
        let result = match self.try_submit(data_type, payload) {
            Ok(()) => SubmitResult::ok(),
            Err(e) => {
                warn!(data_type, error = %e, "submit rejected");
                SubmitResult::failed(failure_message(e))
            }
        };
        serde_json::to_string(&result).unwrap_or_else(|_| SUBMIT_FALLBACK.to_string())
    }

    fn dismiss(&self) {
        debug!("dismiss");
        self.post(UiCommand::Close);
    }
}

/// Toast text for an accepted `add_stock` submission.
pub fn add_stock_message(req: &AddStockRequest) -> String {
    format!("Added {} shares of {} at ₹{}", req.quantity, req.ticker, format_price(req.price))
}

// Always at least one decimal place: 3300.0, 1450.5. `Display` for f64
// never uses an exponent, so large and tiny prices stay positional.
fn format_price(price: f64) -> String {
    let s = price.to_string();
    if s.contains('.') {
        s
    } else {
        s + ".0"
    }
}

fn failure_message(e: BridgeError) -> String {
    match e {
        BridgeError::MalformedPayload(msg) => msg,
        other => other.to_string(),
    }
}

fn encode<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        warn!(error = %e, "failed to encode fetch result");
        r#"{"error": "JSON error"}"#.to_string()
    })
}
