//! Wire and domain types for the script-facing bridge.
//!
//! Script content only ever sees JSON strings. Everything here is what those
//! strings decode into (or are encoded from) on the native side.

use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::BridgeError;

/// Error message returned by `fetch` for any tag outside [`DataType`].
pub const UNKNOWN_DATA_TYPE: &str = "Unknown data type";

/// Returned by `submit` when even the error response cannot be encoded.
pub const SUBMIT_FALLBACK: &str = r#"{"success": false, "error": "JSON error"}"#;

// ─── Tags ───

/// Data-type tags accepted by `fetch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    User,
    Portfolio,
}

impl FromStr for DataType {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(DataType::User),
            "portfolio" => Ok(DataType::Portfolio),
            other => Err(BridgeError::UnknownDataType(other.to_string())),
        }
    }
}

/// Data-type tags with a handler in `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    AddStock,
    UpdateProfile,
}

impl FromStr for SubmitKind {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add_stock" => Ok(SubmitKind::AddStock),
            "update_profile" => Ok(SubmitKind::UpdateProfile),
            other => Err(BridgeError::UnknownDataType(other.to_string())),
        }
    }
}

// ─── fetch payloads ───

/// The signed-in user as exposed to script content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub email: String,
}

impl UserProfile {
    pub fn demo() -> Self {
        Self {
            id: 1,
            username: "demo_user".to_string(),
            email: "demo@alphaedge.ai".to_string(),
        }
    }
}

/// Headline numbers of the active portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSummary {
    pub id: u64,
    pub name: String,
    pub value: u64,
    pub daily_change_percent: f64,
}

impl PortfolioSummary {
    pub fn demo() -> Self {
        Self {
            id: 1,
            name: "My Portfolio".to_string(),
            value: 1_250_000,
            daily_change_percent: 1.2,
        }
    }
}

/// `{"error": ...}` body used by `fetch` for unrecognized tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

// ─── submit payloads ───

/// Decoded `add_stock` payload.
///
/// Numeric fields accept numeric strings as well as numbers, and `quantity`
/// accepts a decimal (truncated), so hand-built payloads from script content
/// decode the same way they did on the mobile host.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AddStockRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub ticker: String,
    #[serde(deserialize_with = "lenient_int")]
    pub quantity: i64,
    #[serde(deserialize_with = "lenient_decimal")]
    pub price: f64,
}

/// Result of `submit`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl SubmitResult {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()) }
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        v @ (Value::Number(_) | Value::Bool(_)) => Ok(v.to_string()),
        other => Err(de::Error::custom(format!("{} is not a string", other))),
    }
}

fn lenient_int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(d)?;
    let parsed = match &value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_to_i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().and_then(truncate_to_i64))
        }
        _ => None,
    };
    parsed.ok_or_else(|| de::Error::custom(format!("{} is not an int", value)))
}

fn lenient_decimal<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(d)?;
    let parsed = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| de::Error::custom(format!("{} is not a number", value)))
}

fn truncate_to_i64(f: f64) -> Option<i64> {
    if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

// ─── IPC envelope ───

/// Methods reachable over IPC.
///
/// The original script-facing names (`showToast`, `getData`, `sendData`,
/// `close`) are accepted as aliases so existing page scripts keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeMethod {
    Notify,
    Fetch,
    Submit,
    Dismiss,
}

impl FromStr for BridgeMethod {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "notify" | "showToast" => Ok(BridgeMethod::Notify),
            "fetch" | "getData" => Ok(BridgeMethod::Fetch),
            "submit" | "sendData" => Ok(BridgeMethod::Submit),
            "dismiss" | "close" => Ok(BridgeMethod::Dismiss),
            other => Err(BridgeError::UnknownMethod(other.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NotifyParams {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FetchParams {
    #[serde(default, deserialize_with = "lenient_tag")]
    data_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitParams {
    #[serde(default, deserialize_with = "lenient_tag")]
    data_type: String,
    /// Missing becomes `null`, which then fails to parse as an object.
    #[serde(default)]
    payload: Value,
}

// Tags are never rejected at decode time. Scalars are stringified and a
// missing or null tag becomes "", which no handler matches.
fn lenient_tag<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// A fully decoded bridge call.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCall {
    Notify { message: String },
    Fetch { data_type: String },
    Submit { data_type: String, payload: String },
    Dismiss,
}

impl BridgeCall {
    /// Decodes a method name and its params object into a call.
    ///
    /// `submit` takes its payload as a JSON string; an object or array is
    /// re-encoded so the bridge still sees a string.
    pub fn decode(method: &str, params: &Value) -> Result<Self, BridgeError> {
        let invalid = |e: serde_json::Error| BridgeError::InvalidParams(format!("{}: {}", method, e));
        match method.parse::<BridgeMethod>()? {
            BridgeMethod::Notify => {
                let p: NotifyParams = serde_json::from_value(params.clone()).map_err(invalid)?;
                Ok(BridgeCall::Notify { message: p.message })
            }
            BridgeMethod::Fetch => {
                let p: FetchParams = serde_json::from_value(params.clone()).map_err(invalid)?;
                Ok(BridgeCall::Fetch { data_type: p.data_type })
            }
            BridgeMethod::Submit => {
                let p: SubmitParams = serde_json::from_value(params.clone()).map_err(invalid)?;
                let payload = match p.payload {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                Ok(BridgeCall::Submit { data_type: p.data_type, payload })
            }
            BridgeMethod::Dismiss => Ok(BridgeCall::Dismiss),
        }
    }
}

/// `{id, method, params}` as posted by script content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IpcRequest {
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default = "empty_params")]
    pub params: Value,
}

fn empty_params() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Reply sent back to script content for one [`IpcRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IpcResponse {
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl IpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self { id, result: Some(result), error: None }
    }

    pub fn failure(id: Value, error: impl Into<String>) -> Self {
        Self { id, result: None, error: Some(error.into()) }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
