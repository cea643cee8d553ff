//! IPC method handler for the AlphaEdge bridge.
//!
//! Shared by the desktop host (messages from `window.ipc.postMessage`) and the
//! headless `alphaedge-bridge-rpc` binary (one JSON object per stdin line).
//! `handle_method` decodes a method name and params into a [`BridgeCall`] and
//! runs it against the bridge.

use serde_json::Value;
use tracing::{debug, warn};

use crate::services::native_bridge::NativeBridgeTrait;
use crate::types::bridge::{BridgeCall, IpcRequest, IpcResponse};

/// Dispatch one IPC method call to the bridge.
///
/// `fetch` and `submit` return their encoded payload as a JSON string value;
/// `notify` and `dismiss` return `null`. `Err` is reserved for envelope faults
/// (unknown method, params that do not fit); bridge operations themselves
/// always produce a value.
pub fn handle_method<B: NativeBridgeTrait>(bridge: &B, method: &str, params: &Value) -> Result<Value, String> {
    let call = BridgeCall::decode(method, params).map_err(|e| e.to_string())?;
    Ok(dispatch(bridge, call))
}

/// Run an already decoded call.
pub fn dispatch<B: NativeBridgeTrait>(bridge: &B, call: BridgeCall) -> Value {
    match call {
        BridgeCall::Notify { message } => {
            bridge.notify(&message);
            Value::Null
        }
        BridgeCall::Fetch { data_type } => Value::String(bridge.fetch(&data_type)),
        BridgeCall::Submit { data_type, payload } => Value::String(bridge.submit(&data_type, &payload)),
        BridgeCall::Dismiss => {
            bridge.dismiss();
            Value::Null
        }
    }
}

/// Handle one raw IPC message and build the reply for it.
///
/// A message that is not a valid envelope still gets a reply, with a null id.
pub fn handle_message<B: NativeBridgeTrait>(bridge: &B, raw: &str) -> IpcResponse {
    let req: IpcRequest = match serde_json::from_str(raw) {
        Ok(req) => req,
        Err(e) => {
            warn!(error = %e, "undecodable IPC message");
            return IpcResponse::failure(Value::Null, format!("parse error: {}", e));
        }
    };

    debug!(id = %req.id, method = %req.method, "ipc");
    match handle_method(bridge, &req.method, &req.params) {
        Ok(result) => IpcResponse::success(req.id, result),
        Err(err) => {
            warn!(id = %req.id, method = %req.method, error = %err, "ipc call rejected");
            IpcResponse::failure(req.id, err)
        }
    }
}
