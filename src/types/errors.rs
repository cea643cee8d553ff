use thiserror::Error;

// === BridgeError ===

/// Errors raised while decoding or dispatching a bridge call.
///
/// None of these ever reach script content as a thrown fault: the bridge
/// operations fold them into the encoded response, and the IPC layer turns
/// envelope errors into the `error` member of the reply.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The payload could not be decoded as the expected structured data.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    /// The data-type tag is outside the fixed enumerated set.
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),
    /// The IPC envelope named a method the bridge does not expose.
    #[error("unknown method: {0}")]
    UnknownMethod(String),
    /// The IPC envelope carried params that do not fit the method.
    #[error("invalid params: {0}")]
    InvalidParams(String),
    /// The UI-owning thread is no longer receiving commands.
    #[error("UI thread unavailable: {0}")]
    UiUnavailable(String),
}

// === SettingsError ===

/// Errors related to shell settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
}
