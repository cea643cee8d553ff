use super::bridge::IpcResponse;

/// Default on-screen time for a toast, matching a short platform toast.
pub const SHORT_TOAST_MS: u64 = 2000;

/// Work queued for the UI-owning thread.
///
/// The bridge never touches visible state itself; it posts one of these and
/// returns. Whoever owns the receiving end executes it.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// Show a transient notification.
    ShowToast { message: String, duration_ms: u64 },
    /// Close the host surface and return to the previous screen.
    Close,
    /// Deliver an IPC reply back to script content.
    Reply(IpcResponse),
}
