#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkState {
    Disconnected,
    Connected,
    Authenticated,
}

impl LinkState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connected => "connected",
            Self::Authenticated => "authenticated",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferMode {
    Binary,
    Ascii,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferError {
    /// Control connection could not be established; fatal for the pass.
    ConnectFailed,
    /// Server rejected the credentials; fatal for the pass.
    AuthFailed,
    /// Server answered an individual transfer with a non-2xx status
    /// code; the item is retained and retried next pass.
    Rejected(u16),
    /// No parseable status line after a transfer; treated like a
    /// rejection, never like a success.
    NoResponse,
}

impl TransferError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConnectFailed => "connect_failed",
            Self::AuthFailed => "auth_failed",
            Self::Rejected(_) => "rejected",
            Self::NoResponse => "no_response",
        }
    }

    /// Fatal errors abort the whole pass and escalate to the scheduler's
    /// reboot policy; the rest are per-item and retryable.
    pub const fn is_fatal_for_pass(self) -> bool {
        matches!(self, Self::ConnectFailed | Self::AuthFailed)
    }
}

/// Per-pass outcome summary handed back to the scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub confirmed: u32,
    pub failed: u32,
}
