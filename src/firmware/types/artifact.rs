use heapless::String;

use super::base::ARTIFACT_PATH_MAX;
use super::time_sync::Timestamp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    Pending,
    InFlight,
    Confirmed,
    Failed,
}

impl UploadStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InFlight => "in_flight",
            Self::Confirmed => "confirmed",
            Self::Failed => "failed",
        }
    }
}

/// A committed recording on local storage awaiting remote transfer.
///
/// The local file exists for the whole `Pending`/`InFlight` lifetime and
/// is deleted at most once, only after the remote side acknowledged the
/// transfer with a 2xx response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub local_path: String<ARTIFACT_PATH_MAX>,
    pub created_at: Timestamp,
    pub size_bytes: u64,
    pub status: UploadStatus,
}

impl Artifact {
    /// Basename portion of the local path, used to build the remote path.
    pub fn basename(&self) -> &str {
        self.local_path
            .rsplit('/')
            .next()
            .unwrap_or(self.local_path.as_str())
    }
}
