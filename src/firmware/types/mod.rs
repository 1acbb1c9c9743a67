mod artifact;
mod base;
mod cycle;
mod pipeline;
mod time_sync;
mod transfer;

pub use artifact::{Artifact, UploadStatus};
pub use base::{
    ARTIFACT_PATH_MAX, CREDENTIAL_MAX, HOST_MAX, REMOTE_PATH_MAX, REMOTE_ROOT_MAX,
    RESPONSE_LINE_MAX, STORAGE_ROOT_MAX, UPLOAD_QUEUE_SLOTS,
};
pub use cycle::{CycleOutcome, CyclePhase, RebootReason, UploadPolicy, WakeCycle};
pub use pipeline::{CaptureError, ChainSpec, ChannelFormat, EncoderConfig, PipelineEvent, SourceConfig};
pub use time_sync::{ClockError, TimeOfDay, Timestamp};
pub use transfer::{LinkState, TransferError, TransferMode, UploadReport};
