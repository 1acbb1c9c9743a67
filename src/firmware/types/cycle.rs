use super::pipeline::CaptureError;
use super::time_sync::Timestamp;
use super::transfer::TransferError;

/// Upload cadence elected once per boot from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadPolicy {
    /// Transfer right after each capture, sleep a fixed wake interval.
    Immediate,
    /// Enqueue only; transfer when the wall clock enters the configured
    /// daily upload window.
    ScheduledBatch,
}

impl UploadPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::ScheduledBatch => "scheduled_batch",
        }
    }
}

/// One power-on event. Created at boot, dropped when the cycle arms the
/// sleep timer; nothing in here survives the power-down.
#[derive(Clone, Copy, Debug)]
pub struct WakeCycle {
    pub sequence: u32,
    pub wake_at: Timestamp,
    pub policy: UploadPolicy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CyclePhase {
    Boot,
    SyncingTime,
    Capturing,
    Uploading,
    Queued,
    Sleeping,
}

impl CyclePhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boot => "Boot",
            Self::SyncingTime => "SyncingTime",
            Self::Capturing => "Capturing",
            Self::Uploading => "Uploading",
            Self::Queued => "Queued",
            Self::Sleeping => "Sleeping",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebootReason {
    ClockUnsynchronized,
    CaptureFault(CaptureError),
    TransferFault(TransferError),
}

impl RebootReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClockUnsynchronized => "clock_unsynchronized",
            Self::CaptureFault(_) => "capture_fault",
            Self::TransferFault(_) => "transfer_fault",
        }
    }
}

/// Terminal decision of one cycle. The runtime either arms the low-power
/// timer or performs a cold restart; the controller never loops back
/// into `Boot` in-process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    Sleep { duration_s: u32 },
    Reboot { reason: RebootReason },
}
