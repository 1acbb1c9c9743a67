//! Duty-cycle lifecycle controller for a battery-powered acoustic field
//! logger.
//!
//! One wake cycle runs: clock-sync gate, capture session, upload-queue
//! handoff, transfer pass, sleep computation. The controller owns the
//! sequencing and the delete-only-after-confirmation invariant; Wi-Fi,
//! SNTP, the capture/encode chain, the FTP wire protocol and board
//! bring-up are injected capabilities (see [`firmware::hal`]).

#![no_std]
#![allow(async_fn_in_trait)]

#[cfg(test)]
extern crate std;

pub mod firmware;

pub use firmware::capture::{run_capture, CapturePlan, CaptureTuning};
pub use firmware::clock::{synchronize, ClockPolicy};
pub use firmware::config::{EndpointConfig, ScheduleConfig};
pub use firmware::hal::{
    ArtifactStore, CaptureChain, FileTransferClient, MediaPipeline, Platform, StoreError,
    TimeProvider, TransferSessionIo,
};
pub use firmware::queue::{QueueFull, UploadQueue};
pub use firmware::runtime::{PipelineEventBridge, TimerPlatform};
pub use firmware::scheduler::run_cycle;
pub use firmware::transfer::upload_all;
pub use firmware::types::{
    Artifact, CaptureError, ChainSpec, ClockError, CycleOutcome, PipelineEvent, RebootReason,
    TimeOfDay, Timestamp, TransferError, TransferMode, UploadPolicy, UploadReport, UploadStatus,
    WakeCycle,
};
