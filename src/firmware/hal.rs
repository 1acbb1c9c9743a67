//! Capability seams between the controller and its collaborators.
//!
//! The controller never owns hardware or protocol internals. The media
//! pipeline, file-transfer client, time provider, artifact storage and
//! coarse platform timing are injected through these traits, so every
//! lifecycle decision is testable without a board attached.

use embassy_time::Duration;
use heapless::String;

use super::types::{
    CaptureError, ChainSpec, PipelineEvent, Timestamp, TransferError, TransferMode,
    RESPONSE_LINE_MAX,
};

/// Builds capture chains. One chain per session; a chain is never
/// reused after teardown.
pub trait MediaPipeline {
    type Chain: CaptureChain;

    async fn build(&mut self, spec: &ChainSpec) -> Result<Self::Chain, CaptureError>;
}

/// A linked capture→encode→store chain. The controller only starts it,
/// asks it to drain, waits on its event interface and tears it down;
/// buffering and codec framing stay inside the collaborator.
pub trait CaptureChain {
    async fn start(&mut self) -> Result<(), CaptureError>;

    /// Ask the source to flush and finalize without truncation. Must be
    /// idempotent; the chain confirms completion through a terminal
    /// [`PipelineEvent`], never through this call returning.
    fn signal_drain(&mut self);

    /// Bounded event wait. `None` means the timeout expired with no
    /// event, which the capture engine counts as one elapsed second.
    async fn poll_event(&mut self, timeout: Duration) -> Option<PipelineEvent>;

    async fn teardown(self);
}

/// Opens authenticated sessions against the remote file store.
pub trait FileTransferClient {
    type Session: TransferSessionIo;

    async fn connect(&mut self, host: &str, port: u16) -> Result<Self::Session, TransferError>;
}

/// One control connection. Fully synchronous request/response exchanges
/// from the controller's point of view; the agent holds at most one
/// session and always quits it deterministically.
pub trait TransferSessionIo {
    async fn login(&mut self, user: &str, pass: &str) -> bool;

    async fn put(
        &mut self,
        local_path: &str,
        remote_path: &str,
        mode: TransferMode,
    ) -> Result<(), TransferError>;

    /// Last raw response line from the server, if any. The first three
    /// characters are expected to be a numeric status code.
    fn last_response(&mut self) -> Option<String<RESPONSE_LINE_MAX>>;

    async fn quit(self);
}

/// Wall-clock source backed by SNTP (or whatever the board provides).
/// The clock-sync gate owns all retry and plausibility policy.
pub trait TimeProvider {
    fn now(&mut self) -> Timestamp;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    NotFound,
    Io,
}

/// Local artifact storage. Mounting and filesystem internals are board
/// bring-up; the controller only sizes finished files and deletes
/// confirmed ones.
pub trait ArtifactStore {
    async fn file_size(&mut self, path: &str) -> Result<u64, StoreError>;

    async fn remove(&mut self, path: &str) -> Result<(), StoreError>;
}

/// Coarse platform timing. Real builds back this with a timer; tests
/// record the requested delays and return immediately.
pub trait Platform {
    async fn delay(&mut self, duration: Duration);
}
