//! Timer-backed implementations of the platform seams, for builds that
//! run on an embassy executor. Board bring-up wires concrete pipeline,
//! transfer and storage collaborators next to these.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;
use embassy_time::{with_timeout, Duration, Timer};

use super::hal::Platform;
use super::types::PipelineEvent;

pub struct TimerPlatform;

impl Platform for TimerPlatform {
    async fn delay(&mut self, duration: Duration) {
        Timer::after(duration).await;
    }
}

/// Adapts a pipeline task's event channel to the capture engine's
/// bounded wait. The pipeline side pushes terminal events from its own
/// task; an empty wait that outlives the timeout reads as a tick.
pub struct PipelineEventBridge<'ch, M: RawMutex, const N: usize> {
    receiver: Receiver<'ch, M, PipelineEvent, N>,
}

impl<'ch, M: RawMutex, const N: usize> PipelineEventBridge<'ch, M, N> {
    pub fn new(receiver: Receiver<'ch, M, PipelineEvent, N>) -> Self {
        Self { receiver }
    }

    pub async fn next(&mut self, timeout: Duration) -> Option<PipelineEvent> {
        with_timeout(timeout, self.receiver.receive()).await.ok()
    }
}
