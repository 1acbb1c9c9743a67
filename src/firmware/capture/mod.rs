//! Capture session manager. Runs one recording from chain link-up to a
//! committed artifact, with a two-phase stop: a drain request at the
//! target duration, then a wait for the chain's own terminal event.

mod engine;
mod machine;


use embassy_time::Duration;
use log::{info, warn};

use super::config::{CAPTURE_TICK, DRAIN_TIMEOUT_TICKS, STOP_GRACE};
use super::hal::{ArtifactStore, CaptureChain, MediaPipeline, Platform};
use super::types::{
    Artifact, CaptureError, ChainSpec, EncoderConfig, SourceConfig, Timestamp, UploadStatus,
    ARTIFACT_PATH_MAX,
};
use engine::CaptureEngine;
use machine::{CaptureAction, CaptureEvent};

pub use machine::CapturePhase;

#[derive(Clone, Debug)]
pub struct CapturePlan {
    pub artifact_path: heapless::String<ARTIFACT_PATH_MAX>,
    pub target_duration_s: u32,
    pub started_at: Timestamp,
    pub source: SourceConfig,
    pub encoder: EncoderConfig,
}

#[derive(Clone, Copy, Debug)]
pub struct CaptureTuning {
    /// Bound on each event wait; an expiry counts one elapsed second.
    pub tick: Duration,
    /// Settle delay between the terminal event and teardown, so the
    /// sink finishes flushing file headers.
    pub stop_grace: Duration,
    pub drain_timeout_ticks: u32,
}

impl Default for CaptureTuning {
    fn default() -> Self {
        Self {
            tick: CAPTURE_TICK,
            stop_grace: STOP_GRACE,
            drain_timeout_ticks: DRAIN_TIMEOUT_TICKS,
        }
    }
}

/// Drives one capture session to completion. On success the artifact
/// file is closed and sized on storage; on any fault the chain is torn
/// down before the error is returned, so a retry starts clean.
pub async fn run_capture<M, S, P>(
    pipeline: &mut M,
    store: &mut S,
    platform: &mut P,
    plan: CapturePlan,
    tuning: &CaptureTuning,
) -> Result<Artifact, CaptureError>
where
    M: MediaPipeline,
    S: ArtifactStore,
    P: Platform,
{
    let mut engine = CaptureEngine::new(plan.target_duration_s, tuning.drain_timeout_ticks);
    engine.apply(CaptureEvent::BeginLink);

    let spec = ChainSpec {
        source: plan.source,
        encoder: plan.encoder,
        sink_path: plan.artifact_path.clone(),
    };
    let mut chain = match pipeline.build(&spec).await {
        Ok(chain) => chain,
        Err(error) => {
            engine.apply(CaptureEvent::LinkFailed);
            warn!("pipeline link failed: {}", error.as_str());
            return Err(CaptureError::LinkFailed);
        }
    };

    if let Err(error) = chain.start().await {
        engine.apply(CaptureEvent::StartFailed);
        warn!("pipeline start failed: {}", error.as_str());
        chain.teardown().await;
        return Err(CaptureError::StartFailed);
    }
    engine.apply(CaptureEvent::Started);
    info!(
        "recording to {} for {}s",
        plan.artifact_path, plan.target_duration_s
    );

    loop {
        let event = match chain.poll_event(tuning.tick).await {
            Some(chain_event) => CaptureEvent::Chain(chain_event),
            None => CaptureEvent::Tick,
        };
        let result = engine.apply(event);
        if let CaptureEvent::Tick = event {
            if result.phase == CapturePhase::Running {
                info!("recording: {}s elapsed", result.elapsed_ticks);
            }
        }
        if result.action == Some(CaptureAction::SignalDrain) {
            info!("finishing recording");
            chain.signal_drain();
        }
        match result.phase {
            CapturePhase::Stopped => {
                if let CaptureEvent::Chain(chain_event) = event {
                    info!("stop event received: {}", chain_event.as_str());
                }
                break;
            }
            CapturePhase::Faulted => {
                let fault = engine.fault().unwrap_or(CaptureError::ChainFault);
                warn!("capture faulted: {}", fault.as_str());
                chain.teardown().await;
                return Err(fault);
            }
            _ => {}
        }
    }

    platform.delay(tuning.stop_grace).await;
    engine.apply(CaptureEvent::GraceDone);
    chain.teardown().await;

    let size_bytes = store
        .file_size(plan.artifact_path.as_str())
        .await
        .map_err(|_| CaptureError::StoreFault)?;
    info!("recording committed: {} ({size_bytes} bytes)", plan.artifact_path);

    Ok(Artifact {
        local_path: plan.artifact_path,
        created_at: plan.started_at,
        size_bytes,
        status: UploadStatus::Pending,
    })
}
