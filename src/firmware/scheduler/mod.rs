//! Cycle scheduler. Drives one wake cycle end to end: clock gate,
//! capture, queueing, the policy-gated upload pass, then the sleep or
//! reboot decision. All collaborators come in as arguments; the outcome
//! is a value the platform entry point acts on.

pub mod policy;
mod trace;


use log::{error, info};

use super::capture::{run_capture, CapturePlan, CaptureTuning};
use super::clock::{synchronize, ClockPolicy};
use super::config::{EndpointConfig, ScheduleConfig};
use super::hal::{ArtifactStore, FileTransferClient, MediaPipeline, Platform, TimeProvider};
use super::queue::UploadQueue;
use super::transfer::upload_all;
use super::types::{CycleOutcome, CyclePhase, RebootReason, UploadPolicy, WakeCycle};
use policy::{elect_policy, next_sleep_seconds, stamp_artifact_path, upload_due};
use trace::emit_cycle_event;

use super::clock::civil::civil_from_local;

/// Runs one wake cycle. The queue outlives the call; in a batching
/// deployment it carries pending artifacts across cycles.
pub async fn run_cycle<T, M, F, S, P>(
    time: &mut T,
    pipeline: &mut M,
    transfer: &mut F,
    store: &mut S,
    platform: &mut P,
    config: &ScheduleConfig,
    endpoint: &EndpointConfig,
    queue: &mut UploadQueue,
    sequence: u32,
) -> CycleOutcome
where
    T: TimeProvider,
    M: MediaPipeline,
    F: FileTransferClient,
    S: ArtifactStore,
    P: Platform,
{
    emit_cycle_event(sequence, CyclePhase::Boot, CyclePhase::SyncingTime, "wake");

    let clock_policy = ClockPolicy {
        epoch_year_min: config.epoch_year_min,
        ..ClockPolicy::default()
    };
    let wake_at = match synchronize(time, platform, config.tz_offset_minutes, &clock_policy).await {
        Ok(stamp) => stamp,
        Err(error) => {
            error!("clock gate failed: {}", error.as_str());
            return CycleOutcome::Reboot {
                reason: RebootReason::ClockUnsynchronized,
            };
        }
    };

    let cycle = WakeCycle {
        sequence,
        wake_at,
        policy: elect_policy(config),
    };
    info!(
        "cycle {} start, policy {}",
        cycle.sequence,
        cycle.policy.as_str()
    );
    emit_cycle_event(sequence, CyclePhase::SyncingTime, CyclePhase::Capturing, "clock_synced");

    let civil = civil_from_local(wake_at.local_seconds(config.tz_offset_minutes));
    let plan = CapturePlan {
        artifact_path: stamp_artifact_path(config.storage_root.as_str(), civil),
        target_duration_s: config.record_duration_s,
        started_at: wake_at,
        source: config.source,
        encoder: config.encoder,
    };
    let artifact = match run_capture(pipeline, store, platform, plan, &CaptureTuning::default()).await {
        Ok(artifact) => artifact,
        Err(error) => {
            error!("capture failed: {}", error.as_str());
            return CycleOutcome::Reboot {
                reason: RebootReason::CaptureFault(error),
            };
        }
    };

    let dropped_path = artifact.local_path.clone();
    if queue.enqueue(artifact).is_err() {
        // Reject-newest: the file stays on storage for manual recovery,
        // only its queue slot is refused.
        error!(
            "upload queue full ({} slots); not tracking {}",
            queue.capacity(),
            dropped_path
        );
    }

    let now = time.now();
    let local = now.local_seconds(config.tz_offset_minutes);
    let upload_now = match (cycle.policy, config.upload_at) {
        (UploadPolicy::Immediate, _) => true,
        (UploadPolicy::ScheduledBatch, Some(upload_at)) => {
            upload_due(local, upload_at, config.upload_window_s)
        }
        (UploadPolicy::ScheduledBatch, None) => false,
    };

    let pre_sleep_phase = if upload_now {
        emit_cycle_event(sequence, CyclePhase::Capturing, CyclePhase::Uploading, "upload_window");
        match upload_all(transfer, store, endpoint, queue).await {
            Ok(report) => {
                info!(
                    "cycle {} uploads: {} confirmed, {} failed",
                    cycle.sequence, report.confirmed, report.failed
                );
            }
            Err(error) => {
                error!("upload session failed: {}", error.as_str());
                return CycleOutcome::Reboot {
                    reason: RebootReason::TransferFault(error),
                };
            }
        }
        CyclePhase::Uploading
    } else {
        emit_cycle_event(sequence, CyclePhase::Capturing, CyclePhase::Queued, "upload_deferred");
        info!("{} artifact(s) held for the scheduled window", queue.len());
        CyclePhase::Queued
    };

    let local = time.now().local_seconds(config.tz_offset_minutes);
    let duration_s = next_sleep_seconds(cycle.policy, config, local);
    emit_cycle_event(sequence, pre_sleep_phase, CyclePhase::Sleeping, "cycle_complete");
    info!("entering deep sleep for {duration_s}s");
    CycleOutcome::Sleep { duration_s }
}
