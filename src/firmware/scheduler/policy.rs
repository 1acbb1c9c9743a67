use core::fmt::Write as _;

use heapless::String;

use super::super::clock::civil::{seconds_of_day, CivilDateTime, SECONDS_PER_DAY};
use super::super::config::ScheduleConfig;
use super::super::types::{TimeOfDay, UploadPolicy, ARTIFACT_PATH_MAX};

/// A configured daily upload time elects batching; its absence elects
/// upload-after-every-capture.
pub fn elect_policy(config: &ScheduleConfig) -> UploadPolicy {
    if config.upload_at.is_some() {
        UploadPolicy::ScheduledBatch
    } else {
        UploadPolicy::Immediate
    }
}

/// True while local time sits inside the daily window starting at
/// `upload_at`. The window may straddle midnight.
pub fn upload_due(local_seconds: i64, upload_at: TimeOfDay, window_s: u32) -> bool {
    let sod = i64::from(seconds_of_day(local_seconds));
    let start = i64::from(upload_at.seconds_of_day());
    let since_start = (sod - start).rem_euclid(SECONDS_PER_DAY);
    since_start < i64::from(window_s)
}

/// Seconds until the next daily occurrence of `upload_at`. Landing
/// exactly on the mark schedules the following day; the current
/// occurrence is the window being serviced right now.
pub fn seconds_until_next(local_seconds: i64, upload_at: TimeOfDay) -> u32 {
    let sod = i64::from(seconds_of_day(local_seconds));
    let target = i64::from(upload_at.seconds_of_day());
    let mut delta = target - sod;
    if delta <= 0 {
        delta += SECONDS_PER_DAY;
    }
    delta as u32
}

pub fn next_sleep_seconds(
    policy: UploadPolicy,
    config: &ScheduleConfig,
    local_seconds: i64,
) -> u32 {
    match (policy, config.upload_at) {
        (UploadPolicy::ScheduledBatch, Some(upload_at)) => {
            seconds_until_next(local_seconds, upload_at)
        }
        _ => config.wake_interval_s,
    }
}

/// Stamps a local-time artifact path, `<root>/YYYY.MM.DD.hh.mm.ss.wav`.
pub fn stamp_artifact_path(storage_root: &str, civil: CivilDateTime) -> String<ARTIFACT_PATH_MAX> {
    let mut path = String::new();
    let _ = write!(
        &mut path,
        "{}/{:04}.{:02}.{:02}.{:02}.{:02}.{:02}.wav",
        storage_root.trim_end_matches('/'),
        civil.year,
        civil.month,
        civil.day,
        civil.hour,
        civil.minute,
        civil.second
    );
    path
}
