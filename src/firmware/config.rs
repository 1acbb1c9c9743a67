//! Controller configuration and fixed tuning constants.
//!
//! Endpoint credentials are injected here by the integrator; nothing in
//! the controller carries literal hosts or passwords.

use embassy_time::Duration;
use heapless::String;

use super::types::{
    EncoderConfig, SourceConfig, TimeOfDay, CREDENTIAL_MAX, HOST_MAX, REMOTE_ROOT_MAX,
    STORAGE_ROOT_MAX,
};

/// Interval between clock plausibility polls while the gate waits for
/// the time provider to settle.
pub const CLOCK_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Poll attempts before the gate gives up and escalates.
pub const CLOCK_SYNC_ATTEMPTS_MAX: u8 = 10;
/// Years below this are treated as an unsynchronized default clock
/// (devices boot reading 1970 or a stale build date).
pub const EPOCH_YEAR_MIN: u16 = 2020;

/// Event-wait granularity during capture; one expiry is one elapsed
/// second of recording.
pub const CAPTURE_TICK: Duration = Duration::from_secs(1);
/// Settle time between the chain's terminal event and teardown, letting
/// the storage layer flush the file tail.
pub const STOP_GRACE: Duration = Duration::from_secs(5);
/// Ticks the engine will wait for a terminal event after signalling the
/// drain before declaring the chain hung.
pub const DRAIN_TIMEOUT_TICKS: u32 = 30;

pub const RECORD_DURATION_DEFAULT_S: u32 = 10;
pub const WAKE_INTERVAL_DEFAULT_S: u32 = 10;
pub const UPLOAD_WINDOW_DEFAULT_S: u32 = 60;
pub const QUEUE_CAPACITY_DEFAULT: usize = 10;

/// Read-only for the lifetime of a cycle; supplied by the integrator's
/// configuration collaborator at boot.
#[derive(Clone, Debug)]
pub struct ScheduleConfig {
    pub record_duration_s: u32,
    pub wake_interval_s: u32,
    /// Daily batch-upload time of day; `None` elects immediate upload.
    pub upload_at: Option<TimeOfDay>,
    /// Width of the daily upload window, so a wake landing shortly after
    /// the configured time still uploads.
    pub upload_window_s: u32,
    pub queue_capacity: usize,
    pub tz_offset_minutes: i32,
    pub epoch_year_min: u16,
    pub storage_root: String<STORAGE_ROOT_MAX>,
    pub source: SourceConfig,
    pub encoder: EncoderConfig,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let mut storage_root = String::new();
        let _ = storage_root.push_str("/sdcard");
        Self {
            record_duration_s: RECORD_DURATION_DEFAULT_S,
            wake_interval_s: WAKE_INTERVAL_DEFAULT_S,
            upload_at: Some(TimeOfDay::new(23, 59, 0)),
            upload_window_s: UPLOAD_WINDOW_DEFAULT_S,
            queue_capacity: QUEUE_CAPACITY_DEFAULT,
            tz_offset_minutes: 8 * 60,
            epoch_year_min: EPOCH_YEAR_MIN,
            storage_root,
            source: SourceConfig::default(),
            encoder: EncoderConfig::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EndpointConfig {
    pub host: String<HOST_MAX>,
    pub port: u16,
    pub user: String<CREDENTIAL_MAX>,
    pub password: String<CREDENTIAL_MAX>,
    pub remote_root: String<REMOTE_ROOT_MAX>,
}
