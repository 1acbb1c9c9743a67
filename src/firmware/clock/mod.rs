//! Clock-sync gate. Blocks cycle progress until the wall clock is
//! trustworthy; filename stamping and sleep scheduling both depend on
//! it, so there is no best-effort mode.

pub mod civil;

use embassy_time::Duration;
use log::{error, info};

use super::config::{CLOCK_POLL_INTERVAL, CLOCK_SYNC_ATTEMPTS_MAX, EPOCH_YEAR_MIN};
use super::hal::{Platform, TimeProvider};
use super::types::{ClockError, Timestamp};
use civil::civil_from_local;

#[derive(Clone, Copy, Debug)]
pub struct ClockPolicy {
    pub poll_interval: Duration,
    pub attempts_max: u8,
    pub epoch_year_min: u16,
}

impl Default for ClockPolicy {
    fn default() -> Self {
        Self {
            poll_interval: CLOCK_POLL_INTERVAL,
            attempts_max: CLOCK_SYNC_ATTEMPTS_MAX,
            epoch_year_min: EPOCH_YEAR_MIN,
        }
    }
}

/// Polls the time provider until it reports a plausible year, or fails
/// after the retry budget. The caller's policy on failure is a hard
/// reboot; an unsynchronized default clock (1970, stale build year)
/// must never reach the capture path.
pub async fn synchronize<T, P>(
    time: &mut T,
    platform: &mut P,
    tz_offset_minutes: i32,
    policy: &ClockPolicy,
) -> Result<Timestamp, ClockError>
where
    T: TimeProvider,
    P: Platform,
{
    let mut attempt: u8 = 0;
    loop {
        attempt += 1;
        let now = time.now();
        let civil = civil_from_local(now.local_seconds(tz_offset_minutes));
        if civil.year >= policy.epoch_year_min {
            info!(
                "system time set: {:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                civil.year, civil.month, civil.day, civil.hour, civil.minute, civil.second
            );
            return Ok(now);
        }
        if attempt >= policy.attempts_max {
            error!("failed to set system time after {attempt} attempts");
            return Err(ClockError::Unsynchronized);
        }
        info!(
            "waiting for system time to be set ({attempt}/{})",
            policy.attempts_max
        );
        platform.delay(policy.poll_interval).await;
    }
}
