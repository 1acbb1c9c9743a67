//! Proleptic-Gregorian conversion from epoch seconds, used for the
//! clock plausibility check, filename stamping and the upload window.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CivilDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

pub const SECONDS_PER_DAY: i64 = 86_400;

pub fn seconds_of_day(local_seconds: i64) -> u32 {
    local_seconds.rem_euclid(SECONDS_PER_DAY) as u32
}

/// Days-to-civil after Howard Hinnant's `civil_from_days`.
pub fn civil_from_local(local_seconds: i64) -> CivilDateTime {
    let days = local_seconds.div_euclid(SECONDS_PER_DAY);
    let sod = seconds_of_day(local_seconds);

    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u64;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
    let mut year = yoe as i64 + era * 400;
    if month <= 2 {
        year += 1;
    }

    CivilDateTime {
        year: year.clamp(0, u16::MAX as i64) as u16,
        month,
        day,
        hour: (sod / 3_600) as u8,
        minute: ((sod / 60) % 60) as u8,
        second: (sod % 60) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_start() {
        let civil = civil_from_local(0);
        assert_eq!(
            civil,
            CivilDateTime {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
                second: 0,
            }
        );
    }

    #[test]
    fn leap_day_2000() {
        let civil = civil_from_local(951_782_400);
        assert_eq!(civil.year, 2000);
        assert_eq!(civil.month, 2);
        assert_eq!(civil.day, 29);
        assert_eq!(civil.hour, 0);
    }

    #[test]
    fn known_modern_instant() {
        // 2023-11-14 22:13:20 UTC
        let civil = civil_from_local(1_700_000_000);
        assert_eq!(civil.year, 2023);
        assert_eq!(civil.month, 11);
        assert_eq!(civil.day, 14);
        assert_eq!(civil.hour, 22);
        assert_eq!(civil.minute, 13);
        assert_eq!(civil.second, 20);
    }

    #[test]
    fn timezone_shift_crosses_midnight() {
        // 2023-11-14 23:30 UTC is already the 15th at UTC+8.
        let utc_seconds: i64 = 1_700_004_600;
        let civil = civil_from_local(utc_seconds + 8 * 3_600);
        assert_eq!(civil.day, 15);
        assert_eq!(civil.hour, 7);
        assert_eq!(civil.minute, 30);
    }

    #[test]
    fn seconds_of_day_wraps() {
        assert_eq!(seconds_of_day(SECONDS_PER_DAY + 61), 61);
        assert_eq!(seconds_of_day(-1), (SECONDS_PER_DAY - 1) as u32);
    }
}
