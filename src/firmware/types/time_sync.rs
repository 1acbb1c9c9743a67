/// Wall-clock time as reported by the network-time provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    pub unix_seconds: u64,
}

impl Timestamp {
    pub const fn from_unix(unix_seconds: u64) -> Self {
        Self { unix_seconds }
    }

    /// Seconds since the Unix epoch shifted into local time. The logger
    /// stamps filenames and evaluates the upload window in local time.
    pub fn local_seconds(self, tz_offset_minutes: i32) -> i64 {
        self.unix_seconds as i64 + i64::from(tz_offset_minutes) * 60
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub const fn seconds_of_day(self) -> u32 {
        self.hour as u32 * 3_600 + self.minute as u32 * 60 + self.second as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockError {
    /// The time provider never reported a plausible wall-clock time
    /// within the retry budget. Filename stamping and schedule
    /// computation would be garbage; the cycle must not proceed.
    Unsynchronized,
}

impl ClockError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unsynchronized => "unsynchronized",
        }
    }
}
