//! Domain primitives shared by every record type.
//!
//! Timestamps are Unix epoch milliseconds, the same representation the
//! persisted collections use. Time is read through a [`Clock`] so services
//! can be driven deterministically in tests.

use chrono::{DateTime, Local, NaiveDate, Utc};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Calendar day of `now()` in the local timezone.
    fn today(&self) -> NaiveDate {
        local_date(self.now())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now().timestamp_millis()
    }
}

/// Manually driven clock for tests and replays.
#[derive(Debug, Default)]
pub struct FixedClock(AtomicI64);

impl FixedClock {
    #[must_use]
    pub const fn new(now: Timestamp) -> Self {
        Self(AtomicI64::new(now))
    }

    pub fn set(&self, now: Timestamp) {
        self.0.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: i64) {
        self.0.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0.load(Ordering::SeqCst)
    }
}

/// Converts a millisecond timestamp to its local calendar date.
#[must_use]
pub fn local_date(ts: Timestamp) -> NaiveDate {
    let utc: DateTime<Utc> = DateTime::from_timestamp_millis(ts).unwrap_or_default();
    utc.with_timezone(&Local).date_naive()
}

/// Role prefix carried by every generated record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPrefix {
    Worker,
    Employer,
    Job,
    Review,
}

impl IdPrefix {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => "w",
            Self::Employer => "e",
            Self::Job => "j",
            Self::Review => "r",
        }
    }
}

impl fmt::Display for IdPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds `<prefix>_<now>`, adding a `_<n>` suffix while `is_taken` reports a clash.
///
/// # Examples
///
/// ```rust
/// use kaamchowk::domain::{IdPrefix, generate_id};
///
/// let id = generate_id(IdPrefix::Job, 1_700_000_000_000, |_| false);
/// assert_eq!(id, "j_1700000000000");
/// ```
pub fn generate_id(prefix: IdPrefix, now: Timestamp, is_taken: impl Fn(&str) -> bool) -> String {
    let base = format!("{prefix}_{now}");
    if !is_taken(&base) {
        return base;
    }

    let mut n = 1u32;
    loop {
        let candidate = format!("{base}_{n}");
        if !is_taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
