//! Time source for record timestamps and "today".
//!
//! # Invariants
//! - `today` is the device-local calendar date, not the UTC date.
//! - Timestamps render as RFC 3339 UTC with millisecond precision.

use chrono::{DateTime, Duration, Local, NaiveDate, SecondsFormat, Utc};
use std::cell::Cell;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
    fn today(&self) -> NaiveDate;

    /// `YYYY-MM-DD` form of `today`.
    fn today_string(&self) -> String {
        format_date(self.today())
    }

    /// RFC 3339 form of `now`, e.g. `2024-05-01T09:30:00.000Z`.
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn epoch_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually driven clock for tests and replays.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Clock pinned to midday UTC on `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date
            .and_hms_opt(12, 0, 0)
            .unwrap_or_default()
            .and_utc();
        Self::new(noon)
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    /// The UTC date of `now`; fixed clocks have no local zone.
    fn today(&self) -> NaiveDate {
        self.now.get().date_naive()
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses `YYYY-MM-DD`, ignoring any trailing time component.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// Parses an RFC 3339 timestamp as stored in `createdAt`.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}
