//! Durations in whole seconds and their clock-style rendering.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use chrono::NaiveTime;
use serde::Serialize;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_DAY: u64 = 86_400;

/// A non-negative duration measured in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TimeValue(u64);

impl TimeValue {
    pub const ZERO: TimeValue = TimeValue(0);

    pub const fn from_seconds(seconds: u64) -> Self {
        TimeValue(seconds)
    }

    pub const fn from_minutes(minutes: u64) -> Self {
        TimeValue(minutes * SECONDS_PER_MINUTE)
    }

    pub const fn seconds(self) -> u64 {
        self.0
    }

    pub fn checked_minutes(minutes: u64) -> Option<Self> {
        minutes.checked_mul(SECONDS_PER_MINUTE).map(TimeValue)
    }

    pub fn checked_add(self, rhs: TimeValue) -> Option<TimeValue> {
        self.0.checked_add(rhs.0).map(TimeValue)
    }

    pub fn checked_mul(self, rhs: u64) -> Option<TimeValue> {
        self.0.checked_mul(rhs).map(TimeValue)
    }

    // Wraps past 24h the way a wall clock does.
    fn time_of_day(self) -> NaiveTime {
        let secs = (self.0 % SECONDS_PER_DAY) as u32;
        NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default()
    }

    /// `HH:MM:SS`, used for cardio, workouts, stretching routines and day totals.
    pub fn clock(self) -> String {
        self.time_of_day().format("%H:%M:%S").to_string()
    }

    /// `MM:SS`, used for individual stretches. The hour component is dropped.
    pub fn short_clock(self) -> String {
        self.time_of_day().format("%M:%S").to_string()
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clock())
    }
}

impl From<u64> for TimeValue {
    fn from(seconds: u64) -> Self {
        TimeValue(seconds)
    }
}

impl Add for TimeValue {
    type Output = TimeValue;

    fn add(self, rhs: TimeValue) -> TimeValue {
        TimeValue(self.0 + rhs.0)
    }
}

impl Mul<u64> for TimeValue {
    type Output = TimeValue;

    fn mul(self, rhs: u64) -> TimeValue {
        TimeValue(self.0 * rhs)
    }
}

impl Sum for TimeValue {
    fn sum<I: Iterator<Item = TimeValue>>(iter: I) -> TimeValue {
        iter.fold(TimeValue::ZERO, Add::add)
    }
}
