use chrono::Weekday;
use serde::Serialize;

use crate::errors::PlanError;
use crate::model::{CardioSession, StretchingRoutine, Workout};
use crate::routine::{DAYS_PER_WEEK, WeeklyRoutine};
use crate::time::TimeValue;

const WEEKDAYS: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Borrowed view of everything planned for one day.
#[derive(Debug, Clone, Copy)]
pub struct DaySlot<'a> {
    /// 1-based day number.
    pub day: usize,
    pub weekday: Weekday,
    pub workout: &'a Workout,
    pub stretching: &'a StretchingRoutine,
    pub cardio: &'a CardioSession,
}

impl DaySlot<'_> {
    pub fn total_time(&self) -> TimeValue {
        self.workout.time() + self.stretching.time() + self.cardio.duration
    }

    pub fn summary(&self) -> DaySummary {
        DaySummary {
            day: self.day,
            weekday: self.weekday,
            workout: self.workout.time(),
            stretching: self.stretching.time(),
            cardio: self.cardio.duration,
            total: self.total_time(),
        }
    }
}

/// Per-day time totals as shown by the schedule report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub day: usize,
    pub weekday: Weekday,
    pub workout: TimeValue,
    pub stretching: TimeValue,
    pub cardio: TimeValue,
    pub total: TimeValue,
}

impl DaySummary {
    pub fn label(&self) -> String {
        format!("Day {}", self.day)
    }
}

impl WeeklyRoutine {
    fn slot(&self, index: usize) -> DaySlot<'_> {
        DaySlot {
            day: index + 1,
            weekday: WEEKDAYS[index],
            workout: &self.workouts[index],
            stretching: &self.stretching[index],
            cardio: &self.cardio[index],
        }
    }

    /// All seven days in order, Monday first.
    pub fn days(&self) -> impl Iterator<Item = DaySlot<'_>> + '_ {
        (0..DAYS_PER_WEEK).map(|index| self.slot(index))
    }

    /// Look up a day by its 1-based number.
    pub fn day(&self, day: usize) -> Result<DaySlot<'_>, PlanError> {
        if (1..=DAYS_PER_WEEK).contains(&day) {
            Ok(self.slot(day - 1))
        } else {
            Err(PlanError::OutOfRange(day))
        }
    }

    pub fn day_total_time(&self, day: usize) -> Result<TimeValue, PlanError> {
        self.day(day).map(|slot| slot.total_time())
    }

    pub fn schedule_summary(&self) -> Vec<DaySummary> {
        self.days().map(|slot| slot.summary()).collect()
    }
}
