//! The weekly routine and the queries reporting runs against it.
//!
//! A `WeeklyRoutine` holds one workout, one stretching routine and one cardio
//! session per day. Index `i` of each array is the same calendar day, with
//! index 0 as Monday. Queries live in `schedule` (per-day views and totals)
//! and `volume` (weekly sets and reps per muscle group).

mod schedule;
mod volume;

pub use schedule::{DaySlot, DaySummary};

use std::collections::BTreeMap;

use log::debug;

use crate::errors::PlanError;
use crate::model::{CardioSession, MuscleGroup, StretchingRoutine, Volume, Workout};

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyRoutine {
    name: String,
    workouts: [Workout; DAYS_PER_WEEK],
    stretching: [StretchingRoutine; DAYS_PER_WEEK],
    cardio: [CardioSession; DAYS_PER_WEEK],
    volume: BTreeMap<MuscleGroup, Volume>,
}

impl WeeklyRoutine {
    /// Build a routine, rejecting zero sets, reps or repeat counts and any day
    /// or weekly volume total that does not fit in a `u64`.
    pub fn new(
        name: impl Into<String>,
        workouts: [Workout; DAYS_PER_WEEK],
        stretching: [StretchingRoutine; DAYS_PER_WEEK],
        cardio: [CardioSession; DAYS_PER_WEEK],
    ) -> Result<Self, PlanError> {
        let name = name.into();

        for exercise in workouts.iter().flat_map(|w| w.exercises.iter()) {
            if exercise.sets == 0 {
                return Err(zero_count("exercise", &exercise.name, "sets"));
            }
            if exercise.reps == 0 {
                return Err(zero_count("exercise", &exercise.name, "reps"));
            }
        }
        for routine in &stretching {
            if routine.repeat == 0 {
                return Err(zero_count("stretching routine", &routine.name, "repeat"));
            }
        }

        for ((workout, routine), cardio) in workouts.iter().zip(&stretching).zip(&cardio) {
            let workout_time = workout.checked_time().ok_or_else(|| too_large(&workout.name))?;
            let stretch_time = routine.checked_time().ok_or_else(|| too_large(&routine.name))?;
            workout_time
                .checked_add(stretch_time)
                .and_then(|t| t.checked_add(cardio.duration))
                .ok_or_else(|| PlanError::TooLarge("day total time".to_string()))?;
        }
        let volume = volume::tally(&workouts)
            .ok_or_else(|| PlanError::TooLarge("weekly volume".to_string()))?;

        debug!(
            "Built weekly routine '{}' with {} exercises across {} days",
            name,
            workouts.iter().map(|w| w.exercises.len()).sum::<usize>(),
            DAYS_PER_WEEK
        );

        Ok(Self {
            name,
            workouts,
            stretching,
            cardio,
            volume,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn workouts(&self) -> &[Workout; DAYS_PER_WEEK] {
        &self.workouts
    }

    pub fn stretching_routines(&self) -> &[StretchingRoutine; DAYS_PER_WEEK] {
        &self.stretching
    }

    pub fn cardio_sessions(&self) -> &[CardioSession; DAYS_PER_WEEK] {
        &self.cardio
    }
}

fn too_large(name: &str) -> PlanError {
    PlanError::TooLarge(format!("time for '{name}'"))
}

fn zero_count(entity: &'static str, name: &str, field: &'static str) -> PlanError {
    PlanError::ZeroCount {
        entity,
        name: name.to_string(),
        field,
    }
}
