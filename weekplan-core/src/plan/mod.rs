//! Plan documents: the JSON form of a weekly routine.
//!
//! Schedule data lives in documents, the engine in `model` and `routine`.
//! A document declares stretching routines once and references them by name
//! from each day, so the same routine can fill several slots. Resolving a
//! document validates it and produces a [`WeeklyRoutine`].

mod builtin;
mod source;

pub use builtin::{DEFAULT_BUILTIN, builtin, builtin_names};
pub use source::{PLAN_ENV, PlanSource};

use std::collections::HashMap;

use log::{debug, warn};
use serde::Deserialize;

use crate::errors::PlanError;
use crate::model::{
    CardioSession, DEFAULT_EXERCISE_REST, DEFAULT_STRETCH_REST, Exercise, MuscleGroup, Stretch,
    StretchingRoutine, Tempo, Workout,
};
use crate::routine::{DAYS_PER_WEEK, WeeklyRoutine};
use crate::time::TimeValue;

fn default_exercise_rest() -> u64 {
    DEFAULT_EXERCISE_REST
}

fn default_stretch_rest() -> u64 {
    DEFAULT_STRETCH_REST
}

fn default_repeat() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanDefaults {
    #[serde(default = "default_exercise_rest")]
    pub exercise_rest: u64,
    #[serde(default = "default_stretch_rest")]
    pub stretch_rest: u64,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            exercise_rest: DEFAULT_EXERCISE_REST,
            stretch_rest: DEFAULT_STRETCH_REST,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanDocument {
    pub name: String,
    #[serde(default)]
    pub defaults: PlanDefaults,
    #[serde(default)]
    pub stretching_routines: Vec<StretchingRoutineEntry>,
    pub days: Vec<DayEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StretchingRoutineEntry {
    pub name: String,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
    pub stretches: Vec<StretchEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StretchEntry {
    pub group: String,
    pub name: String,
    pub hold: u64,
    #[serde(default)]
    pub unilateral: bool,
    pub rest: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayEntry {
    pub workout: WorkoutEntry,
    /// Name of a routine from `stretching_routines`.
    pub stretching: String,
    pub cardio: CardioEntry,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkoutEntry {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExerciseEntry {
    pub group: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub rest: Option<u64>,
    pub intensity: Option<f32>,
    pub tempo: Option<Tempo>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardioEntry {
    pub name: String,
    pub minutes: u64,
    pub intensity: String,
}

impl StretchEntry {
    fn into_stretch(self, defaults: &PlanDefaults) -> Stretch {
        let stretch = Stretch::new(self.group, self.name, self.hold)
            .with_rest(self.rest.unwrap_or(defaults.stretch_rest));
        if self.unilateral {
            stretch.unilateral()
        } else {
            stretch
        }
    }
}

impl StretchingRoutineEntry {
    fn into_routine(self, defaults: &PlanDefaults) -> StretchingRoutine {
        let stretches = self
            .stretches
            .into_iter()
            .map(|s| s.into_stretch(defaults))
            .collect();
        StretchingRoutine::new(self.name, stretches).with_repeat(self.repeat)
    }
}

impl ExerciseEntry {
    fn into_exercise(self, defaults: &PlanDefaults) -> Result<Exercise, PlanError> {
        let group: MuscleGroup = self.group.parse().map_err(|_| PlanError::UnknownGroup {
            exercise: self.name.clone(),
            group: self.group.clone(),
        })?;

        let mut exercise = Exercise::new(group, self.name, self.sets, self.reps)
            .with_rest(self.rest.unwrap_or(defaults.exercise_rest));
        if let Some(intensity) = self.intensity {
            exercise = exercise.with_intensity(intensity);
        }
        if let Some(tempo) = self.tempo {
            exercise = exercise.with_tempo(tempo);
        }
        Ok(exercise)
    }
}

impl WorkoutEntry {
    fn into_workout(self, defaults: &PlanDefaults) -> Result<Workout, PlanError> {
        let exercises = self
            .exercises
            .into_iter()
            .map(|e| e.into_exercise(defaults))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Workout::new(self.name, exercises))
    }
}

impl TryFrom<CardioEntry> for CardioSession {
    type Error = PlanError;

    fn try_from(c: CardioEntry) -> Result<Self, Self::Error> {
        let duration = TimeValue::checked_minutes(c.minutes)
            .ok_or_else(|| PlanError::TooLarge(format!("cardio '{}' minutes", c.name)))?;
        Ok(CardioSession::new(c.name, duration, c.intensity))
    }
}

fn into_week<T>(items: Vec<T>) -> Result<[T; DAYS_PER_WEEK], PlanError> {
    let found = items.len();
    items
        .try_into()
        .map_err(|_| PlanError::DayCount { found })
}

impl PlanDocument {
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the document and build the routine it describes.
    pub fn resolve(self) -> Result<WeeklyRoutine, PlanError> {
        if self.days.len() != DAYS_PER_WEEK {
            return Err(PlanError::DayCount {
                found: self.days.len(),
            });
        }

        let defaults = self.defaults;
        let mut routines: HashMap<String, StretchingRoutine> = HashMap::new();
        for entry in self.stretching_routines {
            let routine = entry.into_routine(&defaults);
            if routines.contains_key(&routine.name) {
                warn!(
                    "Stretching routine '{}' declared more than once, keeping the last",
                    routine.name
                );
            }
            routines.insert(routine.name.clone(), routine);
        }

        let mut workouts = Vec::with_capacity(DAYS_PER_WEEK);
        let mut stretching = Vec::with_capacity(DAYS_PER_WEEK);
        let mut cardio = Vec::with_capacity(DAYS_PER_WEEK);

        for day in self.days {
            workouts.push(day.workout.into_workout(&defaults)?);
            let routine = routines
                .get(&day.stretching)
                .cloned()
                .ok_or(PlanError::UnknownStretchingRoutine(day.stretching))?;
            stretching.push(routine);
            cardio.push(CardioSession::try_from(day.cardio)?);
        }

        debug!(
            "Resolved plan '{}' (exercise rest {}s, stretch rest {}s)",
            self.name, defaults.exercise_rest, defaults.stretch_rest
        );

        WeeklyRoutine::new(
            self.name,
            into_week(workouts)?,
            into_week(stretching)?,
            into_week(cardio)?,
        )
    }
}

impl TryFrom<PlanDocument> for WeeklyRoutine {
    type Error = PlanError;

    fn try_from(doc: PlanDocument) -> Result<Self, Self::Error> {
        doc.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(workout: serde_json::Value) -> serde_json::Value {
        json!({
            "workout": workout,
            "stretching": "Quick",
            "cardio": { "name": "Bike", "minutes": 10, "intensity": "Low" }
        })
    }

    fn document(days: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "name": "Test plan",
            "stretching_routines": [{
                "name": "Quick",
                "stretches": [{ "group": "hips", "name": "Pigeon stretch", "hold": 30, "unilateral": true }]
            }],
            "days": days
        })
    }

    fn rest_day() -> serde_json::Value {
        day(json!({ "name": "Rest" }))
    }

    fn resolve(value: serde_json::Value) -> Result<WeeklyRoutine, PlanError> {
        WeeklyRoutine::try_from(PlanDocument::from_json(&value.to_string())?)
    }

    #[test]
    fn resolves_defaults_and_overrides() {
        let mut days = vec![day(json!({
            "name": "Push",
            "exercises": [
                { "group": "chest", "name": "Chest fly", "sets": 3, "reps": 10 },
                { "group": "Triceps", "name": "Skullcrusher", "sets": 4, "reps": 10,
                  "rest": 90, "intensity": 9.0, "tempo": [2, 0, 2] }
            ]
        }))];
        days.extend((0..6).map(|_| rest_day()));

        let week = resolve(document(days)).unwrap();
        let push = &week.workouts()[0];
        assert_eq!(push.exercises[0].rest.seconds(), DEFAULT_EXERCISE_REST);
        assert_eq!(push.exercises[0].tempo, Tempo::default());
        assert_eq!(push.exercises[1].group, MuscleGroup::Triceps);
        assert_eq!(push.exercises[1].rest.seconds(), 90);
        assert_eq!(push.exercises[1].intensity, 9.0);
        assert_eq!(push.exercises[1].tempo, Tempo::new(2, 0, 2));

        let quick = &week.stretching_routines()[0];
        assert_eq!(quick.repeat, 1);
        assert_eq!(quick.stretches[0].rest.seconds(), DEFAULT_STRETCH_REST);
        assert_eq!(quick.time().seconds(), 70);
        assert_eq!(week.cardio_sessions()[0].duration.seconds(), 600);
    }

    #[test]
    fn plan_defaults_apply_when_entries_are_silent() {
        let mut doc = document((0..7).map(|_| rest_day()).collect());
        doc["defaults"] = json!({ "stretch_rest": 10 });
        let week = resolve(doc).unwrap();
        assert_eq!(week.stretching_routines()[3].stretches[0].rest.seconds(), 10);
    }

    #[test]
    fn unknown_exercise_group_fails_at_load() {
        let mut days = vec![day(json!({
            "name": "Odd",
            "exercises": [{ "group": "forearms", "name": "Wrist curl", "sets": 3, "reps": 12 }]
        }))];
        days.extend((0..6).map(|_| rest_day()));

        let err = resolve(document(days)).unwrap_err();
        assert!(matches!(
            err,
            PlanError::UnknownGroup { ref exercise, ref group }
                if exercise == "Wrist curl" && group == "forearms"
        ));
    }

    #[test]
    fn requires_exactly_seven_days() {
        let err = resolve(document((0..6).map(|_| rest_day()).collect())).unwrap_err();
        assert!(matches!(err, PlanError::DayCount { found: 6 }));
        let err = resolve(document((0..8).map(|_| rest_day()).collect())).unwrap_err();
        assert!(matches!(err, PlanError::DayCount { found: 8 }));
    }

    #[test]
    fn unknown_stretching_routine_is_reported() {
        let mut days: Vec<_> = (0..7).map(|_| rest_day()).collect();
        days[4]["stretching"] = json!("Missing");
        let err = resolve(document(days)).unwrap_err();
        assert!(matches!(err, PlanError::UnknownStretchingRoutine(ref n) if n == "Missing"));
    }

    #[test]
    fn zero_reps_are_rejected() {
        let mut days = vec![day(json!({
            "name": "Broken",
            "exercises": [{ "group": "abs", "name": "Ab wheel", "sets": 4, "reps": 0 }]
        }))];
        days.extend((0..6).map(|_| rest_day()));
        let err = resolve(document(days)).unwrap_err();
        assert!(matches!(err, PlanError::ZeroCount { field: "reps", .. }));
    }

    #[test]
    fn unknown_fields_are_parse_errors() {
        let mut doc = document((0..7).map(|_| rest_day()).collect());
        doc["colour"] = json!("red");
        assert!(matches!(resolve(doc), Err(PlanError::Parse(_))));
    }

    #[test]
    fn large_sets_and_reps_total_without_wrapping() {
        let mut days = vec![day(json!({
            "name": "Marathon",
            "exercises": [{ "group": "abs", "name": "Crunch", "sets": 70000, "reps": 70000,
                            "rest": 0, "tempo": [0, 0, 0] }]
        }))];
        days.extend((0..6).map(|_| rest_day()));
        let week = resolve(document(days)).unwrap();
        let abs = week.volume_by_group()[&MuscleGroup::Abs];
        assert_eq!(abs.sets, 70_000);
        assert_eq!(abs.reps, 4_900_000_000);
    }

    #[test]
    fn unrepresentable_totals_are_rejected() {
        let crunch = json!({ "group": "abs", "name": "Crunch", "sets": u32::MAX, "reps": u32::MAX,
                             "rest": 0, "tempo": [0, 0, 0] });
        let mut days = vec![day(json!({ "name": "Core", "exercises": [crunch.clone(), crunch] }))];
        days.extend((0..6).map(|_| rest_day()));
        let err = resolve(document(days)).unwrap_err();
        assert!(matches!(err, PlanError::TooLarge(ref what) if what == "weekly volume"));

        let mut days: Vec<_> = (0..7).map(|_| rest_day()).collect();
        days[1]["cardio"]["minutes"] = json!(u64::MAX);
        let err = resolve(document(days)).unwrap_err();
        assert!(matches!(err, PlanError::TooLarge(ref what) if what.contains("Bike")));
    }
}
