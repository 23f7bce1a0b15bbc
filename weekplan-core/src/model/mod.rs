//! Plan entities: cardio sessions, stretches, exercises and workouts.
//!
//! Every type here is plain owned data. Derived durations are computed on
//! demand from the stored fields.

mod cardio;
mod exercise;
mod group;
mod stretch;

pub use cardio::CardioSession;
pub use exercise::{DEFAULT_EXERCISE_REST, DEFAULT_INTENSITY, Exercise, Tempo, Volume, Workout};
pub use group::MuscleGroup;
pub use stretch::{DEFAULT_STRETCH_REST, Stretch, StretchingRoutine};
