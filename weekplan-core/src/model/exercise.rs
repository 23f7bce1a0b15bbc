use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::MuscleGroup;
use crate::time::TimeValue;

pub const DEFAULT_EXERCISE_REST: u64 = 60;
pub const DEFAULT_INTENSITY: f32 = 7.5;

/// Rep cadence in seconds: eccentric phase, squeeze, concentric phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 3]", into = "[u32; 3]")]
pub struct Tempo {
    pub eccentric: u32,
    pub squeeze: u32,
    pub concentric: u32,
}

impl Tempo {
    pub const fn new(eccentric: u32, squeeze: u32, concentric: u32) -> Self {
        Self {
            eccentric,
            squeeze,
            concentric,
        }
    }

    /// Seconds for a single rep.
    pub fn total(self) -> u64 {
        u64::from(self.eccentric) + u64::from(self.squeeze) + u64::from(self.concentric)
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Tempo::new(3, 1, 2)
    }
}

impl From<[u32; 3]> for Tempo {
    fn from([eccentric, squeeze, concentric]: [u32; 3]) -> Self {
        Tempo::new(eccentric, squeeze, concentric)
    }
}

impl From<Tempo> for [u32; 3] {
    fn from(t: Tempo) -> Self {
        [t.eccentric, t.squeeze, t.concentric]
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}]",
            self.eccentric, self.squeeze, self.concentric
        )
    }
}

/// Sets and total reps for a muscle group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Volume {
    pub sets: u64,
    pub reps: u64,
}

impl Volume {
    pub fn checked_add(self, rhs: Volume) -> Option<Volume> {
        Some(Volume {
            sets: self.sets.checked_add(rhs.sets)?,
            reps: self.reps.checked_add(rhs.reps)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub group: MuscleGroup,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub rest: TimeValue,
    // 1 to 10, descriptive only
    pub intensity: f32,
    pub tempo: Tempo,
}

impl Exercise {
    pub fn new(group: MuscleGroup, name: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            group,
            name: name.into(),
            sets,
            reps,
            rest: TimeValue::from_seconds(DEFAULT_EXERCISE_REST),
            intensity: DEFAULT_INTENSITY,
            tempo: Tempo::default(),
        }
    }

    pub fn with_rest(mut self, seconds: u64) -> Self {
        self.rest = TimeValue::from_seconds(seconds);
        self
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_tempo(mut self, tempo: Tempo) -> Self {
        self.tempo = tempo;
        self
    }

    /// Time under tension for one set.
    pub fn tut(&self) -> TimeValue {
        TimeValue::from_seconds(u64::from(self.reps) * self.tempo.total())
    }

    /// Working time plus rest, with rest charged after every set including the last.
    pub fn time(&self) -> TimeValue {
        let sets = u64::from(self.sets);
        self.tut() * sets + self.rest * sets
    }

    /// `time()`, or `None` when it does not fit in a `u64` of seconds.
    pub fn checked_time(&self) -> Option<TimeValue> {
        let sets = u64::from(self.sets);
        let tut = u64::from(self.reps).checked_mul(self.tempo.total())?;
        let working = TimeValue::from_seconds(tut).checked_mul(sets)?;
        working.checked_add(self.rest.checked_mul(sets)?)
    }

    pub fn volume(&self) -> Volume {
        Volume {
            sets: u64::from(self.sets),
            reps: u64::from(self.sets) * u64::from(self.reps),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub name: String,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    pub fn new(name: impl Into<String>, exercises: Vec<Exercise>) -> Self {
        Self {
            name: name.into(),
            exercises,
        }
    }

    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn time(&self) -> TimeValue {
        self.exercises.iter().map(Exercise::time).sum()
    }

    pub fn checked_time(&self) -> Option<TimeValue> {
        self.exercises
            .iter()
            .try_fold(TimeValue::ZERO, |total, e| total.checked_add(e.checked_time()?))
    }
}
