use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::PlanError;

/// Muscle groups tracked by the weekly volume report.
///
/// Variant order is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Shoulders,
    Triceps,
    Back,
    Biceps,
    Calves,
    Abs,
    Legs,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 8] = [
        MuscleGroup::Chest,
        MuscleGroup::Shoulders,
        MuscleGroup::Triceps,
        MuscleGroup::Back,
        MuscleGroup::Biceps,
        MuscleGroup::Calves,
        MuscleGroup::Abs,
        MuscleGroup::Legs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Back => "back",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Abs => "abs",
            MuscleGroup::Legs => "legs",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        MuscleGroup::ALL
            .into_iter()
            .find(|g| g.as_str() == lowered)
            .ok_or_else(|| PlanError::UnknownGroupName(s.to_string()))
    }
}
