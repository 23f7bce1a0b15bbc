use std::collections::BTreeMap;

use crate::model::{MuscleGroup, Volume, Workout};
use crate::routine::WeeklyRoutine;

/// Sum sets and reps per group, or `None` if a total does not fit in a `u64`.
pub(super) fn tally(workouts: &[Workout]) -> Option<BTreeMap<MuscleGroup, Volume>> {
    let mut volume: BTreeMap<MuscleGroup, Volume> = MuscleGroup::ALL
        .into_iter()
        .map(|group| (group, Volume::default()))
        .collect();

    for exercise in workouts.iter().flat_map(|w| w.exercises.iter()) {
        let entry = volume.entry(exercise.group).or_default();
        *entry = entry.checked_add(exercise.volume())?;
    }

    Some(volume)
}

impl WeeklyRoutine {
    /// Weekly sets and reps per muscle group over every workout slot.
    ///
    /// Every group is present, including ones with no work this week.
    pub fn volume_by_group(&self) -> BTreeMap<MuscleGroup, Volume> {
        self.volume.clone()
    }
}
