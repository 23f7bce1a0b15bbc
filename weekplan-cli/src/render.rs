//! Fixed-width text reports. Every line is 100 columns wide at most.

use std::collections::BTreeMap;

use weekplan::WeeklyRoutine;
use weekplan::command::{HELP_COMMANDS, HELP_VOCAB};
use weekplan::model::{
    CardioSession, Exercise, MuscleGroup, Stretch, StretchingRoutine, Volume, Workout,
};
use weekplan::routine::DaySlot;
use weekplan::time::TimeValue;

const LINE_WIDTH: usize = 100;

fn header(name: &str, time: TimeValue) -> String {
    format!("{:-<92}{}\n", name, time.clock())
}

pub fn cardio_line(cardio: &CardioSession) -> String {
    format!(
        "{:-<45}{:-<47}{}\n",
        cardio.name,
        format!("Int:{}", cardio.intensity),
        cardio.duration.clock()
    )
}

pub fn stretch_line(stretch: &Stretch) -> String {
    let unilateral = if stretch.unilateral { "Yes" } else { "No" };
    format!(
        "{:<10}{:.<35}{:<10}{:<10}{:<30}{}\n",
        stretch.group.to_lowercase(),
        stretch.name,
        format!("Hold:{}", stretch.hold.seconds()),
        format!("Rest:{}", stretch.rest.seconds()),
        format!("Unilateral:{}", unilateral),
        stretch.time().short_clock()
    )
}

pub fn exercise_line(exercise: &Exercise) -> String {
    format!(
        "{:<10}{:.<35}{:<6}{:<10}{:<9}{:<15}{:<20}\n",
        exercise.group.as_str(),
        exercise.name,
        format!("{}x{}", exercise.sets, exercise.reps),
        format!("Rest:{}", exercise.rest.seconds()),
        format!("TUT:{}", exercise.tut().seconds()),
        format!("Int:{}", exercise.intensity),
        format!("Tempo:{}", exercise.tempo)
    )
}

pub fn workout_header(workout: &Workout) -> String {
    header(&workout.name, workout.time())
}

pub fn stretching_header(routine: &StretchingRoutine) -> String {
    header(&routine.name, routine.time())
}

pub fn workout_detail(workout: &Workout) -> String {
    let mut out = workout_header(workout);
    for exercise in &workout.exercises {
        out.push_str(&exercise_line(exercise));
    }
    out
}

pub fn stretching_detail(routine: &StretchingRoutine) -> String {
    let mut out = stretching_header(routine);
    for stretch in &routine.stretches {
        out.push_str(&stretch_line(stretch));
    }
    out.push_str(&format!(
        "{:-^width$}\n",
        format!("Repeat x{}", routine.repeat),
        width = LINE_WIDTH
    ));
    out
}

pub fn day_detail(slot: &DaySlot<'_>) -> String {
    let mut out = workout_detail(slot.workout);
    out.push_str(&stretching_detail(slot.stretching));
    out.push_str(&cardio_line(slot.cardio));
    out
}

/// Every day in full, each under a centred banner.
pub fn week(routine: &WeeklyRoutine) -> String {
    let mut out = String::new();
    for slot in routine.days() {
        out.push_str(&format!(
            "{:-^width$}\n",
            format!("DAY {}", slot.day),
            width = LINE_WIDTH
        ));
        out.push_str(&day_detail(&slot));
    }
    out
}

/// Headers and totals only.
pub fn schema(routine: &WeeklyRoutine) -> String {
    let mut out = String::new();
    for slot in routine.days() {
        out.push_str(&format!("DAY {}\n", slot.day));
        out.push_str(&workout_header(slot.workout));
        out.push_str(&stretching_header(slot.stretching));
        out.push_str(&cardio_line(slot.cardio));
        out.push_str(&format!(
            "{:>width$}\n",
            format!("Total Time: {}", slot.total_time().clock()),
            width = LINE_WIDTH
        ));
    }
    out
}

pub fn volume(volume: &BTreeMap<MuscleGroup, Volume>) -> String {
    let mut out = String::new();
    for (group, v) in volume {
        out.push_str(&format!(
            "{:<20}{:<20}{}\n",
            group.as_str(),
            format!("sets:{}", v.sets),
            format!("reps:{}", v.reps)
        ));
    }
    out
}

pub fn help() -> String {
    let mut out = String::from("Commands\n");
    for (command, description) in HELP_COMMANDS {
        out.push_str(&format!("{:<20}{}\n", format!("\t{}", command), description));
    }
    out.push_str("Vocab\n");
    for (term, meaning) in HELP_VOCAB {
        out.push_str(&format!("{:<20}{}\n", format!("\t{}", term), meaning));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekplan::plan::builtin;

    fn standard() -> WeeklyRoutine {
        builtin("push-pull-legs").unwrap()
    }

    #[test]
    fn exercise_columns() {
        let bench = Exercise::new(MuscleGroup::Chest, "Smith machine bench press", 4, 8);
        assert_eq!(
            exercise_line(&bench),
            "chest     Smith machine bench press..........4x8   Rest:60   TUT:48   Int:7.5        Tempo:[3, 1, 2]     \n"
        );
    }

    #[test]
    fn stretch_columns() {
        let stretch = Stretch::new("Calf", "Shin stretch", 30);
        let line = stretch_line(&stretch);
        assert!(line.starts_with("calf      Shin stretch......................."));
        assert!(line.contains("Hold:30   Rest:5    Unilateral:No"));
        assert!(line.ends_with("00:35\n"));
    }

    #[test]
    fn cardio_and_headers_are_full_width() {
        let week = standard();
        let monday = week.day(1).unwrap();

        let cardio = cardio_line(monday.cardio);
        assert_eq!(cardio.trim_end().len(), LINE_WIDTH);
        assert!(cardio.starts_with("Bike-----"));
        assert!(cardio.contains("Int:Moderate---"));
        assert!(cardio.ends_with("00:15:00\n"));

        let header = workout_header(monday.workout);
        assert_eq!(header.trim_end().len(), LINE_WIDTH);
        assert!(header.starts_with("Push A---"));
        assert!(header.ends_with("00:50:36\n"));
    }

    #[test]
    fn day_detail_lists_everything() {
        let week = standard();
        let text = day_detail(&week.day(1).unwrap());
        // header + 8 exercises, header + 12 stretches + banner, cardio
        assert_eq!(text.lines().count(), 1 + 8 + 1 + 12 + 1 + 1);
        assert!(text.contains("Repeat x2"));
        assert!(text.contains("Full Body Stretch A"));
    }

    #[test]
    fn rest_day_has_header_only() {
        let week = standard();
        let text = workout_detail(week.day(7).unwrap().workout);
        assert_eq!(text, format!("{:-<92}00:00:00\n", "Rest"));
    }

    #[test]
    fn schema_shows_day_totals() {
        let text = schema(&standard());
        assert_eq!(text.matches("Total Time: ").count(), 7);
        assert!(text.contains("Total Time: 01:28:56\n"));
        assert!(text.contains("Total Time: 00:38:20\n"));
        assert!(text.starts_with("DAY 1\n"));
    }

    #[test]
    fn week_has_a_banner_per_day() {
        let text = week(&standard());
        for day in 1..=7 {
            assert!(text.contains(&format!("DAY {}", day)));
        }
    }

    #[test]
    fn volume_rows_in_group_order() {
        let text = volume(&standard().volume_by_group());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), MuscleGroup::ALL.len());
        assert_eq!(
            lines[0],
            format!("{:<20}{:<20}{}", "chest", "sets:20", "reps:184")
        );
        assert!(lines[7].starts_with("legs"));
    }

    #[test]
    fn help_lists_commands_and_vocab() {
        let text = help();
        assert!(text.contains("\tday [1-7]"));
        assert!(text.contains("Display total weekly volume"));
        assert!(text.contains("Time under tension"));
    }
}
