use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;
use weekplan::command::Command;
use weekplan::{PlanError, WeeklyRoutine};

use crate::render;

/// Render the report for one command.
pub fn execute(routine: &WeeklyRoutine, command: Command) -> Result<String, PlanError> {
    match command {
        Command::Help => Ok(render::help()),
        Command::Day(day) => routine.day(day).map(|slot| render::day_detail(&slot)),
        Command::Volume => Ok(render::volume(&routine.volume_by_group())),
        Command::Schema => Ok(render::schema(routine)),
        Command::Week => Ok(render::week(routine)),
        Command::Exit => Ok(String::new()),
    }
}

/// Read commands until `exit` or end of input. Bad input is reported and skipped.
pub fn run<R: BufRead, W: Write>(routine: &WeeklyRoutine, input: R, mut output: W) -> Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!("Rejected input {:?}: {:?}", line, e);
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        if command == Command::Exit {
            return Ok(());
        }

        match execute(routine, command) {
            Ok(text) => write!(output, "{}", text)?,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}
