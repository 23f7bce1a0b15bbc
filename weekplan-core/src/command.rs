//! Grammar of the interactive command loop.

use std::str::FromStr;

use crate::errors::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    /// Full plan for a 1-based day. Range is checked by the routine.
    Day(usize),
    Volume,
    Schema,
    Week,
}

pub const HELP_COMMANDS: &[(&str, &str)] = &[
    ("help", "Display help menu"),
    ("exit", "Exit program"),
    ("day [1-7]", "Display plan for given day"),
    ("volume", "Display total weekly volume"),
    ("schema", "Show schedule for week"),
    ("week", "Show schedule for whole week"),
];

pub const HELP_VOCAB: &[(&str, &str)] = &[
    ("TUT", "Time under tension"),
    ("Tempo", "[eccentric phase, squeeze, concentric phase]"),
    ("Unilateral", "One side of body at a time"),
    ("Int", "Short for intensity"),
];

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim().to_lowercase();
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match (head, args.as_slice()) {
            ("day", []) => Err(CommandError::MissingArgument),
            ("day", [arg]) => parse_day(arg).map(Command::Day),
            ("day", _) => Err(CommandError::TooManyArguments),
            ("help", []) => Ok(Command::Help),
            ("exit", []) => Ok(Command::Exit),
            ("volume", []) => Ok(Command::Volume),
            ("schema", []) => Ok(Command::Schema),
            ("week", []) => Ok(Command::Week),
            _ => Err(CommandError::Unrecognized(line.clone())),
        }
    }
}

fn parse_day(arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() || !arg.chars().all(|c| c.is_ascii_digit()) {
        return Err(CommandError::InvalidArgument(arg.to_string()));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidArgument(arg.to_string()))
}
