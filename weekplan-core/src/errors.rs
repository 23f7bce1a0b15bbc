use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum PlanError {
    #[error("invalid argument {0}: day must be between 1 and 7")]
    OutOfRange(usize),
    #[error("exercise '{exercise}' references unknown muscle group '{group}'")]
    UnknownGroup { exercise: String, group: String },
    #[error("unknown muscle group '{0}'")]
    UnknownGroupName(String),
    #[error("plan must define exactly 7 days, found {found}")]
    DayCount { found: usize },
    #[error("day references unknown stretching routine '{0}'")]
    UnknownStretchingRoutine(String),
    #[error("{entity} '{name}': {field} must be at least 1")]
    ZeroCount {
        entity: &'static str,
        name: String,
        field: &'static str,
    },
    #[error("{0} is too large to total")]
    TooLarge(String),
    #[error("unknown built-in plan '{0}'")]
    UnknownBuiltin(String),
    #[error("failed to read plan file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse plan: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CommandError {
    #[error("command not recognized, try help")]
    Empty,
    #[error("command not recognized, try help")]
    Unrecognized(String),
    #[error("no argument given")]
    MissingArgument,
    #[error("too many arguments, expected one")]
    TooManyArguments,
    #[error("invalid argument {0}")]
    InvalidArgument(String),
}
