use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::errors::PlanError;
use crate::plan::{DEFAULT_BUILTIN, PlanDocument, builtin};
use crate::routine::WeeklyRoutine;

/// Environment variable naming a plan file to load when no flag is given.
pub const PLAN_ENV: &str = "WEEKPLAN_PLAN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSource {
    Builtin(String),
    File(PathBuf),
}

impl PlanSource {
    /// Pick a source: explicit file, then explicit built-in, then `WEEKPLAN_PLAN`,
    /// then the default built-in.
    pub fn select(file: Option<PathBuf>, builtin: Option<String>) -> Self {
        Self::select_with_env(file, builtin, env::var(PLAN_ENV).ok())
    }

    fn select_with_env(
        file: Option<PathBuf>,
        builtin: Option<String>,
        env_file: Option<String>,
    ) -> Self {
        if let Some(path) = file {
            return PlanSource::File(path);
        }
        if let Some(name) = builtin {
            return PlanSource::Builtin(name);
        }
        match env_file.filter(|p| !p.trim().is_empty()) {
            Some(path) => PlanSource::File(PathBuf::from(path)),
            None => PlanSource::Builtin(DEFAULT_BUILTIN.to_string()),
        }
    }

    pub fn load(&self) -> Result<WeeklyRoutine, PlanError> {
        let routine = match self {
            PlanSource::Builtin(name) => builtin(name)?,
            PlanSource::File(path) => load_file(path)?,
        };
        info!("Loaded plan '{}' from {}", routine.name(), self);
        Ok(routine)
    }
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanSource::Builtin(name) => write!(f, "built-in plan {}", name),
            PlanSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn load_file(path: &Path) -> Result<WeeklyRoutine, PlanError> {
    let json = fs::read_to_string(path).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    WeeklyRoutine::try_from(PlanDocument::from_json(&json)?)
}
