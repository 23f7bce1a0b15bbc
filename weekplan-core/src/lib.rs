pub mod command;
pub mod errors;
pub mod logging;
pub mod model;
pub mod plan;
pub mod routine;
pub mod time;

pub use errors::{CommandError, PlanError};
pub use routine::WeeklyRoutine;
pub use time::TimeValue;
