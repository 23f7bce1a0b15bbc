use log::debug;

use crate::errors::PlanError;
use crate::plan::PlanDocument;
use crate::routine::WeeklyRoutine;

struct BuiltinPlan {
    name: &'static str,
    json: &'static str,
}

const PUSH_PULL_LEGS: &str = include_str!("../../plans/push_pull_legs.json");
const PUSH_PULL_LEGS_LONG_REST: &str = include_str!("../../plans/push_pull_legs_long_rest.json");

const BUILTIN_PLANS: &[BuiltinPlan] = &[
    BuiltinPlan {
        name: "push-pull-legs",
        json: PUSH_PULL_LEGS,
    },
    BuiltinPlan {
        name: "push-pull-legs-long-rest",
        json: PUSH_PULL_LEGS_LONG_REST,
    },
];

pub const DEFAULT_BUILTIN: &str = "push-pull-legs";

pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_PLANS.iter().map(|p| p.name)
}

/// Load one of the plans bundled with the crate.
pub fn builtin(name: &str) -> Result<WeeklyRoutine, PlanError> {
    let plan = BUILTIN_PLANS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| PlanError::UnknownBuiltin(name.to_string()))?;
    debug!("Loading built-in plan {}", plan.name);
    WeeklyRoutine::try_from(PlanDocument::from_json(plan.json)?)
}
