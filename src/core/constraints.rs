use super::error::{Result, SwarmError};
use super::types::SwarmConfig;

/// Error value an objective returns for a candidate that violates its
/// constraints. It compares like any other value, so it can never beat a
/// feasible candidate and never replaces an equal best.
pub const INFEASIBLE: f64 = f64::MAX;

/// Outcome of evaluating a constrained objective
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Evaluation {
    Feasible(f64),
    Infeasible,
}

impl Evaluation {
    /// Error value the solver compares; infeasible maps to [`INFEASIBLE`]
    pub fn value(self) -> f64 {
        match self {
            Self::Feasible(value) => value,
            Self::Infeasible => INFEASIBLE,
        }
    }

    pub fn from_value(value: f64) -> Self {
        if value >= INFEASIBLE {
            Self::Infeasible
        } else {
            Self::Feasible(value)
        }
    }

    pub fn is_feasible(self) -> bool {
        matches!(self, Self::Feasible(_))
    }
}

impl From<Evaluation> for f64 {
    fn from(evaluation: Evaluation) -> f64 {
        evaluation.value()
    }
}

/// Validate the preconditions of a swarm run
///
/// Returns the first violated precondition as an error; a config that
/// passes can be run without further checks.
pub fn validate_config(config: &SwarmConfig) -> Result<()> {
    if config.dimensions == 0 {
        return Err(SwarmError::InvalidConfig(
            "dimensions must be at least 1".into(),
        ));
    }
    if config.particle_count == 0 {
        return Err(SwarmError::InvalidConfig(
            "particle_count must be at least 1".into(),
        ));
    }
    if !config.min_x.is_finite() || !config.max_x.is_finite() {
        return Err(SwarmError::InvalidConfig(format!(
            "bounds must be finite, got [{}, {}]",
            config.min_x, config.max_x
        )));
    }
    if config.min_x >= config.max_x {
        return Err(SwarmError::InvalidConfig(format!(
            "min_x ({}) must be less than max_x ({})",
            config.min_x, config.max_x
        )));
    }
    if config.min_accepted_error.is_nan() {
        return Err(SwarmError::InvalidConfig(
            "min_accepted_error must not be NaN".into(),
        ));
    }
    Ok(())
}
