use crate::core::{Evaluation, Result, SwarmResult};
use argmin::core::CostFunction;

/// Function being minimized. Lower is better.
///
/// Implemented for every `Fn(&[f64]) -> f64`, so closures and plain
/// functions can be passed straight to a solver. Returning
/// [`INFEASIBLE`](crate::INFEASIBLE) marks a constraint violation.
pub trait Objective {
    fn error(&self, x: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn error(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

/// Adapts a constrained objective reporting [`Evaluation`] into an
/// [`Objective`]; infeasible candidates score as the sentinel.
pub struct Penalized<F>(pub F);

impl<F> Objective for Penalized<F>
where
    F: Fn(&[f64]) -> Evaluation,
{
    fn error(&self, x: &[f64]) -> f64 {
        (self.0)(x).into()
    }
}

/// Runs an argmin cost function as a swarm objective.
///
/// A cost function that returns an error is treated as infeasible at that
/// point rather than aborting the run.
pub struct ArgminObjective<P>(pub P);

impl<P> Objective for ArgminObjective<P>
where
    P: CostFunction<Param = Vec<f64>, Output = f64>,
{
    fn error(&self, x: &[f64]) -> f64 {
        match self.0.cost(&x.to_vec()) {
            Ok(cost) => cost,
            Err(e) => {
                log::trace!("cost function failed, scoring as infeasible: {}", e);
                Evaluation::Infeasible.value()
            }
        }
    }
}

/// Callback interface for optimization progress
pub trait SwarmCallback {
    /// Called after each completed epoch with the global best so far
    fn on_epoch(&mut self, epoch: usize, best_position: &[f64], best_error: f64) -> Result<()>;

    /// Check if optimization should stop early
    fn should_stop(&self) -> bool {
        false
    }
}

/// No-op callback
impl SwarmCallback for () {
    fn on_epoch(&mut self, _epoch: usize, _best_position: &[f64], _best_error: f64) -> Result<()> {
        Ok(())
    }
}

/// Solver interface - takes objective and callback
pub trait Solver {
    fn name(&self) -> &str;

    fn solve(
        &mut self,
        objective: &dyn Objective,
        callback: &mut dyn SwarmCallback,
    ) -> Result<SwarmResult>;
}
