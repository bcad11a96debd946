use crate::core::{Result, SwarmConfig, SwarmError, SwarmResult};
use crate::optimization::{Objective, ParticleSwarm, Solver, SwarmCallback};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::cell::RefCell;

#[pyclass(name = "SwarmResult")]
#[derive(Clone, Debug)]
pub struct PySwarmResult {
    #[pyo3(get)]
    pub best_position: Vec<f64>,
    #[pyo3(get)]
    pub min_error: f64,
    #[pyo3(get)]
    pub final_epoch: usize,
    #[pyo3(get)]
    pub message: String,
    #[pyo3(get)]
    pub evaluations: usize,
    /// Final particle positions
    #[pyo3(get)]
    pub final_swarm: Vec<Vec<f64>>,
}

#[pymethods]
impl PySwarmResult {
    fn __repr__(&self) -> String {
        format!(
            "SwarmResult(min_error={:e}, final_epoch={}, best_position={:?})",
            self.min_error, self.final_epoch, self.best_position
        )
    }
}

impl From<SwarmResult> for PySwarmResult {
    fn from(result: SwarmResult) -> Self {
        Self {
            best_position: result.best_position,
            min_error: result.min_error,
            final_epoch: result.final_epoch,
            message: result.termination.message().to_string(),
            evaluations: result.evaluations,
            final_swarm: result.final_swarm.into_iter().map(|p| p.position).collect(),
        }
    }
}

/// Python callable used as the objective. The first exception it raises is
/// parked in `failure`; later calls score NaN until the callback aborts.
struct PyObjective<'a, 'py> {
    callable: &'a Bound<'py, PyAny>,
    failure: &'a RefCell<Option<PyErr>>,
}

impl Objective for PyObjective<'_, '_> {
    fn error(&self, x: &[f64]) -> f64 {
        if self.failure.borrow().is_some() {
            return f64::NAN;
        }
        match self
            .callable
            .call1((x.to_vec(),))
            .and_then(|value| value.extract::<f64>())
        {
            Ok(value) => value,
            Err(e) => {
                *self.failure.borrow_mut() = Some(e);
                f64::NAN
            }
        }
    }
}

struct PyCallback<'a, 'py> {
    py: Python<'py>,
    failure: &'a RefCell<Option<PyErr>>,
}

impl SwarmCallback for PyCallback<'_, '_> {
    fn on_epoch(&mut self, _epoch: usize, _best_position: &[f64], _best_error: f64) -> Result<()> {
        if let Err(e) = self.py.check_signals() {
            *self.failure.borrow_mut() = Some(e);
        }
        if self.failure.borrow().is_some() {
            return Err(SwarmError::Interrupted("Python objective raised".into()));
        }
        Ok(())
    }
}

#[pyfunction]
#[pyo3(signature = (objective, particle_count=5, dimensions=2, max_epochs=1000, min_x=-10.0, max_x=10.0, min_accepted_error=0.0, seed=0))]
#[allow(clippy::too_many_arguments)]
fn solve(
    objective: &Bound<'_, PyAny>,
    particle_count: usize,
    dimensions: usize,
    max_epochs: usize,
    min_x: f64,
    max_x: f64,
    min_accepted_error: f64,
    seed: u64,
) -> PyResult<PySwarmResult> {
    let config = SwarmConfig {
        particle_count,
        dimensions,
        max_epochs,
        min_x,
        max_x,
        min_accepted_error,
        seed,
    };
    let mut solver =
        ParticleSwarm::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;

    let failure = RefCell::new(None);
    let py_objective = PyObjective {
        callable: objective,
        failure: &failure,
    };
    let mut callback = PyCallback {
        py: objective.py(),
        failure: &failure,
    };

    let outcome = solver.solve(&py_objective, &mut callback);
    if let Some(err) = failure.take() {
        return Err(err);
    }
    outcome
        .map(PySwarmResult::from)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn swarmoptimizer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySwarmResult>()?;
    m.add_function(wrap_pyfunction!(solve, m)?)?;
    Ok(())
}
