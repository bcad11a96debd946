mod particle;
pub mod traits;

pub use particle::{ParticleSwarm, COGNITIVE, DEATH_PROBABILITY, INERTIA, SOCIAL, VELOCITY_DAMPING};
pub use traits::{ArgminObjective, Objective, Penalized, Solver, SwarmCallback};

use crate::core::{Result, SwarmConfig, SwarmResult};

/// One-shot swarm search with the default seed and no progress callback.
///
/// Minimizes `objective` over `[min_x, max_x]^dimensions` and returns the
/// best position, the final swarm, the epoch reached and the best error.
pub fn solve(
    dimensions: usize,
    particle_count: usize,
    min_x: f64,
    max_x: f64,
    max_epochs: usize,
    min_accepted_error: f64,
    objective: &dyn Objective,
) -> Result<SwarmResult> {
    let config = SwarmConfig::default()
        .with_dimensions(dimensions)
        .with_particle_count(particle_count)
        .with_bounds(min_x, max_x)
        .with_max_epochs(max_epochs)
        .with_min_accepted_error(min_accepted_error);

    ParticleSwarm::new(config)?.solve(objective, &mut ())
}
