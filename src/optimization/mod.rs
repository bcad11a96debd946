pub mod callback;
pub mod solvers;

pub use callback::{EpochRecord, ProgressCallback};
pub use solvers::{solve, ArgminObjective, Objective, ParticleSwarm, Penalized, Solver, SwarmCallback};
pub use solvers::{COGNITIVE, DEATH_PROBABILITY, INERTIA, SOCIAL, VELOCITY_DAMPING};
