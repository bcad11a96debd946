use super::traits::{Objective, Solver, SwarmCallback};
use crate::core::{validate_config, Particle, Result, SwarmConfig, SwarmResult, Termination, INFEASIBLE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Constriction-coefficient PSO constants
pub const INERTIA: f64 = 0.729;
pub const COGNITIVE: f64 = 1.49445;
pub const SOCIAL: f64 = 1.49445;

/// Initial velocities are drawn from the position bounds scaled by this factor
pub const VELOCITY_DAMPING: f64 = 0.1;

/// Chance per particle per epoch that it is respawned at a random position
pub const DEATH_PROBABILITY: f64 = 0.01;

/// Uniform draw in `[lo, hi)`. Every random number the solver uses goes
/// through here or [`unit`], so a seeded source replays exactly.
#[inline]
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    (hi - lo) * unit(rng) + lo
}

#[inline]
pub(crate) fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.r#gen::<f64>()
}

/// Best position seen by any particle so far in the current run
#[derive(Debug)]
struct GlobalBest {
    position: Vec<f64>,
    error: f64,
}

impl GlobalBest {
    /// Replace on strict improvement only; ties keep the earlier position
    fn offer(&mut self, position: &[f64], error: f64) -> bool {
        if error < self.error {
            self.position.copy_from_slice(position);
            self.error = error;
            true
        } else {
            false
        }
    }
}

/// Particle Swarm Optimization over a box `[min_x, max_x]^D`.
///
/// Runs are sequential and fully determined by the configured seed: the
/// initialization pass draws D position coordinates then D velocity
/// coordinates per particle, and every epoch draws, per particle, the
/// `r1, r2` pair for each dimension followed by one respawn roll (plus D
/// coordinates when the roll fires).
#[derive(Clone, Debug)]
pub struct ParticleSwarm {
    config: SwarmConfig,
    inertia: f64,   // w - velocity inertia weight
    cognitive: f64, // c1 - personal best influence
    social: f64,    // c2 - global best influence
}

impl ParticleSwarm {
    pub fn new(config: SwarmConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self {
            config,
            inertia: INERTIA,
            cognitive: COGNITIVE,
            social: SOCIAL,
        })
    }

    /// Configure PSO parameters (defaults: w=0.729, c1=1.49445, c2=1.49445)
    pub fn with_pso_params(mut self, inertia: f64, cognitive: f64, social: f64) -> Self {
        self.inertia = inertia;
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.config.dimensions)
            .map(|_| uniform(rng, self.config.min_x, self.config.max_x))
            .collect()
    }

    /// Build the swarm and the global best it starts from.
    ///
    /// The global best is seeded with the first particle's position at
    /// error [`INFEASIBLE`], so a swarm that never sees a feasible value
    /// still reports the first position drawn.
    fn initialize_swarm<R: Rng + ?Sized>(
        &self,
        objective: &dyn Objective,
        rng: &mut R,
        evaluations: &mut usize,
    ) -> (Vec<Particle>, GlobalBest) {
        let lo = self.config.min_x * VELOCITY_DAMPING;
        let hi = self.config.max_x * VELOCITY_DAMPING;

        let mut swarm = Vec::with_capacity(self.config.particle_count);
        let mut global: Option<GlobalBest> = None;

        for _ in 0..self.config.particle_count {
            let position = self.random_position(rng);
            let error = objective.error(&position);
            *evaluations += 1;

            let velocity: Vec<f64> = (0..self.config.dimensions)
                .map(|_| uniform(rng, lo, hi))
                .collect();

            global
                .get_or_insert_with(|| GlobalBest {
                    position: position.clone(),
                    error: INFEASIBLE,
                })
                .offer(&position, error);

            swarm.push(Particle::new(&position, error, &velocity, &position, error));
        }

        let global = global.unwrap_or(GlobalBest {
            position: vec![0.0; self.config.dimensions],
            error: INFEASIBLE,
        });
        (swarm, global)
    }

    /// Velocity and position update, re-evaluation, and personal/global
    /// best bookkeeping for a single particle.
    fn move_particle<R: Rng + ?Sized>(
        &self,
        particle: &mut Particle,
        global: &mut GlobalBest,
        objective: &dyn Objective,
        rng: &mut R,
    ) {
        for j in 0..particle.velocity.len() {
            let r1 = unit(rng);
            let r2 = unit(rng);

            particle.velocity[j] = self.inertia * particle.velocity[j]
                + self.cognitive * r1 * (particle.best_position[j] - particle.position[j])
                + self.social * r2 * (global.position[j] - particle.position[j]);
        }

        for j in 0..particle.position.len() {
            particle.position[j] = (particle.position[j] + particle.velocity[j])
                .clamp(self.config.min_x, self.config.max_x);
        }

        particle.error = objective.error(&particle.position);

        if particle.error < particle.best_error {
            particle.best_position.copy_from_slice(&particle.position);
            particle.best_error = particle.error;
        }
        global.offer(&particle.position, particle.error);
    }

    /// Redraw the particle's position, forgetting its personal best.
    /// Velocity is kept.
    pub(crate) fn respawn<R: Rng + ?Sized>(
        &self,
        particle: &mut Particle,
        objective: &dyn Objective,
        rng: &mut R,
    ) {
        for x in particle.position.iter_mut() {
            *x = uniform(rng, self.config.min_x, self.config.max_x);
        }
        particle.error = objective.error(&particle.position);
        particle.best_position.copy_from_slice(&particle.position);
        particle.best_error = particle.error;
    }

    /// Run the search drawing randomness from `rng`.
    ///
    /// [`Solver::solve`] calls this with a `StdRng` seeded from the config;
    /// pass your own source to replay or inspect the draw sequence.
    pub fn solve_with_rng<R: Rng + ?Sized>(
        &self,
        objective: &dyn Objective,
        callback: &mut dyn SwarmCallback,
        rng: &mut R,
    ) -> Result<SwarmResult> {
        let config = &self.config;
        log::debug!(
            "PSO: {} particles, {} dimensions, bounds [{}, {}], max {} epochs",
            config.particle_count,
            config.dimensions,
            config.min_x,
            config.max_x,
            config.max_epochs
        );

        let mut evaluations = 0;
        let (mut swarm, mut global) = self.initialize_swarm(objective, rng, &mut evaluations);
        log::debug!("PSO: initial best error {:e}", global.error);

        let mut epoch = 0;
        let mut stopped = false;

        while epoch < config.max_epochs && global.error > config.min_accepted_error {
            let prev_best = global.error;

            for particle in swarm.iter_mut() {
                self.move_particle(particle, &mut global, objective, rng);
                evaluations += 1;

                if unit(rng) < DEATH_PROBABILITY {
                    self.respawn(particle, objective, rng);
                    evaluations += 1;
                    log::trace!("PSO: particle respawned at epoch {}", epoch);
                    global.offer(&particle.position, particle.error);
                }
            }

            debug_assert!(global.error <= prev_best, "global best regressed");
            epoch += 1;

            callback.on_epoch(epoch, &global.position, global.error)?;
            if callback.should_stop() {
                stopped = true;
                break;
            }
        }

        let termination = if stopped {
            Termination::Stopped
        } else if global.error <= config.min_accepted_error {
            Termination::Converged
        } else {
            Termination::MaxEpochs
        };

        log::debug!(
            "PSO: {} after {} epochs, best error {:e}, {} evaluations",
            termination.message(),
            epoch,
            global.error,
            evaluations
        );

        Ok(SwarmResult {
            best_position: global.position,
            final_swarm: swarm,
            final_epoch: epoch,
            min_error: global.error,
            termination,
            evaluations,
        })
    }
}

impl Solver for ParticleSwarm {
    fn name(&self) -> &str {
        "PSO"
    }

    fn solve(
        &mut self,
        objective: &dyn Objective,
        callback: &mut dyn SwarmCallback,
    ) -> Result<SwarmResult> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.solve_with_rng(objective, callback, &mut rng)
    }
}
