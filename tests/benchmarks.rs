//! Classic test functions run through the solver, in squared-error form:
//! each returns `(z - z_min)^2` so the optimum scores zero.

use std::f64::consts::FRAC_1_SQRT_2;
use swarmoptimizer::{
    Evaluation, ParticleSwarm, Penalized, Solver, SwarmConfig, Termination, INFEASIBLE,
};
use test_case::test_case;

fn himmelblau_mse(x: &[f64]) -> f64 {
    let (a, b) = (x[0], x[1]);
    let z = (a * a + b - 11.0).powi(2) + (a + b * b - 7.0).powi(2);
    z * z
}

/// z = x * exp(-(x^2 + y^2)), minimum -0.42888194 at (-1/sqrt(2), 0)
fn gaussian_ridge_mse(x: &[f64]) -> f64 {
    let z = x[0] * (-(x[0] * x[0] + x[1] * x[1])).exp();
    (z + 0.42888194).powi(2)
}

/// z = -x - 1 + 2^x, minimum about -0.0861 at x = -log2(ln 2)
fn exponential_dip_mse(x: &[f64]) -> f64 {
    let z = -x[0] - 1.0 + 2f64.powf(x[0]);
    (z + 0.0861).powi(2)
}

fn mishra_bird_feasible(x: f64, y: f64) -> bool {
    let in_domain = (-10.0..=0.0).contains(&x) && (-6.5..=0.0).contains(&y);
    in_domain && (x + 5.0).powi(2) + (y + 5.0).powi(2) < 25.0
}

/// Mishra's bird, constrained; minimum -106.7645367 at (-3.3130247, -1.5821422)
fn mishra_bird(x: &[f64]) -> Evaluation {
    let (a, b) = (x[0], x[1]);
    if !mishra_bird_feasible(a, b) {
        return Evaluation::Infeasible;
    }
    let z = b.sin() * (1.0 - a.cos()).powi(2).exp()
        + a.cos() * (1.0 - b.sin()).powi(2).exp()
        + (a - b).powi(2);
    Evaluation::Feasible((z + 106.7645367).powi(2))
}

fn run(config: SwarmConfig, objective: &dyn swarmoptimizer::Objective) -> swarmoptimizer::SwarmResult {
    ParticleSwarm::new(config)
        .unwrap()
        .solve(objective, &mut ())
        .unwrap()
}

#[test_case(0 ; "seed 0")]
#[test_case(7 ; "seed 7")]
fn himmelblau_large_swarm(seed: u64) {
    let config = SwarmConfig::default()
        .with_particle_count(1000)
        .with_max_epochs(30)
        .with_min_accepted_error(1e-8)
        .with_seed(seed);
    let result = run(config, &himmelblau_mse);

    assert!(result.min_error < 1e-4, "min error {}", result.min_error);
}

#[test_case(gaussian_ridge_mse, 2, 20, 0.0, &[-FRAC_1_SQRT_2, 0.0], 1e-2 ; "gaussian ridge")]
#[test_case(exponential_dip_mse, 1, 5, 1e-8, &[0.528766], 5e-2 ; "exponential dip")]
fn demo_objective_converges(
    objective: fn(&[f64]) -> f64,
    dimensions: usize,
    particle_count: usize,
    min_accepted_error: f64,
    expected: &[f64],
    tolerance: f64,
) {
    let config = SwarmConfig::default()
        .with_dimensions(dimensions)
        .with_particle_count(particle_count)
        .with_max_epochs(1000)
        .with_min_accepted_error(min_accepted_error);
    let result = run(config, &objective);

    for (found, want) in result.best_position.iter().zip(expected) {
        assert!((found - want).abs() < tolerance, "{} vs {}", found, want);
    }
    if min_accepted_error > 0.0 {
        assert_eq!(result.termination, Termination::Converged);
        assert!(result.min_error <= min_accepted_error);
        assert!(result.final_epoch < 1000);
    }
}

#[test]
fn mishra_bird_respects_constraints() {
    let config = SwarmConfig::default()
        .with_particle_count(1000)
        .with_max_epochs(30)
        .with_bounds(-10.0, 0.0);
    let result = run(config, &Penalized(mishra_bird));

    assert!(result.min_error < INFEASIBLE);
    assert!(mishra_bird_feasible(
        result.best_position[0],
        result.best_position[1]
    ));
    for particle in &result.final_swarm {
        if particle.best_error < INFEASIBLE {
            assert!(mishra_bird_feasible(
                particle.best_position[0],
                particle.best_position[1]
            ));
        }
    }
}
