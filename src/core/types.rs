use super::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// ===== CONFIGURATION =====

/// Run configuration for a swarm search.
///
/// Every field has a default, so a JSON document only needs to name the
/// settings it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    pub particle_count: usize,
    pub dimensions: usize,
    pub max_epochs: usize,
    pub min_x: f64,
    pub max_x: f64,
    /// Early exit once the global best error is at or below this value
    pub min_accepted_error: f64,
    /// Seed for the run's random source
    pub seed: u64,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            particle_count: 5,
            dimensions: 2,
            max_epochs: 1000,
            min_x: -10.0,
            max_x: 10.0,
            min_accepted_error: 0.0,
            seed: 0,
        }
    }
}

impl SwarmConfig {
    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    pub fn with_bounds(mut self, min_x: f64, max_x: f64) -> Self {
        self.min_x = min_x;
        self.max_x = max_x;
        self
    }

    pub fn with_min_accepted_error(mut self, min_accepted_error: f64) -> Self {
        self.min_accepted_error = min_accepted_error;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

// ===== SWARM DATA =====

/// One candidate solution in the swarm.
///
/// The solver mutates the fields directly. `best_error` always holds the
/// objective evaluated at `best_position`, but may be greater than `error`
/// right after a respawn resets the personal best.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub best_position: Vec<f64>,
    pub error: f64,
    pub best_error: f64,
}

impl Particle {
    /// Build a particle from borrowed buffers; each one is copied so the
    /// caller keeps ownership of its own storage.
    pub fn new(
        position: &[f64],
        error: f64,
        velocity: &[f64],
        best_position: &[f64],
        best_error: f64,
    ) -> Self {
        Self {
            position: position.to_vec(),
            velocity: velocity.to_vec(),
            best_position: best_position.to_vec(),
            error,
            best_error,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.position.len()
    }
}

fn write_coordinates(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
    for value in values {
        write!(f, "{:.4} ", value)?;
    }
    writeln!(f)
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================")?;
        write!(f, "Position: ")?;
        write_coordinates(f, &self.position)?;
        writeln!(f, "Error = {:.4}", self.error)?;
        write!(f, "Velocity: ")?;
        write_coordinates(f, &self.velocity)?;
        write!(f, "Best Position: ")?;
        write_coordinates(f, &self.best_position)?;
        writeln!(f, "Best Error = {:.4}", self.best_error)?;
        writeln!(f, "==========================")
    }
}

// ===== OUTPUT =====

/// Why the main loop exited
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Global best error reached the accepted threshold
    Converged,
    /// Epoch cap reached
    MaxEpochs,
    /// A callback asked the run to stop
    Stopped,
}

impl Termination {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Converged => "Converged",
            Self::MaxEpochs => "Max epochs reached",
            Self::Stopped => "Stopped by callback",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwarmResult {
    pub best_position: Vec<f64>,
    pub final_swarm: Vec<Particle>,
    pub final_epoch: usize,
    pub min_error: f64,
    pub termination: Termination,
    /// Objective calls made during the run, including respawns
    pub evaluations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = SwarmConfig::default();
        assert_eq!(config.particle_count, 5);
        assert_eq!(config.dimensions, 2);
        assert_eq!(config.max_epochs, 1000);
        assert_eq!(config.min_x, -10.0);
        assert_eq!(config.max_x, 10.0);
        assert_eq!(config.min_accepted_error, 0.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            SwarmConfig::from_json_str(r#"{ "particle_count": 40, "min_x": 0.0 }"#).unwrap();
        assert_eq!(
            config,
            SwarmConfig::default()
                .with_particle_count(40)
                .with_bounds(0.0, 10.0)
        );
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = SwarmConfig::from_json_str("{ particle_count: }").unwrap_err();
        assert!(matches!(err, crate::SwarmError::Config(_)));
    }

    #[test]
    fn test_particle_copies_buffers() {
        let mut position = vec![1.0, 2.0];
        let velocity = vec![0.1, 0.2];
        let particle = Particle::new(&position, 5.0, &velocity, &position, 5.0);
        position[0] = 99.0;

        assert_eq!(particle.position, vec![1.0, 2.0]);
        assert_eq!(particle.best_position, vec![1.0, 2.0]);
    }

    #[test]
    fn test_particle_display_uses_four_decimals() {
        let particle = Particle::new(&[1.0, -2.5], 0.123456, &[0.5, 0.25], &[1.0, -2.5], 0.1);
        let expected = "==========================\n\
                        Position: 1.0000 -2.5000 \n\
                        Error = 0.1235\n\
                        Velocity: 0.5000 0.2500 \n\
                        Best Position: 1.0000 -2.5000 \n\
                        Best Error = 0.1000\n\
                        ==========================\n";
        assert_eq!(particle.to_string(), expected);
    }
}
