//! Human-readable run report.
//!
//! The solver never prints. Callers that want console output render a
//! [`SwarmReport`] and send the text wherever they like.

use crate::core::{SwarmConfig, SwarmResult};
use std::fmt;

pub struct SwarmReport<'a> {
    pub config: &'a SwarmConfig,
    pub result: &'a SwarmResult,
}

impl<'a> SwarmReport<'a> {
    pub fn new(config: &'a SwarmConfig, result: &'a SwarmResult) -> Self {
        Self { config, result }
    }
}

impl fmt::Display for SwarmReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        let result = self.result;

        writeln!(f, "Setting problem dimension to {}", config.dimensions)?;
        writeln!(f, "Setting particleCount = {}", config.particle_count)?;
        writeln!(f, "Setting maxEpochs = {}", config.max_epochs)?;
        writeln!(f, "Setting early exit error = {:.4}", config.min_accepted_error)?;
        writeln!(f, "Setting minX, maxX = {:.1} {:.1}", config.min_x, config.max_x)?;

        writeln!(f, "\nProcessing complete\nFinal swarm:\n")?;
        for particle in &result.final_swarm {
            writeln!(f, "{}", particle)?;
        }

        writeln!(f, "Final epoch: {}", result.final_epoch)?;
        writeln!(f, "Stop reason: {}", result.termination.message())?;
        writeln!(f, "Best position/solution found:")?;
        for (i, x) in result.best_position.iter().enumerate() {
            writeln!(f, "x{} = {:.6} ", i, x)?;
        }
        writeln!(f, "Final best error = {:.5}", result.min_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Particle, Termination};

    #[test]
    fn test_report_renders_settings_and_solution() {
        let config = SwarmConfig::default();
        let result = SwarmResult {
            best_position: vec![-0.7071, 0.0],
            final_swarm: vec![Particle::new(&[1.0, 1.0], 2.0, &[0.0, 0.0], &[1.0, 1.0], 2.0)],
            final_epoch: 42,
            min_error: 0.000012,
            termination: Termination::MaxEpochs,
            evaluations: 215,
        };
        let text = SwarmReport::new(&config, &result).to_string();

        assert!(text.contains("Setting minX, maxX = -10.0 10.0"));
        assert!(text.contains("Setting early exit error = 0.0000"));
        assert!(text.contains("Position: 1.0000 1.0000 "));
        assert!(text.contains("Final epoch: 42"));
        assert!(text.contains("x0 = -0.707100 "));
        assert!(text.contains("Final best error = 0.00001"));
    }
}
