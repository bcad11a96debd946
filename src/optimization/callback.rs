use super::solvers::traits::SwarmCallback;
use crate::core::{Result, Termination};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Global best after one epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochRecord {
    pub epoch: usize,
    pub best_position: Vec<f64>,
    pub best_error: f64,
}

/// Callback for tracking and logging swarm progress
///
/// Keeps the full per-epoch trace of the global best. Epochs are logged at
/// `debug` level, or `info` when verbose.
#[derive(Debug, Default)]
pub struct ProgressCallback {
    verbose: bool,
    epoch_limit: Option<usize>,
    epoch_count: usize,
    history: Vec<EpochRecord>,
}

impl ProgressCallback {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// Stop the run once this many epochs have completed
    pub fn with_epoch_limit(mut self, limit: usize) -> Self {
        self.epoch_limit = Some(limit);
        self
    }

    /// Get epoch history
    pub fn history(&self) -> &[EpochRecord] {
        &self.history
    }

    /// Optimization summary as text
    pub fn summary(&self, termination: Termination) -> String {
        let rule = "=".repeat(60);
        let mut out = String::new();

        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "SWARM SUMMARY");
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "Stop Reason: {}", termination.message());
        let _ = writeln!(out, "Total Epochs: {}", self.history.len());

        if let Some(last) = self.history.last() {
            let _ = writeln!(out, "Final Error: {:.6e}", last.best_error);
            for (i, x) in last.best_position.iter().enumerate() {
                let _ = writeln!(out, "  x{} = {:.6e}", i, x);
            }
        }

        let _ = writeln!(out, "\n{:<8} {:<20}", "Epoch", "Best Error");
        let _ = writeln!(out, "{}", "-".repeat(30));
        for record in &self.history {
            let _ = writeln!(out, "{:<8} {:<20.6e}", record.epoch, record.best_error);
        }
        let _ = writeln!(out, "{}", rule);
        out
    }
}

impl SwarmCallback for ProgressCallback {
    fn on_epoch(&mut self, epoch: usize, best_position: &[f64], best_error: f64) -> Result<()> {
        self.epoch_count = epoch;

        if self.verbose {
            log::info!("Epoch {:4}: best error = {:.6e}", epoch, best_error);
        } else {
            log::debug!("Epoch {:4}: best error = {:.6e}", epoch, best_error);
        }

        self.history.push(EpochRecord {
            epoch,
            best_position: best_position.to_vec(),
            best_error,
        });
        Ok(())
    }

    fn should_stop(&self) -> bool {
        self.epoch_limit
            .is_some_and(|limit| self.epoch_count >= limit)
    }
}
