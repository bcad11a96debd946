//! Particle swarm optimization over a bounded real-valued search box.
//!
//! ```
//! use swarmoptimizer::solve;
//!
//! let result = solve(1, 20, -10.0, 10.0, 50, 1e-6, &|x: &[f64]| x[0] * x[0]).unwrap();
//! assert!(result.min_error < 1e-6);
//! ```

mod core;
mod optimization;
pub mod report;

#[cfg(feature = "python")]
mod python;

pub use crate::core::*;
pub use crate::optimization::*;
pub use report::SwarmReport;
