pub mod constraints;
pub mod error;
pub mod types;

pub use constraints::{validate_config, Evaluation, INFEASIBLE};
pub use error::{Result, SwarmError};
pub use types::*;
