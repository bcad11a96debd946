use thiserror::Error;

/// Errors surfaced by the swarm optimizer.
///
/// The search itself never fails: these come from configuration, IO while
/// loading configuration, or a callback asking the run to abort.
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("optimization interrupted: {0}")]
    Interrupted(String),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SwarmError>;
