use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Tick limit exceeded: vehicle still airborne after {0} ticks")]
    TickLimitExceeded(u64),

    #[error("Vehicle has not touched down yet")]
    NotTerminated,
}
