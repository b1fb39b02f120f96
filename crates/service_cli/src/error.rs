//! CLI error types
//!
//! Error handling for command line operations. Engine and instrument
//! failures are wrapped rather than re-modelled so their messages reach
//! the user unchanged.

use mc_engine::SimulationError;
use mc_models::instruments::InstrumentError;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// A command line argument failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Contract construction rejected the inputs
    #[error("Instrument error: {0}")]
    Instrument(#[from] InstrumentError),

    /// The pricing engine rejected the run
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifies that invalid-argument errors carry the caller's message.
    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("Unknown option type: straddle".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: Unknown option type: straddle"
        );
    }

    /// Verifies that engine errors convert and keep their message.
    #[test]
    fn test_simulation_error_wraps_engine_message() {
        let err = CliError::from(SimulationError::InvalidPathCount { path_count: 0 });
        assert_eq!(err.to_string(), "Simulation error: Invalid path count: 0");
    }

    /// Verifies that instrument errors convert directly.
    #[test]
    fn test_instrument_error_converts() {
        let err = CliError::from(InstrumentError::InvalidStrike { strike: -5.0 });
        assert!(matches!(err, CliError::Instrument(_)));
    }
}
