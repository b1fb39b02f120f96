//! Error types for the simulation kernel.

use thiserror::Error;

use mc_core::market_data::CurveError;
use mc_models::instruments::InstrumentError;

/// Errors raised by the simulation drivers and pricing entry points.
///
/// Every variant is an input-validation failure detected before any
/// random draw is consumed. A run that starts always completes; partial
/// results are never returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Path count must be at least one.
    #[error("Invalid path count: {path_count}")]
    InvalidPathCount {
        /// The offending path count.
        path_count: u64,
    },

    /// Path count exceeds the configured cap.
    #[error("Path count {path_count} exceeds cap {max}")]
    PathCountExceedsCap {
        /// The requested path count.
        path_count: u64,
        /// The configured maximum.
        max: u64,
    },

    /// Spot must be non-negative and finite.
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The offending spot value.
        spot: f64,
    },

    /// Effective volatility must be non-negative and finite.
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The offending volatility value.
        volatility: f64,
    },

    /// Expiry must be strictly positive and finite.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The offending expiry value.
        expiry: f64,
    },

    /// Effective rate must be finite, so the discount factor stays positive.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The offending rate value.
        rate: f64,
    },

    /// Confidence multiplier must be strictly positive and finite.
    #[error("Invalid confidence multiplier: z = {z}")]
    InvalidConfidenceLevel {
        /// The offending multiplier.
        z: f64,
    },

    /// A curve query failed.
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    /// An instrument could not be constructed.
    #[error("Instrument error: {0}")]
    Instrument(#[from] InstrumentError),
}
