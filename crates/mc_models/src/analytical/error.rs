//! Error types for analytical pricing.

use thiserror::Error;

/// Errors raised when a closed-form price is requested with invalid inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticalError {
    /// Spot must be strictly positive and finite.
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The offending spot value.
        spot: f64,
    },

    /// Volatility must be non-negative and finite.
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The offending volatility value.
        volatility: f64,
    },

    /// Rate must be finite.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The offending rate value.
        rate: f64,
    },

    /// Strike must be non-negative and finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The offending strike value.
        strike: f64,
    },

    /// Expiry must be strictly positive and finite.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The offending expiry value.
        expiry: f64,
    },

    /// Averaging formulas need at least one fixing date.
    #[error("Invalid fixing count: n = {fixings}")]
    InvalidFixingCount {
        /// The offending fixing count.
        fixings: usize,
    },
}
