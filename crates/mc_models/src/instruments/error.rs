//! Error types for instrument construction.

use thiserror::Error;

/// Errors raised when an instrument is built from invalid contract terms.
///
/// Every constructor in this module validates its inputs eagerly, so a
/// successfully built instrument can be priced without further checks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Strike must be non-negative and finite.
    ///
    /// A zero strike is legal: a zero-strike call is a forward on the
    /// underlying and is useful as a degenerate test case.
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

    /// Averaging options need at least one fixing date.
    #[error("Invalid fixing count: n = {fixings}")]
    InvalidFixingCount {
        /// The offending fixing count.
        fixings: usize,
    },
}
