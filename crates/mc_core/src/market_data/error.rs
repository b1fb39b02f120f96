//! Curve error types.
//!
//! This module provides structured error handling for parameter-curve
//! construction and interval queries.

use thiserror::Error;

/// Parameter curve errors.
///
/// Provides structured error handling for curve construction and interval
/// queries with descriptive context for each failure mode.
///
/// # Variants
///
/// - `InvalidInterval`: Query interval is reversed or degenerate
/// - `InvalidValue`: Curve value or breakpoint is not finite
/// - `UnsortedBreakpoints`: Breakpoint times are not strictly increasing
/// - `MismatchedLengths`: Breakpoint and value slices differ in length
/// - `InsufficientData`: Not enough segments to build a curve
///
/// # Examples
///
/// ```
/// use mc_core::market_data::CurveError;
///
/// let err = CurveError::InvalidInterval { t0: 2.0, t1: 1.0 };
/// assert_eq!(format!("{}", err), "Invalid interval: [2, 1]");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Query interval is reversed (or degenerate where a width is required).
    #[error("Invalid interval: [{t0}, {t1}]")]
    InvalidInterval {
        /// Interval start
        t0: f64,
        /// Interval end
        t1: f64,
    },

    /// Curve value or breakpoint is not finite.
    #[error("Invalid curve value: {value}")]
    InvalidValue {
        /// The offending value
        value: f64,
    },

    /// Breakpoint times are not strictly increasing.
    #[error("Breakpoints not strictly increasing at index {index}")]
    UnsortedBreakpoints {
        /// Index of the first out-of-order breakpoint
        index: usize,
    },

    /// Breakpoint and value slices differ in length.
    #[error("Breakpoint count {times} does not match value count {values}")]
    MismatchedLengths {
        /// Number of breakpoints provided
        times: usize,
        /// Number of values provided
        values: usize,
    },

    /// Not enough segments to build a curve.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of segments provided
        got: usize,
        /// Minimum number of segments required
        need: usize,
    },
}
