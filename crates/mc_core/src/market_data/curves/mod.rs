//! Parameter curve abstractions for volatility and rate term structures.
//!
//! This module provides:
//! - [`ParameterCurve`]: Generic trait for interval integrals and means
//! - [`ConstantCurve`]: Constant-value implementation
//! - [`PiecewiseConstantCurve`]: Step-function implementation

mod constant;
mod piecewise;
mod traits;

pub use constant::ConstantCurve;
pub use piecewise::PiecewiseConstantCurve;
pub use traits::ParameterCurve;
