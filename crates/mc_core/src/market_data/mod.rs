//! Market data structures for the pricing workspace.
//!
//! This module provides the parameter-curve abstraction feeding volatility
//! and interest rates into the simulation and analytical layers.
//!
//! # Components
//!
//! - [`curves`]: Parameter curve trait and implementations
//!   (ConstantCurve, PiecewiseConstantCurve)
//! - [`error`]: Curve error types (CurveError)
//!
//! # Example
//!
//! ```
//! use mc_core::market_data::curves::{ConstantCurve, ParameterCurve};
//!
//! // A 20% flat volatility term structure
//! let vol = ConstantCurve::new(0.20_f64).unwrap();
//! assert_eq!(vol.mean(0.0, 5.0).unwrap(), 0.20);
//! assert_eq!(vol.integral(0.0, 5.0).unwrap(), 1.0);
//! ```

pub mod curves;
pub mod error;

// Flatten the common types into the module root.
pub use curves::{ConstantCurve, ParameterCurve, PiecewiseConstantCurve};
pub use error::CurveError;
