//! # mc_core: numerical foundation of the Monte Carlo pricing workspace
//!
//! The bottom crate of the workspace. It holds the pieces every layer
//! above leans on:
//! - Normal-distribution math: CDF, PDF, and inverse CDF (`math::distributions`)
//! - Parameter curves for term structures of volatility and rates (`market_data::curves`)
//! - `CurveError` for curve construction and evaluation failures (`market_data::error`)
//!
//! mc_core never depends on another mc_* crate. Its only external
//! dependencies are `num-traits`, so the math stays generic over the
//! float width, and `thiserror` for the error derives.
//!
//! ## Usage Examples
//!
//! ```rust
//! use mc_core::market_data::curves::{ConstantCurve, ParameterCurve};
//! use mc_core::math::distributions::{inverse_norm_cdf, norm_cdf};
//!
//! // A constant term structure integrates linearly
//! let vol = ConstantCurve::new(0.2_f64).unwrap();
//! assert_eq!(vol.integral(0.0, 2.0).unwrap(), 0.4);
//! assert_eq!(vol.mean(0.0, 2.0).unwrap(), 0.2);
//!
//! // The inverse CDF undoes the CDF
//! let z = inverse_norm_cdf(norm_cdf(1.5_f64));
//! assert!((z - 1.5_f64).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
