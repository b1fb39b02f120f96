//! Closed-form reference prices.
//!
//! Monte Carlo output is only trustworthy next to an exact answer. This
//! module provides the two closed forms the simulation engine is tested
//! against: Black-Scholes for European vanillas and the discrete
//! geometric-average Asian formula. Both consume the normal-distribution
//! helpers from [`mc_core::math::distributions`].

mod asian;
mod black_scholes;
mod error;

pub use asian::{geometric_asian_call, geometric_asian_put};
pub use black_scholes::BlackScholes;
pub use error::AnalyticalError;
