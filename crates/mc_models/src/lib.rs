//! # mc_models: Instruments for the Monte Carlo Pricing Workspace
//!
//! ## Layer 2 (Models) Role
//!
//! mc_models sits on top of `mc_core` and provides:
//! - Payoff abstractions: the [`instruments::Payoff`] trait with call, put,
//!   and digital implementations (`instruments::payoff`)
//! - Option contracts: [`instruments::VanillaOption`] and
//!   [`instruments::GeometricAsianOption`] (`instruments`)
//! - Closed-form reference prices: [`analytical::BlackScholes`] and the
//!   discrete geometric Asian formula (`analytical`)
//! - Error types: `InstrumentError`, `AnalyticalError`
//!
//! The closed forms exist so Monte Carlo estimates always have an exact
//! control value to be checked against.
//!
//! ## Usage Examples
//!
//! ```rust
//! use mc_models::analytical::BlackScholes;
//! use mc_models::instruments::{CallPayoff, Payoff, VanillaOption};
//!
//! // A one-year 100-strike call
//! let payoff = CallPayoff::new(100.0_f64).unwrap();
//! let option = VanillaOption::new(payoff, 1.0).unwrap();
//! assert_eq!(option.payoff(110.0), 10.0);
//! assert_eq!(option.payoff(90.0), 0.0);
//!
//! // Its closed-form price under flat 5% rates and 20% volatility
//! let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
//! let price = bs.price_call(100.0, 1.0).unwrap();
//! assert!((price - 10.4506).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
