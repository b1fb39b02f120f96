//! # mc_engine: Monte Carlo Simulation Kernel
//!
//! ## Layer 3 (Engine) Role
//!
//! mc_engine turns the building blocks of `mc_core` and `mc_models` into
//! prices. It provides:
//! - Uniform deviate sources: the [`rng::UniformSource`] trait,
//!   [`rng::ParkMillerRng`], and the [`rng::AntitheticSampler`] decorator
//! - Statistics gatherers: [`statistics::MeanGatherer`] with the
//!   [`statistics::ConvergenceTable`] and [`statistics::ConfidenceBands`]
//!   decorators, reporting through [`statistics::ResultsTable`]
//! - Simulation drivers: [`simulation::simulate_vanilla`] and
//!   [`simulation::simulate_geometric_asian`]
//! - Run configuration: [`SimulationConfig`] with its validating builder
//! - High-level entry points in [`pricing`]
//!
//! ## Design
//!
//! Every seam is an open trait with static dispatch: the drivers are
//! generic over payoff, curve, gatherer, and source, so the inner loop
//! monomorphizes and downstream crates can plug in new implementations
//! without touching this crate. Decorators own what they wrap by value;
//! there are no trait objects and no shared mutable state. Each pricing
//! call constructs its own source and gatherer, which is what makes runs
//! reproducible from a seed alone.
//!
//! ## Usage Example
//!
//! ```rust
//! use mc_engine::pricing::price_european_call;
//!
//! // One-year 100-strike call, 20% vol, 5% rate, 100k paths, seed 42
//! let price = price_european_call(1.0, 100.0, 100.0, 0.2, 0.05, 100_000, 42).unwrap();
//! assert!((price - 10.45).abs() < 0.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod error;
pub mod pricing;
pub mod rng;
pub mod simulation;
pub mod statistics;

pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_PATHS};
pub use error::SimulationError;
