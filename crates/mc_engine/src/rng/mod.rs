//! # Uniform Random Number Sources
//!
//! This module provides the deterministic uniform-deviate sources the
//! simulation drivers draw from.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every source is seedable and advances
//!   deterministically; the same seed and call count always produce the
//!   same stream, across runs and across processes.
//! - **Explicit state**: there is no global generator. Each pricing call
//!   constructs and owns its source, so nothing couples one call to the
//!   next.
//! - **Static dispatch**: decorators own their inner source by value and
//!   the drivers are generic over [`UniformSource`]; no `Box<dyn Trait>`
//!   in the hot path.
//!
//! ## Module Structure
//!
//! - [`UniformSource`]: the source contract (draw, reset, skip-ahead)
//! - [`ParkMillerRng`]: the minimal-standard multiplicative LCG
//! - [`AntitheticSampler`]: decorator emitting each draw followed by its
//!   mirror `1 - x`
//!
//! ## Usage Example
//!
//! ```rust
//! use mc_engine::rng::{AntitheticSampler, ParkMillerRng, UniformSource};
//!
//! let mut source = ParkMillerRng::new(42);
//! let u = source.next();
//! assert!(u > 0.0 && u < 1.0);
//!
//! // Wrap for variance reduction: draws come in mirrored pairs.
//! let mut paired = AntitheticSampler::new(ParkMillerRng::new(42));
//! let first = paired.next();
//! let second = paired.next();
//! assert_eq!(second, 1.0 - first);
//! ```

mod antithetic;
mod park_miller;
mod traits;

pub use antithetic::AntitheticSampler;
pub use park_miller::ParkMillerRng;
pub use traits::UniformSource;
