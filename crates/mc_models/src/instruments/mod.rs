//! Instrument definitions.
//!
//! An instrument couples a payoff rule with contract terms (expiry,
//! fixing schedule). Payoffs are pure functions of the realised spot
//! level; the contract types add the temporal information a simulation
//! engine needs to generate that spot level in the first place.

mod asian;
mod error;
mod vanilla;

pub mod payoff;

pub use asian::GeometricAsianOption;
pub use error::InstrumentError;
pub use payoff::{CallPayoff, DigitalCallPayoff, DigitalPutPayoff, Payoff, PutPayoff};
pub use vanilla::VanillaOption;
