//! European vanilla option contracts.

use num_traits::Float;

use crate::instruments::error::InstrumentError;
use crate::instruments::payoff::Payoff;

/// A European option: a payoff rule exercised once, at expiry.
///
/// The contract carries no market data. Spot, volatility, and rates
/// belong to the pricing engine; the option only knows what it pays
/// when the terminal spot is revealed.
///
/// # Examples
///
/// ```rust
/// use mc_models::instruments::{CallPayoff, VanillaOption};
///
/// let call = CallPayoff::new(100.0_f64).unwrap();
/// let option = VanillaOption::new(call, 0.5).unwrap();
/// assert_eq!(option.expiry(), 0.5);
/// assert_eq!(option.payoff(104.0), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption<T: Float, P: Payoff<T>> {
    payoff: P,
    expiry: T,
}

impl<T: Float, P: Payoff<T>> VanillaOption<T, P> {
    /// Creates a vanilla option from a payoff and an expiry.
    ///
    /// # Arguments
    ///
    /// * `payoff` - The payoff rule applied to the terminal spot.
    /// * `expiry` - Time to expiry in years, must be finite and strictly
    ///   positive.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidExpiry`] if `expiry` is zero,
    /// negative, NaN, or infinite.
    pub fn new(payoff: P, expiry: T) -> Result<Self, InstrumentError> {
        if !expiry.is_finite() || expiry <= T::zero() {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { payoff, expiry })
    }

    /// Evaluates the contract's payoff at the given terminal spot.
    #[inline]
    pub fn payoff(&self, terminal: T) -> T {
        self.payoff.payoff(terminal)
    }

    /// Returns the expiry `T` in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }
}
