//! Geometric-average Asian option contracts.

use num_traits::Float;

use crate::instruments::error::InstrumentError;
use crate::instruments::payoff::Payoff;

/// An Asian option whose payoff is applied to the geometric average of
/// the spot observed on an equally spaced fixing schedule.
///
/// With `n` fixings over expiry `T`, observations fall at `i * T / n`
/// for `i = 1..=n`, so the last fixing coincides with expiry. The
/// geometric average keeps the terminal distribution lognormal, which
/// is what makes an exact closed form possible
/// (see [`crate::analytical::geometric_asian_call`]).
///
/// # Examples
///
/// ```rust
/// use mc_models::instruments::{CallPayoff, GeometricAsianOption};
///
/// let payoff = CallPayoff::new(100.0_f64).unwrap();
/// let option = GeometricAsianOption::new(payoff, 1.0, 12).unwrap();
/// assert_eq!(option.fixings(), 12);
/// assert_eq!(option.average_payoff(105.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricAsianOption<T: Float, P: Payoff<T>> {
    payoff: P,
    expiry: T,
    fixings: usize,
}

impl<T: Float, P: Payoff<T>> GeometricAsianOption<T, P> {
    /// Creates a geometric Asian option.
    ///
    /// # Arguments
    ///
    /// * `payoff` - The payoff rule applied to the geometric average.
    /// * `expiry` - Time to expiry in years, must be finite and strictly
    ///   positive.
    /// * `fixings` - Number of equally spaced observation dates, at
    ///   least one. A single fixing observes only the terminal spot and
    ///   the contract degenerates to a vanilla option.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidExpiry`] for a non-positive or
    /// non-finite expiry, and [`InstrumentError::InvalidFixingCount`]
    /// when `fixings` is zero.
    pub fn new(payoff: P, expiry: T, fixings: usize) -> Result<Self, InstrumentError> {
        if !expiry.is_finite() || expiry <= T::zero() {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        if fixings == 0 {
            return Err(InstrumentError::InvalidFixingCount { fixings });
        }
        Ok(Self {
            payoff,
            expiry,
            fixings,
        })
    }

    /// Evaluates the contract's payoff at the realised geometric average.
    #[inline]
    pub fn average_payoff(&self, geometric_mean: T) -> T {
        self.payoff.payoff(geometric_mean)
    }

    /// Returns the expiry `T` in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the number of fixing dates.
    #[inline]
    pub fn fixings(&self) -> usize {
        self.fixings
    }
}
