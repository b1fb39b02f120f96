//! Payoff functions mapping a realised spot level to a cash amount.
//!
//! Payoffs are deliberately ignorant of time: they answer "given this
//! spot level, what does the contract pay?" and nothing else. Contract
//! types such as [`crate::instruments::VanillaOption`] pair a payoff
//! with the temporal terms a simulation needs.

use num_traits::Float;

use crate::instruments::error::InstrumentError;

/// A payoff rule evaluated at a single realised spot level.
///
/// # Contract
///
/// Implementations must be pure: the same `level` always produces the
/// same cash amount, and evaluation never fails. All input validation
/// happens at construction time so pricing loops stay branch-free.
pub trait Payoff<T: Float> {
    /// Evaluates the payoff at the given spot level.
    ///
    /// For vanilla options `level` is the terminal spot; for averaging
    /// options it is the realised average handed over by the contract.
    fn payoff(&self, level: T) -> T;
}

/// Call payoff: `max(S - K, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallPayoff<T: Float> {
    strike: T,
}

/// Put payoff: `max(K - S, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PutPayoff<T: Float> {
    strike: T,
}

/// Cash-or-nothing call: pays one unit when the spot finishes above the strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitalCallPayoff<T: Float> {
    strike: T,
}

/// Cash-or-nothing put: pays one unit when the spot finishes below the strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitalPutPayoff<T: Float> {
    strike: T,
}

fn validate_strike<T: Float>(strike: T) -> Result<T, InstrumentError> {
    if !strike.is_finite() || strike < T::zero() {
        return Err(InstrumentError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(strike)
}

impl<T: Float> CallPayoff<T> {
    /// Creates a call payoff with the given strike.
    ///
    /// # Arguments
    ///
    /// * `strike` - Strike price `K`, must be finite and non-negative.
    ///   Zero is allowed: a zero-strike call pays the spot itself.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidStrike`] if `strike` is
    /// negative, NaN, or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mc_models::instruments::{CallPayoff, Payoff};
    ///
    /// let call = CallPayoff::new(100.0_f64).unwrap();
    /// assert_eq!(call.payoff(110.0), 10.0);
    /// assert_eq!(call.payoff(90.0), 0.0);
    /// ```
    pub fn new(strike: T) -> Result<Self, InstrumentError> {
        Ok(Self {
            strike: validate_strike(strike)?,
        })
    }

    /// Returns the strike level `K`.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }
}

impl<T: Float> Payoff<T> for CallPayoff<T> {
    #[inline]
    fn payoff(&self, level: T) -> T {
        (level - self.strike).max(T::zero())
    }
}

impl<T: Float> PutPayoff<T> {
    /// Creates a put payoff with the given strike.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidStrike`] if `strike` is
    /// negative, NaN, or infinite.
    pub fn new(strike: T) -> Result<Self, InstrumentError> {
        Ok(Self {
            strike: validate_strike(strike)?,
        })
    }

    /// Returns the strike level `K`.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }
}

impl<T: Float> Payoff<T> for PutPayoff<T> {
    #[inline]
    fn payoff(&self, level: T) -> T {
        (self.strike - level).max(T::zero())
    }
}

impl<T: Float> DigitalCallPayoff<T> {
    /// Creates a digital call payoff with the given strike.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidStrike`] if `strike` is
    /// negative, NaN, or infinite.
    pub fn new(strike: T) -> Result<Self, InstrumentError> {
        Ok(Self {
            strike: validate_strike(strike)?,
        })
    }

    /// Returns the strike level `K`.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }
}

impl<T: Float> Payoff<T> for DigitalCallPayoff<T> {
    /// Pays one unit strictly above the strike, zero at or below it.
    #[inline]
    fn payoff(&self, level: T) -> T {
        if level > self.strike {
            T::one()
        } else {
            T::zero()
        }
    }
}

impl<T: Float> DigitalPutPayoff<T> {
    /// Creates a digital put payoff with the given strike.
    ///
    /// # Errors
    ///
    /// Returns [`InstrumentError::InvalidStrike`] if `strike` is
    /// negative, NaN, or infinite.
    pub fn new(strike: T) -> Result<Self, InstrumentError> {
        Ok(Self {
            strike: validate_strike(strike)?,
        })
    }

    /// Returns the strike level `K`.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }
}

impl<T: Float> Payoff<T> for DigitalPutPayoff<T> {
    /// Pays one unit strictly below the strike, zero at or above it.
    #[inline]
    fn payoff(&self, level: T) -> T {
        if level < self.strike {
            T::one()
        } else {
            T::zero()
        }
    }
}
