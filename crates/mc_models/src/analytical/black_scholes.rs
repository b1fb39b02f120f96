//! Closed-form Black-Scholes prices for European options.
//!
//! Calls are `S·Φ(d₁) - K·e^(-rT)·Φ(d₂)` and puts follow from parity,
//! with `d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)` and `d₂ = d₁ - σ√T`.
//! These values are the yardstick the simulation engine is measured
//! against, so the degenerate corners (zero volatility, zero strike)
//! return exact limits rather than relying on Φ far in its tails.

use num_traits::Float;

use mc_core::math::distributions::norm_cdf;

use crate::analytical::error::AnalyticalError;

/// European option pricer under Black-Scholes dynamics.
///
/// Holds the market state (spot, rate, volatility); contract terms
/// (strike, expiry) are supplied per pricing call. Zero volatility is
/// accepted and collapses every price to its discounted intrinsic
/// value, which is exactly the boundary a simulation must reproduce.
///
/// # Examples
///
/// ```rust
/// use mc_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(105.0_f64, 0.03, 0.25).unwrap();
/// let call = bs.price_call(100.0, 1.0).unwrap();
/// let put = bs.price_put(100.0, 1.0).unwrap();
///
/// // Parity: C - P must equal S - K·e^(-rT) exactly.
/// let gap = call - put - (105.0 - 100.0 * (-0.03_f64).exp());
/// assert!(gap.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Current underlying level.
    spot: T,
    /// Continuously compounded short rate.
    rate: T,
    /// Annualised lognormal volatility.
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Validates the market state and builds a model around it.
    ///
    /// # Arguments
    ///
    /// * `spot` - Current spot price, must be finite and strictly positive.
    /// * `rate` - Continuously compounded risk-free rate, must be finite.
    ///   Negative rates are accepted.
    /// * `volatility` - Annualised volatility, must be finite and
    ///   non-negative. Zero is accepted.
    ///
    /// # Errors
    ///
    /// - [`AnalyticalError::InvalidSpot`] if `spot <= 0` or non-finite
    /// - [`AnalyticalError::InvalidRate`] if `rate` is non-finite
    /// - [`AnalyticalError::InvalidVolatility`] if `volatility < 0` or non-finite
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if !spot.is_finite() || spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !volatility.is_finite() || volatility < zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot level `S`.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the continuously compounded rate `r`.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the annualised volatility `σ`.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    fn validate_contract(&self, strike: T, expiry: T) -> Result<(), AnalyticalError> {
        if !strike.is_finite() || strike < T::zero() {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !expiry.is_finite() || expiry <= T::zero() {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Computes `d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)`, assuming the
    /// callers have already routed `strike = 0` and `σ√T = 0` to their
    /// exact limits.
    #[inline]
    fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * expiry.sqrt();

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Prices a European call, `C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)`.
    ///
    /// # Arguments
    ///
    /// * `strike` - Strike price, must be finite and non-negative. A zero
    ///   strike prices the forward: `C = S`.
    /// * `expiry` - Time to expiry in years, must be finite and strictly
    ///   positive.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticalError::InvalidStrike`] or
    /// [`AnalyticalError::InvalidExpiry`] for out-of-domain contract terms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mc_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0).unwrap();
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.validate_contract(strike, expiry)?;

        let zero = T::zero();
        let tiny = T::from(1e-12).unwrap();
        let discount = (-self.rate * expiry).exp();

        // K = 0: the option always exercises, C = e^{-rT}·E[S_T] = S.
        if strike <= tiny {
            return Ok(self.spot);
        }

        // σ√T = 0: the terminal spot is the forward, so the price is
        // discounted intrinsic against the discounted strike.
        if self.volatility * expiry.sqrt() <= tiny {
            return Ok((self.spot - strike * discount).max(zero));
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();

        Ok(self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2))
    }

    /// Prices a European put, `P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)`.
    ///
    /// # Arguments
    ///
    /// * `strike` - Strike price, must be finite and non-negative. A zero
    ///   strike put is worthless.
    /// * `expiry` - Time to expiry in years, must be finite and strictly
    ///   positive.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticalError::InvalidStrike`] or
    /// [`AnalyticalError::InvalidExpiry`] for out-of-domain contract terms.
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.validate_contract(strike, expiry)?;

        let zero = T::zero();
        let tiny = T::from(1e-12).unwrap();
        let discount = (-self.rate * expiry).exp();

        // K = 0: a put struck at zero can never pay.
        if strike <= tiny {
            return Ok(zero);
        }

        if self.volatility * expiry.sqrt() <= tiny {
            return Ok((strike * discount - self.spot).max(zero));
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();

        Ok(strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1))
    }
}
