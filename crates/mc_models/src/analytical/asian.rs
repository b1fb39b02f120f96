//! Discrete geometric-average Asian option pricing.
//!
//! A geometric average of lognormal fixings is itself lognormal, so the
//! discretely sampled geometric Asian option has an exact closed form.
//! With `n` equally spaced fixings at `t_i = i·T/n`, the log-average
//! `ln G = (1/n)·Σ ln S_{t_i}` is normal with
//!
//! ```text
//! E[ln G]   = ln S + (r - σ²/2)·T·(n+1)/(2n)
//! Var[ln G] = σ²·T·(n+1)(2n+1)/(6n²)
//! ```
//!
//! and the price follows from the lognormal expectation formula,
//! discounted at `e^{-rT}`. At `n = 1` the average is the terminal spot
//! and the formula collapses to Black-Scholes; as `n → ∞` it converges
//! to the continuously sampled Kemna-Vorst (1990) price with adjusted
//! volatility `σ/√3`.

use num_traits::Float;

use mc_core::math::distributions::norm_cdf;

use crate::analytical::error::AnalyticalError;

/// Mean and variance of the log geometric average.
struct LogAverageMoments<T> {
    mean: T,
    variance: T,
}

fn log_average_moments<T: Float>(
    spot: T,
    rate: T,
    volatility: T,
    expiry: T,
    fixings: usize,
) -> LogAverageMoments<T> {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let six = T::from(6.0).unwrap();
    let n = T::from(fixings).unwrap();

    let drift_factor = (n + one) / (two * n);
    let variance_factor = (n + one) * (two * n + one) / (six * n * n);

    let vol_sq = volatility * volatility;
    LogAverageMoments {
        mean: spot.ln() + (rate - vol_sq / two) * expiry * drift_factor,
        variance: vol_sq * expiry * variance_factor,
    }
}

fn validate_inputs<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    expiry: T,
    fixings: usize,
) -> Result<(), AnalyticalError> {
    let zero = T::zero();

    if !spot.is_finite() || spot <= zero {
        return Err(AnalyticalError::InvalidSpot {
            spot: spot.to_f64().unwrap_or(f64::NAN),
        });
    }
    if !strike.is_finite() || strike < zero {
        return Err(AnalyticalError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
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
    if !expiry.is_finite() || expiry <= zero {
        return Err(AnalyticalError::InvalidExpiry {
            expiry: expiry.to_f64().unwrap_or(f64::NAN),
        });
    }
    if fixings == 0 {
        return Err(AnalyticalError::InvalidFixingCount { fixings });
    }
    Ok(())
}

/// Prices a discrete geometric-average Asian call.
///
/// # Arguments
///
/// * `spot` - Current spot price, finite and strictly positive.
/// * `strike` - Strike price, finite and non-negative.
/// * `rate` - Continuously compounded risk-free rate, finite.
/// * `volatility` - Annualised volatility, finite and non-negative.
/// * `expiry` - Time to expiry in years, finite and strictly positive.
/// * `fixings` - Number of equally spaced observation dates, at least one.
///
/// # Errors
///
/// Returns the matching [`AnalyticalError`] variant for any
/// out-of-domain input.
///
/// # Examples
///
/// ```rust
/// use mc_models::analytical::geometric_asian_call;
///
/// // Monthly averaging over one year
/// let price = geometric_asian_call(100.0, 100.0, 0.05, 0.2, 1.0, 12).unwrap();
/// assert!(price > 0.0 && price < 10.45);
/// ```
pub fn geometric_asian_call<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    expiry: T,
    fixings: usize,
) -> Result<T, AnalyticalError> {
    validate_inputs(spot, strike, rate, volatility, expiry, fixings)?;

    let zero = T::zero();
    let half = T::from(0.5).unwrap();
    let tiny = T::from(1e-12).unwrap();

    let moments = log_average_moments(spot, rate, volatility, expiry, fixings);
    let discount = (-rate * expiry).exp();
    let expected_average = (moments.mean + half * moments.variance).exp();

    // K = 0: the option always exercises and pays the average itself.
    if strike <= tiny {
        return Ok(discount * expected_average);
    }

    let s = moments.variance.sqrt();
    // Zero volatility: the average is deterministic.
    if s <= tiny {
        return Ok(discount * (moments.mean.exp() - strike).max(zero));
    }

    let d1 = (moments.mean - strike.ln() + moments.variance) / s;
    let d2 = d1 - s;

    Ok(discount * (expected_average * norm_cdf(d1) - strike * norm_cdf(d2)))
}

/// Prices a discrete geometric-average Asian put.
///
/// Same inputs and validation as [`geometric_asian_call`]; the pair
/// satisfies the parity `C - P = e^{-rT}·(E[G] - K)` where `E[G]` is the
/// expected geometric average.
///
/// # Errors
///
/// Returns the matching [`AnalyticalError`] variant for any
/// out-of-domain input.
pub fn geometric_asian_put<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    expiry: T,
    fixings: usize,
) -> Result<T, AnalyticalError> {
    validate_inputs(spot, strike, rate, volatility, expiry, fixings)?;

    let zero = T::zero();
    let half = T::from(0.5).unwrap();
    let tiny = T::from(1e-12).unwrap();

    let moments = log_average_moments(spot, rate, volatility, expiry, fixings);
    let discount = (-rate * expiry).exp();
    let expected_average = (moments.mean + half * moments.variance).exp();

    if strike <= tiny {
        return Ok(zero);
    }

    let s = moments.variance.sqrt();
    if s <= tiny {
        return Ok(discount * (strike - moments.mean.exp()).max(zero));
    }

    let d1 = (moments.mean - strike.ln() + moments.variance) / s;
    let d2 = d1 - s;

    Ok(discount * (strike * norm_cdf(-d2) - expected_average * norm_cdf(-d1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BlackScholes;
    use approx::assert_relative_eq;

    // ======== Single-Fixing Degeneracy Tests ========

    #[test]
    fn test_single_fixing_matches_black_scholes() {
        // With one fixing the average is the terminal spot, so the
        // formula must reproduce Black-Scholes exactly.
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        for strike in [70.0, 90.0, 100.0, 110.0, 130.0] {
            let asian = geometric_asian_call(100.0, strike, 0.05, 0.2, 1.0, 1).unwrap();
            let european = bs.price_call(strike, 1.0).unwrap();
            assert_relative_eq!(asian, european, epsilon = 1e-10);

            let asian_put = geometric_asian_put(100.0, strike, 0.05, 0.2, 1.0, 1).unwrap();
            let european_put = bs.price_put(strike, 1.0).unwrap();
            assert_relative_eq!(asian_put, european_put, epsilon = 1e-10);
        }
    }

    // ======== Continuous-Limit Tests ========

    #[test]
    fn test_many_fixings_approach_kemna_vorst() {
        // As n grows the discrete moments converge to the continuously
        // sampled limit: adjusted volatility σ/√3 and log-forward
        // ln S + (r - σ²/6)·T/2.
        use mc_core::math::distributions::norm_cdf;

        let (s, k, r, vol, t) = (100.0_f64, 100.0, 0.05, 0.2, 1.0);
        let discrete = geometric_asian_call(s, k, r, vol, t, 200_000).unwrap();

        let sig = vol / 3.0_f64.sqrt();
        let log_forward = s.ln() + (r - vol * vol / 6.0) * t / 2.0;
        let forward = log_forward.exp();
        let d1 = (log_forward - k.ln() + sig * sig * t) / (sig * t.sqrt());
        let d2 = d1 - sig * t.sqrt();
        let continuous = (-r * t).exp() * (forward * norm_cdf(d1) - k * norm_cdf(d2));

        assert_relative_eq!(discrete, continuous, epsilon = 1e-4);
    }

    #[test]
    fn test_price_decreases_with_fixing_count() {
        // More averaging dates shrink both the effective drift and the
        // effective variance, so the ATM call cheapens monotonically.
        let mut previous = f64::INFINITY;
        for fixings in [1, 2, 4, 12, 52, 252] {
            let price = geometric_asian_call(100.0, 100.0, 0.05, 0.2, 1.0, fixings).unwrap();
            assert!(price < previous);
            previous = price;
        }
    }

    #[test]
    fn test_asian_cheaper_than_european() {
        let asian = geometric_asian_call(100.0, 100.0, 0.05, 0.2, 1.0, 12).unwrap();
        let european = BlackScholes::new(100.0, 0.05, 0.2)
            .unwrap()
            .price_call(100.0, 1.0)
            .unwrap();
        assert!(asian < european);
    }

    // ======== Reference Value Tests ========

    #[test]
    fn test_monthly_averaging_reference_value() {
        // S = K = 100, r = 5%, sigma = 20%, T = 1, 12 fixings: 5.9402
        let price = geometric_asian_call(100.0, 100.0, 0.05, 0.2, 1.0, 12).unwrap();
        assert_relative_eq!(price, 5.9402, epsilon = 1e-3);
    }

    #[test]
    fn test_put_call_parity() {
        let (s, r, vol, t, n) = (100.0_f64, 0.05, 0.25, 0.75, 26);
        for k in [80.0, 100.0, 120.0] {
            let call = geometric_asian_call(s, k, r, vol, t, n).unwrap();
            let put = geometric_asian_put(s, k, r, vol, t, n).unwrap();

            let factor = (n as f64 + 1.0) / (2.0 * n as f64);
            let mean = s.ln() + (r - vol * vol / 2.0) * t * factor;
            let variance =
                vol * vol * t * (n as f64 + 1.0) * (2.0 * n as f64 + 1.0) / (6.0 * (n * n) as f64);
            let expected_average = (mean + variance / 2.0).exp();
            let parity = (-r * t).exp() * (expected_average - k);

            assert_relative_eq!(call - put, parity, epsilon = 1e-9);
        }
    }

    // ======== Boundary Tests ========

    #[test]
    fn test_zero_strike_pays_discounted_expected_average() {
        let (s, r, vol, t, n) = (100.0_f64, 0.05, 0.2, 1.0, 12);
        let price = geometric_asian_call(s, 0.0, r, vol, t, n).unwrap();

        let factor = (n as f64 + 1.0) / (2.0 * n as f64);
        let mean = s.ln() + (r - vol * vol / 2.0) * t * factor;
        let variance =
            vol * vol * t * (n as f64 + 1.0) * (2.0 * n as f64 + 1.0) / (6.0 * (n * n) as f64);
        let expected = (-r * t).exp() * (mean + variance / 2.0).exp();
        assert_relative_eq!(price, expected, epsilon = 1e-12);

        assert_eq!(geometric_asian_put(s, 0.0, r, vol, t, n).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_volatility_is_deterministic() {
        // With sigma = 0 every fixing sits on the forward curve, so the
        // average is e^{E[ln G]} exactly.
        let (s, k, r, t, n) = (100.0_f64, 100.0, 0.05, 1.0, 4);
        let price = geometric_asian_call(s, k, r, 0.0, t, n).unwrap();

        let factor = (n as f64 + 1.0) / (2.0 * n as f64);
        let average = (s.ln() + r * t * factor).exp();
        let expected = (-r * t).exp() * (average - k);
        assert_relative_eq!(price, expected, epsilon = 1e-12);

        // Strike above the deterministic average: worthless.
        let worthless = geometric_asian_call(s, 110.0, r, 0.0, t, n).unwrap();
        assert_eq!(worthless, 0.0);
    }

    // ======== Validation Tests ========

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(matches!(
            geometric_asian_call(0.0, 100.0, 0.05, 0.2, 1.0, 12),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
        assert!(matches!(
            geometric_asian_call(100.0, -1.0, 0.05, 0.2, 1.0, 12),
            Err(AnalyticalError::InvalidStrike { .. })
        ));
        assert!(matches!(
            geometric_asian_call(100.0, 100.0, f64::NAN, 0.2, 1.0, 12),
            Err(AnalyticalError::InvalidRate { .. })
        ));
        assert!(matches!(
            geometric_asian_call(100.0, 100.0, 0.05, -0.2, 1.0, 12),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            geometric_asian_call(100.0, 100.0, 0.05, 0.2, 0.0, 12),
            Err(AnalyticalError::InvalidExpiry { .. })
        ));
        assert!(matches!(
            geometric_asian_call(100.0, 100.0, 0.05, 0.2, 1.0, 0),
            Err(AnalyticalError::InvalidFixingCount { fixings: 0 })
        ));
    }

    // ======== Generic Float Tests ========

    #[test]
    fn test_f32_compatibility() {
        let price = geometric_asian_call(100.0_f32, 100.0, 0.05, 0.2, 1.0, 12).unwrap();
        assert!((price - 5.94).abs() < 0.05);
    }
}
