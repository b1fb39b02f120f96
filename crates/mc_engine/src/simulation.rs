//! Monte Carlo path simulation under Black-Scholes dynamics.
//!
//! Both drivers evolve the underlying as geometric Brownian motion
//! with the volatility and rate taken as interval means of their
//! term-structure curves over the option's life:
//!
//! ```text
//! S_T = S_0 * exp((r - sigma^2 / 2) T + sigma sqrt(T) Z),  Z ~ N(0, 1)
//! ```
//!
//! Each discounted path payoff is handed to a
//! [`StatisticsGatherer`]; the drivers themselves keep no state and
//! return nothing but success or a validation error. All validation
//! happens before the first random draw, so a failed call leaves the
//! uniform source untouched and a reproducible run never half-consumes
//! its stream.

use mc_core::market_data::curves::ParameterCurve;
use mc_models::instruments::{GeometricAsianOption, Payoff, VanillaOption};

use crate::config::MAX_PATHS;
use crate::error::SimulationError;
use crate::rng::UniformSource;
use crate::statistics::StatisticsGatherer;

/// Effective market parameters for one run, reduced from the curves.
struct EffectiveMarket {
    volatility: f64,
    rate: f64,
}

/// Validates the run inputs and reduces both curves to interval means.
///
/// Ordering matters: nothing here touches the uniform source, and the
/// checks run in a fixed order (path count, spot, volatility, rate) so
/// a caller with several bad inputs sees a deterministic error.
fn effective_market<C, R>(
    path_count: u64,
    spot: f64,
    vol_curve: &C,
    rate_curve: &R,
    expiry: f64,
) -> Result<EffectiveMarket, SimulationError>
where
    C: ParameterCurve<f64>,
    R: ParameterCurve<f64>,
{
    if path_count == 0 {
        return Err(SimulationError::InvalidPathCount { path_count });
    }
    if path_count > MAX_PATHS {
        return Err(SimulationError::PathCountExceedsCap {
            path_count,
            max: MAX_PATHS,
        });
    }
    // A zero spot is a valid boundary: every payoff is evaluated at zero.
    if !spot.is_finite() || spot < 0.0 {
        return Err(SimulationError::InvalidSpot { spot });
    }
    let volatility = vol_curve.mean(0.0, expiry)?;
    if !volatility.is_finite() || volatility < 0.0 {
        return Err(SimulationError::InvalidVolatility { volatility });
    }
    let rate = rate_curve.mean(0.0, expiry)?;
    if !rate.is_finite() {
        return Err(SimulationError::InvalidRate { rate });
    }
    Ok(EffectiveMarket { volatility, rate })
}

/// Simulates a vanilla option and feeds discounted payoffs to the
/// gatherer.
///
/// Draws exactly `path_count` Gaussian deviates from `source`, one per
/// path, and calls `gatherer.dump_one_result` once per path with the
/// discounted terminal payoff.
///
/// # Arguments
///
/// * `option` - Contract whose terminal payoff is sampled
/// * `spot` - Current underlying level (zero is legal)
/// * `vol_curve` - Volatility term structure
/// * `rate_curve` - Risk-free rate term structure
/// * `path_count` - Number of paths, in `1..=MAX_PATHS`
/// * `gatherer` - Sink for discounted path payoffs
/// * `source` - Uniform deviate stream
///
/// # Errors
///
/// Returns a [`SimulationError`] when any input fails validation; the
/// source and gatherer are untouched in that case.
pub fn simulate_vanilla<P, C, R, G, S>(
    option: &VanillaOption<f64, P>,
    spot: f64,
    vol_curve: &C,
    rate_curve: &R,
    path_count: u64,
    gatherer: &mut G,
    source: &mut S,
) -> Result<(), SimulationError>
where
    P: Payoff<f64>,
    C: ParameterCurve<f64>,
    R: ParameterCurve<f64>,
    G: StatisticsGatherer,
    S: UniformSource,
{
    let expiry = option.expiry();
    let market = effective_market(path_count, spot, vol_curve, rate_curve, expiry)?;

    let drift = (market.rate - 0.5 * market.volatility * market.volatility) * expiry;
    let diffusion = market.volatility * expiry.sqrt();
    let discount = (-market.rate * expiry).exp();

    for _ in 0..path_count {
        let z = source.next_gaussian();
        let terminal = spot * (drift + diffusion * z).exp();
        gatherer.dump_one_result(option.payoff(terminal) * discount);
    }
    Ok(())
}

/// Simulates a geometric Asian option and feeds discounted payoffs to
/// the gatherer.
///
/// The underlying is observed at the option's equally spaced fixing
/// dates. The running product of fixings is accumulated in log space,
/// so the geometric average `(S_1 * ... * S_n)^(1/n)` never overflows
/// for long fixing schedules. Draws exactly `path_count * fixings`
/// Gaussian deviates from `source`.
///
/// # Errors
///
/// Returns a [`SimulationError`] when any input fails validation; the
/// source and gatherer are untouched in that case.
pub fn simulate_geometric_asian<P, C, R, G, S>(
    option: &GeometricAsianOption<f64, P>,
    spot: f64,
    vol_curve: &C,
    rate_curve: &R,
    path_count: u64,
    gatherer: &mut G,
    source: &mut S,
) -> Result<(), SimulationError>
where
    P: Payoff<f64>,
    C: ParameterCurve<f64>,
    R: ParameterCurve<f64>,
    G: StatisticsGatherer,
    S: UniformSource,
{
    let expiry = option.expiry();
    let fixings = option.fixings();
    let market = effective_market(path_count, spot, vol_curve, rate_curve, expiry)?;

    let dt = expiry / fixings as f64;
    let step_drift = (market.rate - 0.5 * market.volatility * market.volatility) * dt;
    let step_diffusion = market.volatility * dt.sqrt();
    let discount = (-market.rate * expiry).exp();
    // ln(0) = -inf propagates cleanly: the average collapses to zero.
    let log_spot = spot.ln();

    for _ in 0..path_count {
        let mut log_level = log_spot;
        let mut log_sum = 0.0;
        for _ in 0..fixings {
            log_level += step_drift + step_diffusion * source.next_gaussian();
            log_sum += log_level;
        }
        let average = (log_sum / fixings as f64).exp();
        gatherer.dump_one_result(option.average_payoff(average) * discount);
    }
    Ok(())
}
