//! High-level pricing entry points.
//!
//! Each function wires a full stack for one run: instrument, constant
//! parameter curves, a fresh Park-Miller source, and a gatherer. The
//! scalar entry points return the bare Monte Carlo estimate; the
//! diagnostic entry point honours a [`SimulationConfig`] and reports a
//! [`ResultsTable`] with convergence snapshots and a confidence
//! interval. Identical arguments always reproduce identical results.

use mc_core::market_data::curves::ConstantCurve;
use mc_models::instruments::{CallPayoff, GeometricAsianOption, Payoff, PutPayoff, VanillaOption};

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::rng::{AntitheticSampler, ParkMillerRng};
use crate::simulation::{simulate_geometric_asian, simulate_vanilla};
use crate::statistics::{
    ConfidenceBands, ConvergenceTable, MeanGatherer, ResultsTable, StatisticsGatherer,
};

/// Rejects raw expiries before an instrument is constructed, so the
/// scalar entry points report expiry problems in the driver's own
/// vocabulary.
fn validate_expiry(expiry: f64) -> Result<(), SimulationError> {
    if !expiry.is_finite() || expiry <= 0.0 {
        return Err(SimulationError::InvalidExpiry { expiry });
    }
    Ok(())
}

fn validate_market(volatility: f64, rate: f64) -> Result<(), SimulationError> {
    if !volatility.is_finite() {
        return Err(SimulationError::InvalidVolatility { volatility });
    }
    if !rate.is_finite() {
        return Err(SimulationError::InvalidRate { rate });
    }
    Ok(())
}

fn price_vanilla_plain<P: Payoff<f64>>(
    payoff: P,
    expiry: f64,
    spot: f64,
    volatility: f64,
    rate: f64,
    path_count: u64,
    seed: u64,
) -> Result<f64, SimulationError> {
    validate_expiry(expiry)?;
    validate_market(volatility, rate)?;
    let option = VanillaOption::new(payoff, expiry)?;
    let vol_curve = ConstantCurve::new(volatility)?;
    let rate_curve = ConstantCurve::new(rate)?;

    let mut gatherer = MeanGatherer::new();
    let mut source = ParkMillerRng::new(seed);
    simulate_vanilla(
        &option,
        spot,
        &vol_curve,
        &rate_curve,
        path_count,
        &mut gatherer,
        &mut source,
    )?;
    Ok(gatherer.mean().unwrap_or(0.0))
}

/// Prices a European call by Monte Carlo.
///
/// # Arguments
///
/// * `expiry` - Years to expiry, strictly positive
/// * `strike` - Strike price (zero is legal)
/// * `spot` - Current underlying level
/// * `volatility` - Black-Scholes volatility
/// * `rate` - Continuously compounded risk-free rate
/// * `path_count` - Number of paths, in `1..=MAX_PATHS`
/// * `seed` - Generator seed (zero is coerced to one)
///
/// # Returns
///
/// The discounted sample mean of the call payoff.
///
/// # Errors
///
/// Returns a [`SimulationError`] when any input fails validation.
///
/// # Examples
///
/// ```
/// use mc_engine::pricing::price_european_call;
///
/// let price = price_european_call(1.0, 100.0, 100.0, 0.2, 0.05, 100_000, 42).unwrap();
/// assert!((price - 10.45).abs() < 0.5);
/// ```
pub fn price_european_call(
    expiry: f64,
    strike: f64,
    spot: f64,
    volatility: f64,
    rate: f64,
    path_count: u64,
    seed: u64,
) -> Result<f64, SimulationError> {
    let payoff = CallPayoff::new(strike)?;
    price_vanilla_plain(payoff, expiry, spot, volatility, rate, path_count, seed)
}

/// Prices a European put by Monte Carlo.
///
/// Arguments and errors match [`price_european_call`].
///
/// # Examples
///
/// ```
/// use mc_engine::pricing::price_european_put;
///
/// let price = price_european_put(1.0, 100.0, 100.0, 0.2, 0.05, 100_000, 42).unwrap();
/// assert!((price - 5.57).abs() < 0.5);
/// ```
pub fn price_european_put(
    expiry: f64,
    strike: f64,
    spot: f64,
    volatility: f64,
    rate: f64,
    path_count: u64,
    seed: u64,
) -> Result<f64, SimulationError> {
    let payoff = PutPayoff::new(strike)?;
    price_vanilla_plain(payoff, expiry, spot, volatility, rate, path_count, seed)
}

/// Prices a vanilla option and reports the full diagnostic table.
///
/// The gatherer stack is a [`ConvergenceTable`] over [`ConfidenceBands`]
/// over a [`MeanGatherer`], so the table carries power-of-two
/// convergence snapshots, the final mean, and a confidence interval at
/// the configured multiplier. When `config.antithetic()` is set the
/// uniform stream is wrapped in an [`AntitheticSampler`].
///
/// # Errors
///
/// Returns a [`SimulationError`] when any input fails validation.
///
/// # Examples
///
/// ```
/// use mc_engine::pricing::price_vanilla_with_diagnostics;
/// use mc_engine::SimulationConfig;
/// use mc_models::instruments::{CallPayoff, VanillaOption};
///
/// let option = VanillaOption::new(CallPayoff::new(100.0).unwrap(), 1.0).unwrap();
/// let config = SimulationConfig::builder().path_count(10_000).build().unwrap();
/// let table = price_vanilla_with_diagnostics(&option, 100.0, 0.2, 0.05, config).unwrap();
///
/// let (lower, upper) = table.confidence_interval().unwrap();
/// let mean = table.mean().unwrap();
/// assert!(lower <= mean && mean <= upper);
/// assert!(!table.snapshots().is_empty());
/// ```
pub fn price_vanilla_with_diagnostics<P: Payoff<f64>>(
    option: &VanillaOption<f64, P>,
    spot: f64,
    volatility: f64,
    rate: f64,
    config: SimulationConfig,
) -> Result<ResultsTable, SimulationError> {
    validate_market(volatility, rate)?;
    let vol_curve = ConstantCurve::new(volatility)?;
    let rate_curve = ConstantCurve::new(rate)?;

    let mut gatherer = ConvergenceTable::new(ConfidenceBands::with_multiplier(
        MeanGatherer::new(),
        config.confidence_multiplier(),
    )?);

    if config.antithetic() {
        let mut source = AntitheticSampler::new(ParkMillerRng::new(config.seed()));
        simulate_vanilla(
            option,
            spot,
            &vol_curve,
            &rate_curve,
            config.path_count(),
            &mut gatherer,
            &mut source,
        )?;
    } else {
        let mut source = ParkMillerRng::new(config.seed());
        simulate_vanilla(
            option,
            spot,
            &vol_curve,
            &rate_curve,
            config.path_count(),
            &mut gatherer,
            &mut source,
        )?;
    }
    Ok(gatherer.results_so_far())
}

/// Prices a geometric-average Asian call by Monte Carlo.
///
/// The average is taken over `fixings` equally spaced observation
/// dates ending at expiry.
///
/// # Errors
///
/// Returns a [`SimulationError`] when any input fails validation.
///
/// # Examples
///
/// ```
/// use mc_engine::pricing::price_geometric_asian_call;
///
/// // Monthly fixings over one year
/// let price = price_geometric_asian_call(1.0, 100.0, 100.0, 0.2, 0.05, 12, 50_000, 42).unwrap();
/// assert!(price > 0.0 && price < 100.0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn price_geometric_asian_call(
    expiry: f64,
    strike: f64,
    spot: f64,
    volatility: f64,
    rate: f64,
    fixings: usize,
    path_count: u64,
    seed: u64,
) -> Result<f64, SimulationError> {
    let payoff = CallPayoff::new(strike)?;
    validate_expiry(expiry)?;
    validate_market(volatility, rate)?;
    let option = GeometricAsianOption::new(payoff, expiry, fixings)?;
    let vol_curve = ConstantCurve::new(volatility)?;
    let rate_curve = ConstantCurve::new(rate)?;

    let mut gatherer = MeanGatherer::new();
    let mut source = ParkMillerRng::new(seed);
    simulate_geometric_asian(
        &option,
        spot,
        &vol_curve,
        &rate_curve,
        path_count,
        &mut gatherer,
        &mut source,
    )?;
    Ok(gatherer.mean().unwrap_or(0.0))
}
