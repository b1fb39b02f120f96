//! European pricing command implementation
//!
//! Prices a European call or put by Monte Carlo using the mc_engine
//! drivers. Plain runs use the scalar entry points; `--antithetic` and
//! `--table` route through the diagnostic driver so the run picks up
//! variance reduction and the full convergence table.

use std::time::Instant;

use mc_engine::pricing::{
    price_european_call, price_european_put, price_vanilla_with_diagnostics,
};
use mc_engine::SimulationConfig;
use mc_models::instruments::{CallPayoff, PutPayoff, VanillaOption};
use tracing::{info, info_span};

use crate::{CliError, Result};

/// Run the european command
#[allow(clippy::too_many_arguments)]
pub fn run(
    option_type: &str,
    expiry: f64,
    strike: f64,
    spot: f64,
    vol: f64,
    rate: f64,
    paths: u64,
    seed: u64,
    antithetic: bool,
    table: bool,
) -> Result<()> {
    let span = info_span!("european", option_type);
    let _guard = span.enter();

    let is_put = match option_type {
        "call" => false,
        "put" => true,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown option type: {}. Supported: call, put",
                other
            )));
        }
    };

    info!("Pricing European {} by Monte Carlo", option_type);
    info!("  Expiry: {} years", expiry);
    info!("  Strike: {}", strike);
    info!("  Spot: {}", spot);
    info!("  Volatility: {}", vol);
    info!("  Rate: {}", rate);
    info!("  Paths: {}", paths);
    info!("  Antithetic: {}", antithetic);

    let seed = super::resolve_seed(seed);
    let started = Instant::now();

    if antithetic || table {
        let config = SimulationConfig::builder()
            .path_count(paths)
            .seed(seed)
            .antithetic(antithetic)
            .build()?;

        let results = if is_put {
            let option = VanillaOption::new(PutPayoff::new(strike)?, expiry)?;
            price_vanilla_with_diagnostics(&option, spot, vol, rate, config)?
        } else {
            let option = VanillaOption::new(CallPayoff::new(strike)?, expiry)?;
            price_vanilla_with_diagnostics(&option, spot, vol, rate, config)?
        };

        info!("Pricing completed in {:.2?}", started.elapsed());

        if table {
            println!("{}", results);
        } else if let Some(price) = results.mean() {
            println!("price = {:.6}", price);
        }
    } else {
        let price = if is_put {
            price_european_put(expiry, strike, spot, vol, rate, paths, seed)?
        } else {
            price_european_call(expiry, strike, spot, vol, rate, paths, seed)?
        };

        info!("Pricing completed in {:.2?}", started.elapsed());
        println!("price = {:.6}", price);
    }

    Ok(())
}
