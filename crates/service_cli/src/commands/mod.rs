//! Subcommand handlers for the pricing CLI.
//!
//! Each submodule implements a specific CLI command. Seed resolution is
//! shared here: a zero seed on the command line means "draw one from
//! process entropy", any other value pins the run for reproduction.

use rand::Rng;
use tracing::debug;

pub mod asian;
pub mod european;

/// Resolves the `--seed` flag into the seed handed to the engine.
///
/// Zero is the sentinel for "fresh randomness": it is replaced with a
/// draw from the thread-local entropy source. Non-zero values pass
/// through unchanged so a logged seed can replay the exact run.
pub(crate) fn resolve_seed(seed: u64) -> u64 {
    if seed == 0 {
        let drawn = rand::thread_rng().gen::<u64>();
        debug!("Resolved seed from entropy: {}", drawn);
        drawn
    } else {
        debug!("Using fixed seed: {}", seed);
        seed
    }
}
