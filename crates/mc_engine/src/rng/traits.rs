//! The uniform-source contract shared by generators and their decorators.

use mc_core::math::distributions::inverse_norm_cdf;

/// A deterministic, seedable stream of uniform deviates in the open
/// interval (0, 1).
///
/// # Contract
///
/// - `next()` returns values strictly inside (0, 1); neither endpoint is
///   ever emitted.
/// - The stream is a pure function of the seed and the number of draws
///   consumed so far: equal seeds and equal call counts give equal
///   deviates, across processes.
/// - `reset(seed)` rewinds the stream to the start of the sequence for
///   `seed`; `skip(n)` advances by `n` draws without producing output,
///   so separate batches can be carved out of one logical stream without
///   overlap.
pub trait UniformSource {
    /// Returns the next uniform deviate in (0, 1).
    fn next(&mut self) -> f64;

    /// Reinitialises the stream to the starting state for `seed`.
    fn reset(&mut self, seed: u64);

    /// Advances the stream by `count` draws, discarding the output.
    fn skip(&mut self, count: u64);

    /// Returns the seed the stream was last reset to.
    fn seed(&self) -> u64;

    /// Fills `buffer` with consecutive uniform deviates.
    ///
    /// # Default Implementation
    ///
    /// Calls [`next`](Self::next) once per slot; zero allocation.
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for slot in buffer.iter_mut() {
            *slot = self.next();
        }
    }

    /// Returns the next standard-normal deviate.
    ///
    /// # Default Implementation
    ///
    /// Composes [`next`](Self::next) with the inverse normal CDF. One
    /// uniform draw is consumed per Gaussian.
    fn next_gaussian(&mut self) -> f64 {
        inverse_norm_cdf(self.next())
    }
}
