//! Park-Miller minimal-standard generator.

use super::traits::UniformSource;

/// Modulus of the recurrence: the Mersenne prime 2^31 - 1.
const MODULUS: i64 = 2_147_483_647;

/// Multiplier of the recurrence.
const MULTIPLIER: i64 = 16_807;

/// Schrage quotient, `MODULUS / MULTIPLIER`.
const SCHRAGE_Q: i64 = 127_773;

/// Schrage remainder, `MODULUS % MULTIPLIER`.
const SCHRAGE_R: i64 = 2_836;

/// The Park-Miller "minimal standard" multiplicative LCG.
///
/// State evolves as `state <- (16807 * state) mod (2^31 - 1)` using the
/// Schrage factorization, so the intermediate product stays well inside
/// 64-bit range. The state visits every value in `[1, 2^31 - 2]` before
/// repeating, giving a period of 2^31 - 2.
///
/// Uniform output is `state / 2^31`: strictly inside (0, 1), with the
/// smallest emitted deviate `1 / 2^31` and the largest
/// `(2^31 - 2) / 2^31`. The Gaussian transform therefore never sees an
/// endpoint from this source.
///
/// A zero seed would freeze the recurrence at zero, so it is coerced to
/// one during reset. Randomising a zero seed (for example from process
/// entropy) is deliberately the caller's job, not this type's.
///
/// # Examples
///
/// ```rust
/// use mc_engine::rng::{ParkMillerRng, UniformSource};
///
/// let mut a = ParkMillerRng::new(12345);
/// let mut b = ParkMillerRng::new(12345);
/// assert_eq!(a.next(), b.next());
///
/// // skip(n) is equivalent to n discarded draws
/// a.skip(5);
/// for _ in 0..5 {
///     b.next();
/// }
/// assert_eq!(a.next(), b.next());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkMillerRng {
    state: i64,
    seed: i64,
}

impl ParkMillerRng {
    /// Creates a generator seeded with `seed`.
    ///
    /// The seed is reduced modulo 2^31 - 1; a reduced value of zero is
    /// coerced to one.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 1, seed: 1 };
        rng.reset(seed);
        rng
    }

    /// Advances the recurrence one step and returns the new state in
    /// `[1, 2^31 - 2]`.
    #[inline]
    fn next_state(&mut self) -> i64 {
        let hi = self.state / SCHRAGE_Q;
        let lo = self.state % SCHRAGE_Q;
        let mut state = MULTIPLIER * lo - SCHRAGE_R * hi;
        if state <= 0 {
            state += MODULUS;
        }
        self.state = state;
        state
    }
}

impl UniformSource for ParkMillerRng {
    #[inline]
    fn next(&mut self) -> f64 {
        // state / 2^31, never exactly 0 or 1.
        const RECIPROCAL: f64 = 1.0 / ((MODULUS as f64) + 1.0);
        self.next_state() as f64 * RECIPROCAL
    }

    fn reset(&mut self, seed: u64) {
        let reduced = (seed % MODULUS as u64) as i64;
        self.seed = if reduced == 0 { 1 } else { reduced };
        self.state = self.seed;
    }

    fn skip(&mut self, count: u64) {
        for _ in 0..count {
            self.next_state();
        }
    }

    #[inline]
    fn seed(&self) -> u64 {
        self.seed as u64
    }
}
