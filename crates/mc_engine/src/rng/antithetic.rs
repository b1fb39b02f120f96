//! Antithetic-pair decorator for uniform sources.

use super::traits::UniformSource;

/// Decorator emitting each inner draw followed by its mirror `1 - x`.
///
/// Pairs `(x, 1 - x)` are negatively correlated, which cancels
/// first-order sampling noise for monotone payoffs and halves the number
/// of underlying draws per emitted deviate. The pairing parity is
/// tracked internally, so callers interact with this exactly as with any
/// other [`UniformSource`] and need not know variance reduction is
/// active.
///
/// The mirror of a value in (0, 1) is again in (0, 1), so the decorated
/// stream keeps the open-interval guarantee of the inner source.
///
/// # Examples
///
/// ```rust
/// use mc_engine::rng::{AntitheticSampler, ParkMillerRng, UniformSource};
///
/// let mut plain = ParkMillerRng::new(7);
/// let mut paired = AntitheticSampler::new(ParkMillerRng::new(7));
///
/// let x = plain.next();
/// assert_eq!(paired.next(), x);
/// assert_eq!(paired.next(), 1.0 - x);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AntitheticSampler<G: UniformSource> {
    inner: G,
    pending_mirror: Option<f64>,
}

impl<G: UniformSource> AntitheticSampler<G> {
    /// Wraps `inner`, starting on a fresh (unmirrored) draw.
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            pending_mirror: None,
        }
    }

    /// Returns a reference to the wrapped source.
    #[inline]
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Consumes the decorator and returns the wrapped source.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: UniformSource> UniformSource for AntitheticSampler<G> {
    fn next(&mut self) -> f64 {
        if let Some(mirror) = self.pending_mirror.take() {
            return mirror;
        }
        let draw = self.inner.next();
        self.pending_mirror = Some(1.0 - draw);
        draw
    }

    fn reset(&mut self, seed: u64) {
        self.inner.reset(seed);
        self.pending_mirror = None;
    }

    /// Advances by `count` *emitted* deviates.
    ///
    /// A pending mirror is consumed first without touching the inner
    /// source; every remaining pair costs one inner draw, and an odd
    /// leftover performs the draw and leaves its mirror pending.
    fn skip(&mut self, mut count: u64) {
        if count == 0 {
            return;
        }
        if self.pending_mirror.take().is_some() {
            count -= 1;
        }
        self.inner.skip(count / 2);
        if count % 2 == 1 {
            let draw = self.inner.next();
            self.pending_mirror = Some(1.0 - draw);
        }
    }

    #[inline]
    fn seed(&self) -> u64 {
        self.inner.seed()
    }
}
