//! Parameter curve trait definition.

use crate::market_data::error::CurveError;
use num_traits::Float;

/// Generic term-structure trait for interval integrals and means.
///
/// A parameter curve is a function of time (a volatility or a rate term
/// structure) queried only through interval aggregates, so a constant
/// curve and a genuinely time-varying curve present the same interface
/// and the simulation driver never special-cases either.
///
/// # Contract
///
/// - `integral(t0, t1)` returns ∫ₜ₀^ₜ₁ f(t) dt; requires `t1 >= t0`
///   (a zero-width interval integrates to zero)
/// - `mean(t0, t1)` returns the interval average
///   `integral(t0, t1) / (t1 - t0)`; requires `t1 > t0`
///
/// # Example
///
/// ```
/// use mc_core::market_data::curves::{ConstantCurve, ParameterCurve};
///
/// let curve = ConstantCurve::new(0.05_f64).unwrap();
///
/// assert_eq!(curve.integral(0.0, 2.0).unwrap(), 0.10);
/// assert_eq!(curve.mean(0.0, 2.0).unwrap(), 0.05);
///
/// // Reversed intervals are rejected
/// assert!(curve.integral(2.0, 1.0).is_err());
/// ```
pub trait ParameterCurve<T: Float> {
    /// Return the integral of the curve over `[t0, t1]`.
    ///
    /// # Arguments
    ///
    /// * `t0` - Interval start in years
    /// * `t1` - Interval end in years (must be >= t0)
    ///
    /// # Returns
    ///
    /// * `Ok(∫ f dt)` - The interval integral
    /// * `Err(CurveError::InvalidInterval)` - If t1 < t0
    fn integral(&self, t0: T, t1: T) -> Result<T, CurveError>;

    /// Return the average value of the curve over `[t0, t1]`.
    ///
    /// # Arguments
    ///
    /// * `t0` - Interval start in years
    /// * `t1` - Interval end in years (must be > t0)
    ///
    /// # Returns
    ///
    /// * `Ok(mean)` - The interval average
    /// * `Err(CurveError::InvalidInterval)` - If t1 <= t0
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// mean(t0, t1) = integral(t0, t1) / (t1 - t0)
    /// ```
    fn mean(&self, t0: T, t1: T) -> Result<T, CurveError> {
        let width = t1 - t0;
        if width <= T::zero() {
            return Err(CurveError::InvalidInterval {
                t0: t0.to_f64().unwrap_or(0.0),
                t1: t1.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.integral(t0, t1)? / width)
    }
}
