//! Constant parameter curve implementation.

use super::ParameterCurve;
use crate::market_data::error::CurveError;
use num_traits::Float;

/// Constant-value parameter curve.
///
/// A term structure that takes the same value at every time. The workhorse
/// for flat volatility and flat rate assumptions, and the baseline the
/// simulation entry points construct from scalar inputs.
///
/// Negative values are accepted (negative-rate environments are valid
/// term structures); only non-finite values are rejected at construction.
/// Sign constraints that depend on what the curve feeds (volatility must
/// not be negative) are enforced by the consumer.
///
/// # Type Parameters
///
/// * `T` - Floating-point scalar, `f64` throughout the engine
///
/// # Example
///
/// ```
/// use mc_core::market_data::curves::{ConstantCurve, ParameterCurve};
///
/// let rate = ConstantCurve::new(0.05_f64).unwrap();
///
/// // integral is value * width, mean is the value itself
/// assert!((rate.integral(0.0, 3.0).unwrap() - 0.15).abs() < 1e-12);
/// assert_eq!(rate.mean(1.0, 4.0).unwrap(), 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCurve<T: Float> {
    /// The constant value
    value: T,
}

impl<T: Float> ConstantCurve<T> {
    /// Construct a constant curve with the given value.
    ///
    /// # Arguments
    ///
    /// * `value` - The constant value (must be finite)
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidValue` if `value` is NaN or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use mc_core::market_data::curves::ConstantCurve;
    ///
    /// let curve = ConstantCurve::new(0.2_f64).unwrap();
    /// assert_eq!(curve.value(), 0.2);
    ///
    /// assert!(ConstantCurve::new(f64::NAN).is_err());
    /// ```
    pub fn new(value: T) -> Result<Self, CurveError> {
        if !value.is_finite() {
            return Err(CurveError::InvalidValue {
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { value })
    }

    /// Return the constant value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: Float> ParameterCurve<T> for ConstantCurve<T> {
    /// Return the integral over `[t0, t1]`, which is `value * (t1 - t0)`.
    ///
    /// # Arguments
    ///
    /// * `t0` - Interval start in years
    /// * `t1` - Interval end in years (must be >= t0)
    ///
    /// # Returns
    ///
    /// * `Ok(value * (t1 - t0))` - The interval integral
    /// * `Err(CurveError::InvalidInterval)` - If t1 < t0
    fn integral(&self, t0: T, t1: T) -> Result<T, CurveError> {
        if t1 < t0 {
            return Err(CurveError::InvalidInterval {
                t0: t0.to_f64().unwrap_or(0.0),
                t1: t1.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.value * (t1 - t0))
    }

    /// Return the interval average, which is the constant value itself
    /// wherever the interval lies.
    ///
    /// # Arguments
    ///
    /// * `t0` - Interval start in years
    /// * `t1` - Interval end in years (must be > t0)
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - The constant value
    /// * `Err(CurveError::InvalidInterval)` - If t1 <= t0
    fn mean(&self, t0: T, t1: T) -> Result<T, CurveError> {
        if t1 <= t0 {
            return Err(CurveError::InvalidInterval {
                t0: t0.to_f64().unwrap_or(0.0),
                t1: t1.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.value)
    }
}
