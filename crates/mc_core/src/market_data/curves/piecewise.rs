//! Piecewise-constant parameter curve implementation.

use super::ParameterCurve;
use crate::market_data::error::CurveError;
use num_traits::Float;

/// Piecewise-constant (step function) parameter curve.
///
/// The curve takes `values[i]` from `times[i]` onwards, switching at each
/// breakpoint: right-continuous steps. Before the first breakpoint the
/// curve clamps to `values[0]`, after the last it clamps to the final
/// value, so queries over any interval are well defined.
///
/// # Type Parameters
///
/// * `T` - Floating-point scalar the breakpoints and values share
///
/// # Example
///
/// ```
/// use mc_core::market_data::curves::{ParameterCurve, PiecewiseConstantCurve};
///
/// // 2% for the first year, 4% thereafter
/// let rate = PiecewiseConstantCurve::new(&[0.0_f64, 1.0], &[0.02, 0.04]).unwrap();
///
/// assert_eq!(rate.value_at(0.5), 0.02);
/// assert_eq!(rate.value_at(1.0), 0.04);
///
/// // ∫₀² = 0.02 * 1 + 0.04 * 1 = 0.06, mean = 0.03
/// assert!((rate.integral(0.0, 2.0).unwrap() - 0.06).abs() < 1e-12);
/// assert!((rate.mean(0.0, 2.0).unwrap() - 0.03).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseConstantCurve<T: Float> {
    /// Breakpoint times, strictly increasing
    times: Vec<T>,
    /// Segment values, one per breakpoint
    values: Vec<T>,
}

impl<T: Float> PiecewiseConstantCurve<T> {
    /// Construct a step curve from breakpoint times and segment values.
    ///
    /// # Arguments
    ///
    /// * `times` - Breakpoint times in years; strictly increasing, finite,
    ///   at least one
    /// * `values` - Segment values, one per breakpoint; all finite
    ///
    /// # Errors
    ///
    /// - `CurveError::InsufficientData` if `times` is empty
    /// - `CurveError::MismatchedLengths` if the slices differ in length
    /// - `CurveError::InvalidValue` if any time or value is not finite
    /// - `CurveError::UnsortedBreakpoints` if times are not strictly increasing
    ///
    /// # Example
    ///
    /// ```
    /// use mc_core::market_data::curves::PiecewiseConstantCurve;
    ///
    /// let curve = PiecewiseConstantCurve::new(&[0.0, 0.5, 1.0], &[0.15, 0.20, 0.25]);
    /// assert!(curve.is_ok());
    ///
    /// // Out-of-order breakpoints are rejected
    /// assert!(PiecewiseConstantCurve::new(&[0.5, 0.0], &[0.1, 0.2]).is_err());
    /// ```
    pub fn new(times: &[T], values: &[T]) -> Result<Self, CurveError> {
        if times.is_empty() {
            return Err(CurveError::InsufficientData { got: 0, need: 1 });
        }
        if times.len() != values.len() {
            return Err(CurveError::MismatchedLengths {
                times: times.len(),
                values: values.len(),
            });
        }
        for &t in times {
            if !t.is_finite() {
                return Err(CurveError::InvalidValue {
                    value: t.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        for &v in values {
            if !v.is_finite() {
                return Err(CurveError::InvalidValue {
                    value: v.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        for i in 1..times.len() {
            if times[i] <= times[i - 1] {
                return Err(CurveError::UnsortedBreakpoints { index: i });
            }
        }

        Ok(Self {
            times: times.to_vec(),
            values: values.to_vec(),
        })
    }

    /// Return the number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the curve has no segments. Construction guarantees at least
    /// one, so this is always false for a built curve.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Return the curve value at time `t`.
    ///
    /// Times before the first breakpoint clamp to the first value.
    #[inline]
    pub fn value_at(&self, t: T) -> T {
        match self.times.iter().rposition(|&bp| bp <= t) {
            Some(i) => self.values[i],
            None => self.values[0],
        }
    }
}

impl<T: Float> ParameterCurve<T> for PiecewiseConstantCurve<T> {
    /// Return the exact integral over `[t0, t1]`, accumulated segment by
    /// segment.
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
    fn integral(&self, t0: T, t1: T) -> Result<T, CurveError> {
        if t1 < t0 {
            return Err(CurveError::InvalidInterval {
                t0: t0.to_f64().unwrap_or(0.0),
                t1: t1.to_f64().unwrap_or(0.0),
            });
        }

        let mut total = T::zero();
        let mut left = t0;
        while left < t1 {
            let value = self.value_at(left);
            // The next breakpoint strictly beyond `left` bounds this piece.
            let next = self
                .times
                .iter()
                .copied()
                .find(|&bp| bp > left)
                .unwrap_or(t1);
            let right = next.min(t1);
            total = total + value * (right - left);
            left = right;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_step() -> PiecewiseConstantCurve<f64> {
        // 10% on [0, 1), 30% from 1 onwards
        PiecewiseConstantCurve::new(&[0.0, 1.0], &[0.1, 0.3]).unwrap()
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_single_segment() {
        let curve = PiecewiseConstantCurve::new(&[0.0], &[0.2]).unwrap();
        assert_eq!(curve.len(), 1);
        assert!(!curve.is_empty());
        assert_eq!(curve.value_at(100.0), 0.2);
    }

    #[test]
    fn test_new_empty_times() {
        let result = PiecewiseConstantCurve::<f64>::new(&[], &[]);
        assert!(matches!(
            result,
            Err(CurveError::InsufficientData { got: 0, need: 1 })
        ));
    }

    #[test]
    fn test_new_length_mismatch() {
        let result = PiecewiseConstantCurve::new(&[0.0, 1.0], &[0.1]);
        assert!(matches!(
            result,
            Err(CurveError::MismatchedLengths { times: 2, values: 1 })
        ));
    }

    #[test]
    fn test_new_unsorted_times() {
        let result = PiecewiseConstantCurve::new(&[0.0, 2.0, 1.0], &[0.1, 0.2, 0.3]);
        assert!(matches!(
            result,
            Err(CurveError::UnsortedBreakpoints { index: 2 })
        ));
    }

    #[test]
    fn test_new_duplicate_times() {
        let result = PiecewiseConstantCurve::new(&[0.0, 1.0, 1.0], &[0.1, 0.2, 0.3]);
        assert!(matches!(
            result,
            Err(CurveError::UnsortedBreakpoints { index: 2 })
        ));
    }

    #[test]
    fn test_new_non_finite_value() {
        let result = PiecewiseConstantCurve::new(&[0.0, 1.0], &[0.1, f64::NAN]);
        assert!(matches!(result, Err(CurveError::InvalidValue { .. })));
    }

    #[test]
    fn test_new_non_finite_time() {
        let result = PiecewiseConstantCurve::new(&[0.0, f64::INFINITY], &[0.1, 0.2]);
        assert!(matches!(result, Err(CurveError::InvalidValue { .. })));
    }

    // ========================================
    // Lookup Tests
    // ========================================

    #[test]
    fn test_value_at_within_segments() {
        let curve = two_step();
        assert_eq!(curve.value_at(0.0), 0.1);
        assert_eq!(curve.value_at(0.999), 0.1);
        assert_eq!(curve.value_at(1.0), 0.3);
        assert_eq!(curve.value_at(5.0), 0.3);
    }

    #[test]
    fn test_value_at_before_first_breakpoint() {
        let curve = PiecewiseConstantCurve::new(&[1.0, 2.0], &[0.1, 0.2]).unwrap();
        assert_eq!(curve.value_at(0.0), 0.1);
        assert_eq!(curve.value_at(-3.0), 0.1);
    }

    // ========================================
    // Integral Tests
    // ========================================

    #[test]
    fn test_integral_within_one_segment() {
        let curve = two_step();
        assert_relative_eq!(curve.integral(0.0, 0.5).unwrap(), 0.05, epsilon = 1e-12);
        assert_relative_eq!(curve.integral(2.0, 4.0).unwrap(), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_integral_across_breakpoint() {
        let curve = two_step();
        // 0.1 over [0.5, 1) + 0.3 over [1, 2)
        assert_relative_eq!(curve.integral(0.5, 2.0).unwrap(), 0.35, epsilon = 1e-12);
    }

    #[test]
    fn test_integral_across_several_breakpoints() {
        let curve =
            PiecewiseConstantCurve::new(&[0.0, 1.0, 2.0, 3.0], &[0.1, 0.2, 0.3, 0.4]).unwrap();
        // Full first three segments plus half of the last
        let integral = curve.integral(0.0, 3.5).unwrap();
        assert_relative_eq!(integral, 0.1 + 0.2 + 0.3 + 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_integral_zero_width() {
        let curve = two_step();
        assert_eq!(curve.integral(0.7, 0.7).unwrap(), 0.0);
    }

    #[test]
    fn test_integral_reversed_interval() {
        let curve = two_step();
        assert!(matches!(
            curve.integral(2.0, 1.0),
            Err(CurveError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_integral_starting_before_first_breakpoint() {
        let curve = PiecewiseConstantCurve::new(&[1.0], &[0.5]).unwrap();
        // Clamped to the single value everywhere
        assert_relative_eq!(curve.integral(0.0, 2.0).unwrap(), 1.0, epsilon = 1e-12);
    }

    // ========================================
    // Mean Tests
    // ========================================

    #[test]
    fn test_mean_uses_default_implementation() {
        let curve = two_step();
        // Mean over [0, 2] = (0.1 + 0.3) / 2
        assert_relative_eq!(curve.mean(0.0, 2.0).unwrap(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_zero_width() {
        let curve = two_step();
        assert!(curve.mean(1.0, 1.0).is_err());
    }

    #[test]
    fn test_mean_matches_constant_when_flat() {
        // A one-segment step curve behaves exactly like a constant curve
        let step = PiecewiseConstantCurve::new(&[0.0], &[0.25]).unwrap();
        let flat = crate::market_data::curves::ConstantCurve::new(0.25_f64).unwrap();
        for (t0, t1) in [(0.0, 1.0), (0.5, 3.0), (2.0, 2.5)] {
            assert_relative_eq!(
                step.integral(t0, t1).unwrap(),
                flat.integral(t0, t1).unwrap(),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                step.mean(t0, t1).unwrap(),
                flat.mean(t0, t1).unwrap(),
                epsilon = 1e-12
            );
        }
    }
}
