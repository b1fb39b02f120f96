//! Confidence interval reporting around the running mean.

use super::{MeanGatherer, ResultRow, ResultsTable, RowLabel, StatisticsGatherer};
use crate::error::SimulationError;

/// Multiplier for a two-sided 95% confidence interval under the
/// central limit theorem.
pub const DEFAULT_CONFIDENCE_MULTIPLIER: f64 = 1.96;

/// Decorator that appends a confidence interval around the sample
/// mean.
///
/// Every value is forwarded to the inner gatherer unchanged. The
/// reported table gains one [`RowLabel::ConfidenceInterval`] row
/// holding `mean - z * se` and `mean + z * se`, where `se` is the
/// standard error of the mean and `z` the configured multiplier.
/// With a single path the standard error is undefined and the interval
/// degenerates to the mean itself; with no paths the row is omitted.
///
/// # Examples
///
/// ```
/// use mc_engine::statistics::{ConfidenceBands, MeanGatherer, StatisticsGatherer};
///
/// let mut gatherer = ConfidenceBands::new(MeanGatherer::new());
/// for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
///     gatherer.dump_one_result(value);
/// }
///
/// let (lower, upper) = gatherer.results_so_far().confidence_interval().unwrap();
/// assert!(lower < 3.0 && 3.0 < upper);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBands<G: StatisticsGatherer> {
    inner: G,
    tally: MeanGatherer,
    multiplier: f64,
}

impl<G: StatisticsGatherer> ConfidenceBands<G> {
    /// Wraps an inner gatherer with the default 95% multiplier.
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            tally: MeanGatherer::new(),
            multiplier: DEFAULT_CONFIDENCE_MULTIPLIER,
        }
    }

    /// Wraps an inner gatherer with an explicit multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidConfidenceLevel`] unless the
    /// multiplier is finite and strictly positive.
    pub fn with_multiplier(inner: G, multiplier: f64) -> Result<Self, SimulationError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(SimulationError::InvalidConfidenceLevel { z: multiplier });
        }
        Ok(Self {
            inner,
            tally: MeanGatherer::new(),
            multiplier,
        })
    }

    /// Returns the interval multiplier.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Returns a reference to the inner gatherer.
    #[inline]
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Consumes the decorator and returns the inner gatherer.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: StatisticsGatherer> StatisticsGatherer for ConfidenceBands<G> {
    fn dump_one_result(&mut self, value: f64) {
        self.inner.dump_one_result(value);
        self.tally.dump_one_result(value);
    }

    fn results_so_far(&self) -> ResultsTable {
        let mut table = self.inner.results_so_far();
        if let Some(mean) = self.tally.mean() {
            let standard_error = self.tally.standard_error().unwrap_or(0.0);
            let half_width = self.multiplier * standard_error;
            table.push(ResultRow::new(
                RowLabel::ConfidenceInterval,
                vec![mean - half_width, mean + half_width],
            ));
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ============================================================================
    // Construction Tests
    // ============================================================================

    /// Verifies the default multiplier.
    #[test]
    fn test_default_multiplier() {
        let gatherer = ConfidenceBands::new(MeanGatherer::new());
        assert_eq!(gatherer.multiplier(), 1.96);
    }

    /// Verifies that non-positive or non-finite multipliers are
    /// rejected.
    #[test]
    fn test_rejects_invalid_multiplier() {
        for multiplier in [0.0, -1.96, f64::NAN, f64::INFINITY] {
            let result = ConfidenceBands::with_multiplier(MeanGatherer::new(), multiplier);
            assert!(matches!(
                result,
                Err(SimulationError::InvalidConfidenceLevel { .. })
            ));
        }
    }

    // ============================================================================
    // Interval Tests
    // ============================================================================

    /// Verifies the interval against hand-computed bounds.
    ///
    /// For 1..=5 the mean is 3 and the standard error sqrt(0.5), so
    /// the 95% interval is 3 -/+ 1.96 * sqrt(0.5).
    #[test]
    fn test_interval_bounds() {
        let mut gatherer = ConfidenceBands::new(MeanGatherer::new());
        for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
            gatherer.dump_one_result(value);
        }

        let (lower, upper) = gatherer.results_so_far().confidence_interval().unwrap();
        let half_width = 1.96 * 0.5_f64.sqrt();
        assert_relative_eq!(lower, 3.0 - half_width, epsilon = 1e-12);
        assert_relative_eq!(upper, 3.0 + half_width, epsilon = 1e-12);
    }

    /// Verifies that a single path degenerates to a zero-width
    /// interval.
    #[test]
    fn test_single_path_degenerate_interval() {
        let mut gatherer = ConfidenceBands::new(MeanGatherer::new());
        gatherer.dump_one_result(7.0);

        assert_eq!(
            gatherer.results_so_far().confidence_interval(),
            Some((7.0, 7.0))
        );
    }

    /// Verifies that no interval row appears before the first path.
    #[test]
    fn test_empty_has_no_interval() {
        let gatherer = ConfidenceBands::new(MeanGatherer::new());
        assert_eq!(gatherer.results_so_far().confidence_interval(), None);
    }

    /// Verifies that a larger multiplier widens the band.
    #[test]
    fn test_wider_multiplier_widens_band() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];

        let mut narrow = ConfidenceBands::with_multiplier(MeanGatherer::new(), 1.0).unwrap();
        let mut wide = ConfidenceBands::with_multiplier(MeanGatherer::new(), 2.58).unwrap();
        for &value in &values {
            narrow.dump_one_result(value);
            wide.dump_one_result(value);
        }

        let (narrow_lower, narrow_upper) =
            narrow.results_so_far().confidence_interval().unwrap();
        let (wide_lower, wide_upper) = wide.results_so_far().confidence_interval().unwrap();
        assert!(wide_lower < narrow_lower);
        assert!(narrow_upper < wide_upper);
    }

    // ============================================================================
    // Forwarding Tests
    // ============================================================================

    /// Verifies that the mean row of the inner gatherer survives
    /// decoration and precedes the interval row.
    #[test]
    fn test_inner_rows_precede_interval() {
        let mut gatherer = ConfidenceBands::new(MeanGatherer::new());
        gatherer.dump_one_result(2.0);
        gatherer.dump_one_result(4.0);

        let table = gatherer.results_so_far();
        assert_eq!(table.rows()[0].label(), RowLabel::Mean);
        assert_eq!(table.rows()[1].label(), RowLabel::ConfidenceInterval);
        assert_eq!(table.mean(), Some(3.0));
    }
}
