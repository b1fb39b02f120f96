//! Running mean and standard error from sufficient statistics.

use super::{ResultRow, ResultsTable, RowLabel, StatisticsGatherer};

/// Accumulates the sample mean from sufficient statistics.
///
/// Only the path count, running sum, and running sum of squares are
/// stored, so memory use is constant regardless of path count and two
/// gatherers can be merged exactly with [`absorb`](Self::absorb).
///
/// # Examples
///
/// ```
/// use mc_engine::statistics::{MeanGatherer, StatisticsGatherer};
///
/// let mut gatherer = MeanGatherer::new();
/// gatherer.dump_one_result(2.0);
/// gatherer.dump_one_result(4.0);
/// assert_eq!(gatherer.mean(), Some(3.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeanGatherer {
    count: u64,
    sum: f64,
    sum_squares: f64,
}

impl MeanGatherer {
    /// Creates an empty gatherer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values seen so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the sample mean, or `None` before the first value.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }

    /// Returns the standard error of the sample mean.
    ///
    /// The unbiased sample variance needs at least two values, so this
    /// returns `None` for fewer.
    pub fn standard_error(&self) -> Option<f64> {
        if self.count < 2 {
            return None;
        }
        let count = self.count as f64;
        // Cancellation can push the numerator slightly negative for
        // near-constant samples.
        let variance =
            ((self.sum_squares - self.sum * self.sum / count) / (count - 1.0)).max(0.0);
        Some((variance / count).sqrt())
    }

    /// Merges another gatherer into this one.
    ///
    /// The result is exactly the gatherer that would have seen both
    /// value streams, which makes sharded simulation runs combinable.
    pub fn absorb(&mut self, other: MeanGatherer) {
        self.count += other.count;
        self.sum += other.sum;
        self.sum_squares += other.sum_squares;
    }
}

impl StatisticsGatherer for MeanGatherer {
    fn dump_one_result(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.sum_squares += value * value;
    }

    fn results_so_far(&self) -> ResultsTable {
        let mut table = ResultsTable::new();
        if let Some(mean) = self.mean() {
            table.push(ResultRow::new(RowLabel::Mean, vec![mean]));
        }
        table
    }
}
