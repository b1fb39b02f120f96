//! Convergence tracking at power-of-two path counts.

use super::{MeanGatherer, ResultRow, ResultsTable, RowLabel, StatisticsGatherer};

/// Decorator that snapshots the running mean at power-of-two path
/// counts.
///
/// Every value is forwarded to the inner gatherer unchanged. On top of
/// the inner gatherer's rows, the reported table gains one
/// [`RowLabel::Snapshot`] row per threshold (1, 2, 4, 8, ...) plus a
/// terminal snapshot when the final path count is not itself a power
/// of two. Successive snapshot means halve in error roughly with each
/// doubling, which makes stalled convergence visible at a glance.
///
/// # Examples
///
/// ```
/// use mc_engine::statistics::{ConvergenceTable, MeanGatherer, StatisticsGatherer};
///
/// let mut gatherer = ConvergenceTable::new(MeanGatherer::new());
/// for value in [1.0, 2.0, 3.0] {
///     gatherer.dump_one_result(value);
/// }
///
/// let table = gatherer.results_so_far();
/// assert_eq!(table.snapshots(), vec![(1, 1.0), (2, 1.5), (3, 2.0)]);
/// assert_eq!(table.mean(), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceTable<G: StatisticsGatherer> {
    inner: G,
    tally: MeanGatherer,
    next_threshold: u64,
    snapshots: Vec<(u64, f64)>,
}

impl<G: StatisticsGatherer> ConvergenceTable<G> {
    /// Wraps an inner gatherer.
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            tally: MeanGatherer::new(),
            next_threshold: 1,
            snapshots: Vec::new(),
        }
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

impl<G: StatisticsGatherer> StatisticsGatherer for ConvergenceTable<G> {
    fn dump_one_result(&mut self, value: f64) {
        self.inner.dump_one_result(value);
        self.tally.dump_one_result(value);
        if self.tally.count() == self.next_threshold {
            if let Some(mean) = self.tally.mean() {
                self.snapshots.push((self.tally.count(), mean));
            }
            self.next_threshold *= 2;
        }
    }

    fn results_so_far(&self) -> ResultsTable {
        let mut table = ResultsTable::new();
        for &(count, mean) in &self.snapshots {
            table.push(ResultRow::new(RowLabel::Snapshot(count), vec![mean]));
        }
        // Close the table with the terminal count unless the last
        // snapshot already sits on it.
        let terminal = self.tally.count();
        if self.snapshots.last().map(|&(count, _)| count) != Some(terminal) {
            if let Some(mean) = self.tally.mean() {
                table.push(ResultRow::new(RowLabel::Snapshot(terminal), vec![mean]));
            }
        }
        table.extend(self.inner.results_so_far());
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Snapshot Tests
    // ============================================================================

    /// Verifies that snapshots land exactly on powers of two.
    #[test]
    fn test_snapshots_at_powers_of_two() {
        let mut gatherer = ConvergenceTable::new(MeanGatherer::new());
        for value in 1..=8 {
            gatherer.dump_one_result(value as f64);
        }

        let counts: Vec<u64> = gatherer
            .results_so_far()
            .snapshots()
            .iter()
            .map(|&(count, _)| count)
            .collect();
        assert_eq!(counts, vec![1, 2, 4, 8]);
    }

    /// Verifies that each snapshot records the running mean at its
    /// threshold.
    #[test]
    fn test_snapshot_means_are_running_means() {
        let mut gatherer = ConvergenceTable::new(MeanGatherer::new());
        for value in 1..=4 {
            gatherer.dump_one_result(value as f64);
        }

        // Running means of 1, 2, 3, 4 at counts 1, 2, and 4.
        let snapshots = gatherer.results_so_far().snapshots();
        assert_eq!(snapshots, vec![(1, 1.0), (2, 1.5), (4, 2.5)]);
    }

    /// Verifies the terminal snapshot when the path count is not a
    /// power of two.
    #[test]
    fn test_terminal_snapshot_off_power() {
        let mut gatherer = ConvergenceTable::new(MeanGatherer::new());
        for value in 1..=5 {
            gatherer.dump_one_result(value as f64);
        }

        let snapshots = gatherer.results_so_far().snapshots();
        assert_eq!(snapshots.len(), 4);
        assert_eq!(*snapshots.last().unwrap(), (5, 3.0));
    }

    /// Verifies that no duplicate terminal row appears when the path
    /// count lands on a power of two.
    #[test]
    fn test_no_duplicate_terminal_on_power() {
        let mut gatherer = ConvergenceTable::new(MeanGatherer::new());
        for value in 1..=4 {
            gatherer.dump_one_result(value as f64);
        }

        let counts: Vec<u64> = gatherer
            .results_so_far()
            .snapshots()
            .iter()
            .map(|&(count, _)| count)
            .collect();
        assert_eq!(counts, vec![1, 2, 4]);
    }

    /// Verifies that an untouched decorator reports an empty table.
    #[test]
    fn test_empty_table() {
        let gatherer = ConvergenceTable::new(MeanGatherer::new());
        assert!(gatherer.results_so_far().is_empty());
    }

    // ============================================================================
    // Forwarding Tests
    // ============================================================================

    /// Verifies that the inner gatherer sees every value unchanged.
    #[test]
    fn test_forwards_to_inner() {
        let values = [2.0, 4.0, 6.0, 8.0, 10.0];

        let mut bare = MeanGatherer::new();
        let mut decorated = ConvergenceTable::new(MeanGatherer::new());
        for &value in &values {
            bare.dump_one_result(value);
            decorated.dump_one_result(value);
        }

        assert_eq!(decorated.inner(), &bare);
        assert_eq!(decorated.results_so_far().mean(), bare.mean());
    }

    /// Verifies that `into_inner` recovers the wrapped gatherer.
    #[test]
    fn test_into_inner() {
        let mut decorated = ConvergenceTable::new(MeanGatherer::new());
        decorated.dump_one_result(3.0);

        let inner = decorated.into_inner();
        assert_eq!(inner.mean(), Some(3.0));
    }
}
