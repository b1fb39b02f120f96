//! Core trait for accumulating simulation output.

use super::ResultsTable;

/// Sink for per-path simulation results.
///
/// A gatherer receives one discounted payoff per path and can report
/// everything it has learned so far as a [`ResultsTable`]. Decorators
/// such as [`ConvergenceTable`](super::ConvergenceTable) and
/// [`ConfidenceBands`](super::ConfidenceBands) wrap an inner gatherer,
/// forward every value to it, and append their own rows to its table.
///
/// # Contract
///
/// - `dump_one_result` is called exactly once per simulated path.
/// - `results_so_far` is non-destructive and may be called at any
///   point, including before any value has been dumped.
pub trait StatisticsGatherer {
    /// Records one discounted path payoff.
    fn dump_one_result(&mut self, value: f64);

    /// Reports the accumulated statistics as a labelled table.
    fn results_so_far(&self) -> ResultsTable;
}
