//! Statistics gatherers for simulation output.
//!
//! The simulation loop hands each discounted path payoff to a
//! [`StatisticsGatherer`] and never decides itself what to report.
//! Gatherers compose as decorators: [`MeanGatherer`] accumulates the
//! sample mean from sufficient statistics, while [`ConvergenceTable`]
//! and [`ConfidenceBands`] wrap any gatherer, forward every value
//! unchanged, and append their own rows to the reported
//! [`ResultsTable`].
//!
//! ## Design Rationale
//!
//! - **Separation of concerns**: pricing code produces numbers, the
//!   gatherer stack decides which statistics to keep.
//! - **Composability**: decorators stack in any order and each layer
//!   owns exactly one reporting concern.
//! - **Constant memory**: every gatherer stores sufficient statistics
//!   rather than the path values themselves.
//!
//! ## Module Structure
//!
//! - `traits`: The [`StatisticsGatherer`] trait
//! - `results`: [`ResultsTable`] with labelled rows
//! - `mean`: [`MeanGatherer`] sample mean and standard error
//! - `convergence`: [`ConvergenceTable`] power-of-two snapshots
//! - `confidence`: [`ConfidenceBands`] interval around the mean
//!
//! ## Usage Example
//!
//! ```
//! use mc_engine::statistics::{
//!     ConfidenceBands, ConvergenceTable, MeanGatherer, StatisticsGatherer,
//! };
//!
//! let mut gatherer = ConvergenceTable::new(ConfidenceBands::new(MeanGatherer::new()));
//! for value in [9.0, 10.0, 11.0] {
//!     gatherer.dump_one_result(value);
//! }
//!
//! let table = gatherer.results_so_far();
//! assert_eq!(table.mean(), Some(10.0));
//! let (lower, upper) = table.confidence_interval().unwrap();
//! assert!(lower <= 10.0 && 10.0 <= upper);
//! ```

mod confidence;
mod convergence;
mod mean;
mod results;
mod traits;

pub use confidence::{ConfidenceBands, DEFAULT_CONFIDENCE_MULTIPLIER};
pub use convergence::ConvergenceTable;
pub use mean::MeanGatherer;
pub use results::{ResultRow, ResultsTable, RowLabel};
pub use traits::StatisticsGatherer;
