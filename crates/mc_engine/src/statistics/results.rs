//! Labelled result tables produced by statistics gatherers.

use std::fmt;

/// Label attached to one row of a [`ResultsTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLabel {
    /// Running mean over all paths seen so far.
    Mean,
    /// Running mean recorded after the given number of paths.
    Snapshot(u64),
    /// Lower and upper bound of a confidence interval around the mean.
    ConfidenceInterval,
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowLabel::Mean => write!(f, "mean"),
            RowLabel::Snapshot(count) => write!(f, "mean[{}]", count),
            RowLabel::ConfidenceInterval => write!(f, "interval"),
        }
    }
}

/// One labelled row of numerical output.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    label: RowLabel,
    values: Vec<f64>,
}

impl ResultRow {
    /// Creates a row from a label and its values.
    pub fn new(label: RowLabel, values: Vec<f64>) -> Self {
        Self { label, values }
    }

    /// Returns the row label.
    #[inline]
    pub fn label(&self) -> RowLabel {
        self.label
    }

    /// Returns the row values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Ordered collection of labelled result rows.
///
/// Gatherer decorators build the table outside-in: each decorator
/// emits its own rows and extends the table with whatever its inner
/// gatherer reports. The labelled accessors ([`mean`](Self::mean),
/// [`confidence_interval`](Self::confidence_interval),
/// [`snapshots`](Self::snapshots)) look rows up by label so callers
/// never depend on row positions.
///
/// # Examples
///
/// ```
/// use mc_engine::statistics::{ResultRow, ResultsTable, RowLabel};
///
/// let mut table = ResultsTable::new();
/// table.push(ResultRow::new(RowLabel::Mean, vec![10.45]));
/// assert_eq!(table.mean(), Some(10.45));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    rows: Vec<ResultRow>,
}

impl ResultsTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one row.
    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    /// Appends every row of another table, preserving order.
    pub fn extend(&mut self, other: ResultsTable) {
        self.rows.extend(other.rows);
    }

    /// Returns all rows in insertion order.
    #[inline]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the value of the [`RowLabel::Mean`] row, if present.
    pub fn mean(&self) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.label() == RowLabel::Mean)
            .and_then(|row| row.values().first().copied())
    }

    /// Returns the `(lower, upper)` bounds of the
    /// [`RowLabel::ConfidenceInterval`] row, if present.
    pub fn confidence_interval(&self) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .find(|row| row.label() == RowLabel::ConfidenceInterval)
            .and_then(|row| match row.values() {
                [lower, upper] => Some((*lower, *upper)),
                _ => None,
            })
    }

    /// Returns all `(path count, running mean)` snapshot rows in
    /// insertion order.
    pub fn snapshots(&self) -> Vec<(u64, f64)> {
        self.rows
            .iter()
            .filter_map(|row| match row.label() {
                RowLabel::Snapshot(count) => row.values().first().map(|&mean| (count, mean)),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for ResultsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            write!(f, "{:<14}", row.label().to_string())?;
            for value in row.values() {
                write!(f, " {:12.6}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
