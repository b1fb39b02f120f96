//! Numerical routines shared across the workspace.
//!
//! This module provides:
//! - [`distributions`]: Standard normal CDF, PDF, and inverse CDF

pub mod distributions;
