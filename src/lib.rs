//! Cleaning and box-plot screening of delinquency-status turnover data.
//!
//! The pipeline ingests raw loan/receivable rows carrying a delinquency
//! status label and three period-over-period turnover figures, coerces
//! locale-formatted numerals, drops incomplete or unclassifiable rows, and
//! screens outliers with Tukey fences computed per (bucket, period) group.
//! Fences come from the full cleaned dataset (pass 1); the reported
//! statistics are recomputed on the filtered dataset (pass 2).

pub mod coerce;
mod csv_report;
pub mod dataset;
mod error;
pub mod ingest;
pub mod pipeline;
#[cfg(feature = "plotters")]
pub mod plot;
pub mod record;
pub mod report;
pub mod stats;

pub use crate::csv_report::FileCsvReport;
pub use crate::error::{Error, Result};
pub use crate::pipeline::{Pipeline, PipelineOutput};
