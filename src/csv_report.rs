use std::io::Write;
use std::path::{Path, PathBuf};

use csv::Writer;
use serde_derive::Serialize;

use crate::dataset::{CleanedDataset, SummaryTable};
use crate::error::{Error, Result};
use crate::report::Report;

#[derive(Serialize)]
struct LongCsvRow<'a> {
    bucket: &'a str,
    period: &'a str,
    turnover_value: f64,
}

#[derive(Serialize)]
struct SummaryCsvRow<'a> {
    bucket: &'a str,
    period: &'a str,
    min: f64,
    lower_fence: f64,
    q1: f64,
    median: f64,
    q3: f64,
    upper_fence: f64,
    max: f64,
    n: usize,
}

/// Writes the pipeline outputs as CSV files under one output directory:
/// `cleaned_long.csv` for the long-format dataset and `summary.csv` for the
/// per-group statistics.
pub struct FileCsvReport {
    output_directory: PathBuf,
}

impl FileCsvReport {
    pub fn new<P: Into<PathBuf>>(output_directory: P) -> FileCsvReport {
        FileCsvReport {
            output_directory: output_directory.into(),
        }
    }

    pub fn write_long_format(&self, dataset: &CleanedDataset) -> Result<()> {
        let path = self.output_directory.join("cleaned_long.csv");
        let mut writer = Writer::from_path(&path)?;
        for row in dataset.long_rows() {
            writer.serialize(LongCsvRow {
                bucket: row.bucket.label(),
                period: row.period.name(),
                turnover_value: row.value,
            })?;
        }
        flush(writer, &path)
    }

    pub fn write_summary(&self, summary: &SummaryTable) -> Result<()> {
        let path = self.output_directory.join("summary.csv");
        let mut writer = Writer::from_path(&path)?;
        for group in summary.groups() {
            let s = &group.stats;
            writer.serialize(SummaryCsvRow {
                bucket: group.bucket.label(),
                period: group.period.name(),
                min: s.min,
                lower_fence: s.lower_fence,
                q1: s.q1,
                median: s.median,
                q3: s.q3,
                upper_fence: s.upper_fence,
                max: s.max,
                n: s.n,
            })?;
        }
        flush(writer, &path)
    }
}

impl Report for FileCsvReport {
    fn dataset_complete(&self, dataset: &CleanedDataset) {
        log_if_err(self.write_long_format(dataset));
    }

    fn summary_complete(&self, summary: &SummaryTable) {
        log_if_err(self.write_summary(summary));
    }
}

fn log_if_err(result: Result<()>) {
    if let Err(e) = result {
        eprintln!("error: {}", e);
    }
}

fn flush<W: Write>(mut writer: Writer<W>, path: &Path) -> Result<()> {
    writer.flush().map_err(|inner| Error::AccessError {
        path: path.to_owned(),
        inner,
    })
}
