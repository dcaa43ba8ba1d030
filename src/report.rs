//! Report sinks consuming the pipeline's terminal state.

use itertools::Itertools;

use crate::dataset::{CleanedDataset, SummaryTable};

/// A sink for the pipeline's outputs. Implementations must not feed
/// anything back into the pipeline.
pub trait Report {
    /// Called with the outlier-filtered dataset.
    fn dataset_complete(&self, _dataset: &CleanedDataset) {}

    /// Called with the pass-2 summary table.
    fn summary_complete(&self, _summary: &SummaryTable) {}
}

/// Fans the pipeline output out to every configured report.
pub struct Reports {
    reports: Vec<Box<dyn Report>>,
}

impl Reports {
    pub fn new(reports: Vec<Box<dyn Report>>) -> Reports {
        Reports { reports }
    }
}

impl Report for Reports {
    fn dataset_complete(&self, dataset: &CleanedDataset) {
        for report in &self.reports {
            report.dataset_complete(dataset);
        }
    }

    fn summary_complete(&self, summary: &SummaryTable) {
        for report in &self.reports {
            report.summary_complete(summary);
        }
    }
}

/// Prints one fixed-width table per bucket on stdout, rows sorted by period.
pub struct CliReport;

impl Report for CliReport {
    fn summary_complete(&self, summary: &SummaryTable) {
        for (bucket, rows) in &summary.groups().iter().group_by(|group| group.bucket) {
            println!("{}", bucket);
            println!(
                "{:>14} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>6}",
                "period", "min", "lo fence", "q1", "median", "q3", "hi fence", "max", "n"
            );
            for group in rows {
                let s = &group.stats;
                println!(
                    "{:>14} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>6}",
                    group.period.name(),
                    short(s.min),
                    short(s.lower_fence),
                    short(s.q1),
                    short(s.median),
                    short(s.q3),
                    short(s.upper_fence),
                    short(s.max),
                    s.n,
                );
            }
            println!();
        }
    }
}

pub fn short(n: f64) -> String {
    let abs = n.abs();
    if abs < 10.0 {
        format!("{:.4}", n)
    } else if abs < 100.0 {
        format!("{:.3}", n)
    } else if abs < 1000.0 {
        format!("{:.2}", n)
    } else if abs < 10000.0 {
        format!("{:.1}", n)
    } else {
        format!("{:.0}", n)
    }
}
