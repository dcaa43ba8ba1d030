//! Linear orchestration of the cleaning and screening stages.

use crate::coerce::NumericMarks;
use crate::dataset::{CleanedDataset, SummaryTable};
use crate::record::{RawRow, Record};

/// The batch pipeline:
///
/// `Raw → Coerced → RowFiltered → Bucketed → CleanedDataset →
/// [Summarize pass 1] → FilteredDataset → [Summarize pass 2] → Output`
///
/// Single-threaded and deterministic; every stage returns a new dataset.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pipeline {
    marks: NumericMarks,
}

/// The terminal state of one pipeline run.
///
/// `pass1` exists only to document the fences the outlier filter used; it is
/// never reported. Sinks consume `filtered` and `summary`.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub cleaned: CleanedDataset,
    pub pass1: SummaryTable,
    pub filtered: CleanedDataset,
    pub summary: SummaryTable,
}

impl Pipeline {
    pub fn new(marks: NumericMarks) -> Pipeline {
        Pipeline { marks }
    }

    /// Runs raw rows through every stage in order.
    ///
    /// Input anomalies (unparseable numerals, incomplete rows, unknown
    /// labels) resolve to row exclusion, never to an error.
    pub fn run(&self, rows: impl IntoIterator<Item = RawRow>) -> PipelineOutput {
        let records = rows
            .into_iter()
            .filter_map(|row| Record::from_raw(row, self.marks))
            .collect();
        let cleaned = CleanedDataset::new(records);

        let pass1 = cleaned.summarize();
        let filtered = cleaned.retain_within(&pass1);
        let summary = filtered.summarize();

        PipelineOutput {
            cleaned,
            pass1,
            filtered,
            summary,
        }
    }
}
