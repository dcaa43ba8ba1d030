//! Immutable datasets and the per-group summarize/filter operations.
//!
//! Each stage of the pipeline produces a fresh dataset; nothing is mutated
//! in place, which guarantees that pass-1 statistics are computed strictly
//! before any outlier removal happens.

use std::collections::BTreeMap;

use crate::record::{Bucket, Period, Record};
use crate::stats::tukey::DistributionStats;
use crate::stats::Sample;

/// The record collection after coercion, row filtering and bucketing.
#[derive(Clone, Debug, Default)]
pub struct CleanedDataset {
    records: Vec<Record>,
}

impl CleanedDataset {
    pub fn new(records: Vec<Record>) -> CleanedDataset {
        CleanedDataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Groups turnover values by (bucket, period). The map is keyed by the
    /// ordered enums, so iteration follows bucket then period display order.
    fn group_values(&self) -> BTreeMap<(Bucket, Period), Vec<f64>> {
        let mut groups = BTreeMap::new();
        for record in &self.records {
            for &period in &Period::ALL {
                groups
                    .entry((record.bucket, period))
                    .or_insert_with(Vec::new)
                    .push(record.value(period));
            }
        }
        groups
    }

    /// Reduces every (bucket, period) group to its box-plot statistics.
    pub fn summarize(&self) -> SummaryTable {
        let groups = self
            .group_values()
            .iter()
            .map(|(&(bucket, period), values)| GroupStats {
                bucket,
                period,
                // NB groups are keyed by records actually present, so every
                // sample here is non-empty
                stats: DistributionStats::from_sample(Sample::new(values)),
            })
            .collect();

        SummaryTable { groups }
    }

    /// Single-pass outlier filter.
    ///
    /// A record survives only if, for every period, its value lies inside
    /// its bucket's fences for that period, both bounds inclusive. The three
    /// periods are independent predicates combined with AND. Fences are
    /// taken from `fences` as given; nothing is recomputed or iterated.
    pub fn retain_within(&self, fences: &SummaryTable) -> CleanedDataset {
        let records = self
            .records
            .iter()
            .filter(|record| {
                Period::ALL.iter().all(|&period| {
                    let stats = fences
                        .get(record.bucket, period)
                        // NB unreachable when `fences` was computed from a
                        // dataset containing this record's bucket
                        .unwrap_or_else(|| unreachable!());
                    stats.contains(record.value(period))
                })
            })
            .cloned()
            .collect();

        CleanedDataset::new(records)
    }

    /// On-demand long-format view: one `(bucket, period, value)` row per
    /// record per period, in record order then period order.
    pub fn long_rows(&self) -> impl Iterator<Item = LongRow> + '_ {
        self.records.iter().flat_map(|record| {
            Period::ALL.iter().map(move |&period| LongRow {
                bucket: record.bucket,
                period,
                value: record.value(period),
            })
        })
    }
}

/// One row of the long-format view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongRow {
    pub bucket: Bucket,
    pub period: Period,
    pub value: f64,
}

/// Statistics for one (bucket, period) group.
#[derive(Clone, Copy, Debug)]
pub struct GroupStats {
    pub bucket: Bucket,
    pub period: Period,
    pub stats: DistributionStats<f64>,
}

/// Per-group statistics, sorted by bucket then period enumeration order.
#[derive(Clone, Debug)]
pub struct SummaryTable {
    groups: Vec<GroupStats>,
}

impl SummaryTable {
    pub fn groups(&self) -> &[GroupStats] {
        &self.groups
    }

    pub fn get(&self, bucket: Bucket, period: Period) -> Option<&DistributionStats<f64>> {
        self.groups
            .iter()
            .find(|group| group.bucket == bucket && group.period == period)
            .map(|group| &group.stats)
    }
}
