//! The typed data model: reporting periods, delinquency buckets, raw input
//! rows and fully cleaned records.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde_derive::Deserialize;

use crate::coerce::{self, NumericMarks};

/// The three turnover reporting windows, in display order.
///
/// The third window ("year signed") is the current year's turnover as of the
/// signing date of the extract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    TwoYearsAgo,
    PreviousYear,
    CurrentYear,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::TwoYearsAgo, Period::PreviousYear, Period::CurrentYear];

    pub fn name(self) -> &'static str {
        match self {
            Period::TwoYearsAgo => "two_years_ago",
            Period::PreviousYear => "previous_year",
            Period::CurrentYear => "current_year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A delinquency-status bucket: a closed, ordered enumeration. The order is
/// significant for display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    ThirtyDpd,
    Provisional,
    Final,
    PreTermination,
}

lazy_static! {
    static ref LABEL_TABLE: HashMap<&'static str, Bucket> = {
        let mut table = HashMap::new();
        for &bucket in &Bucket::ALL {
            table.insert(bucket.label(), bucket);
        }
        table
    };
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [
        Bucket::ThirtyDpd,
        Bucket::Provisional,
        Bucket::Final,
        Bucket::PreTermination,
    ];

    /// The raw label this bucket is keyed by in the source data.
    pub fn label(self) -> &'static str {
        match self {
            Bucket::ThirtyDpd => "30dpd",
            Bucket::Provisional => "Προσωρινή",
            Bucket::Final => "Οριστική",
            Bucket::PreTermination => "Προ-καταγγελία",
        }
    }

    /// Maps a trimmed label to its bucket by exact, case-sensitive string
    /// equality. Unmatched labels (noise in the raw data) yield `None` and
    /// the row is silently excluded.
    pub fn classify(label: &str) -> Option<Bucket> {
        LABEL_TABLE.get(label).copied()
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One raw cell: numbers pass through coercion untouched, text goes through
/// the locale parser.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

/// One input row as read from the source table.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "ID", alias = "id")]
    pub id: String,
    #[serde(rename = "CATEGORY_LABEL", alias = "category_label")]
    pub category_label: String,
    #[serde(rename = "TURNOVER_TWO_YEARS_AGO", alias = "turnover_two_years_ago")]
    pub turnover_two_years_ago: Option<RawValue>,
    #[serde(rename = "TURNOVER_PREVIOUS_YEAR", alias = "turnover_previous_year")]
    pub turnover_previous_year: Option<RawValue>,
    #[serde(rename = "TURNOVER_YEAR_SIGNED", alias = "turnover_year_signed")]
    pub turnover_year_signed: Option<RawValue>,
}

/// A fully cleaned record: known bucket and a strictly positive turnover
/// triple, indexed by [`Period`].
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub id: String,
    pub bucket: Bucket,
    pub turnover: [f64; 3],
}

impl Record {
    /// Coerces, filters and classifies one raw row.
    ///
    /// Returns `None` when the trimmed label is empty or unknown, or when
    /// any of the three turnover cells is missing after coercion. Rows are
    /// kept or dropped whole so the three-period comparison stays paired.
    pub fn from_raw(row: RawRow, marks: NumericMarks) -> Option<Record> {
        let label = row.category_label.trim();
        if label.is_empty() {
            return None;
        }
        let bucket = Bucket::classify(label)?;

        let turnover = [
            coerce::coerce(row.turnover_two_years_ago.as_ref()?, marks)?,
            coerce::coerce(row.turnover_previous_year.as_ref()?, marks)?,
            coerce::coerce(row.turnover_year_signed.as_ref()?, marks)?,
        ];

        Some(Record {
            id: row.id,
            bucket,
            turnover,
        })
    }

    pub fn value(&self, period: Period) -> f64 {
        self.turnover[period as usize]
    }
}
