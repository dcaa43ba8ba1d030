//! Locale-aware numeric coercion.
//!
//! The source tables carry turnover figures as numerals formatted with `.`
//! as the grouping mark and `,` as the decimal mark (`"1.234,56"` is
//! 1234.56). Coercion is a pure function parameterized by the two marks; no
//! process-wide locale state is consulted.

use crate::record::RawValue;

/// Grouping and decimal marks used by the source locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumericMarks {
    pub group: char,
    pub decimal: char,
}

impl Default for NumericMarks {
    fn default() -> NumericMarks {
        NumericMarks {
            group: '.',
            decimal: ',',
        }
    }
}

/// Coerces one raw cell to a strictly positive turnover value.
///
/// Numbers pass through untouched; text is parsed with the given marks.
/// Unparseable text and non-positive or non-finite results degrade to `None`
/// rather than erroring; disposition of such cells is the row filter's call.
pub fn coerce(value: &RawValue, marks: NumericMarks) -> Option<f64> {
    let parsed = match value {
        RawValue::Number(x) => Some(*x),
        RawValue::Text(s) => parse_localized(s, marks),
    };

    // Non-positive turnover is missing data, not a valid zero
    parsed.filter(|&x| x.is_finite() && x > 0.)
}

/// Parses a localized numeral like `"1.234,56"` into `1234.56`.
///
/// Grouping marks are stripped, the decimal mark becomes `.` and the rest
/// goes through the standard float parser. Anything that parser rejects
/// (including the missing-value sentinels `""`, `" "`, `"NULL"`, `"NA"`)
/// yields `None`.
pub fn parse_localized(s: &str, marks: NumericMarks) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(s.len());
    for c in s.chars() {
        if c == marks.group {
            continue;
        } else if c == marks.decimal {
            normalized.push('.');
        } else {
            normalized.push(c);
        }
    }

    normalized.parse().ok()
}
