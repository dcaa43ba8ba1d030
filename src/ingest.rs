//! The external row source: CSV ingestion.
//!
//! Only the surface can fail here (unreadable file, malformed CSV framing);
//! cell-level anomalies are deferred to coercion and the row filter.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::RawRow;

/// Reads all raw rows from a CSV source with a header row.
pub fn read_rows<R: Read>(source: R) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Reads all raw rows from a CSV file on disk.
pub fn read_rows_from_path(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|inner| Error::AccessError {
        path: path.to_owned(),
        inner,
    })?;
    read_rows(file)
}

#[cfg(test)]
mod test {
    use super::read_rows;
    use crate::record::RawValue;

    #[test]
    fn reads_headers_and_rows() {
        let csv = "\
ID,CATEGORY_LABEL,TURNOVER_TWO_YEARS_AGO,TURNOVER_PREVIOUS_YEAR,TURNOVER_YEAR_SIGNED
1,30dpd,\"1.234,56\",200,300
2,Προσωρινή,100,NULL,300
";
        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "1");
        assert_eq!(rows[0].category_label, "30dpd");
        match rows[1].turnover_previous_year {
            Some(RawValue::Text(ref s)) => assert_eq!(s, "NULL"),
            ref other => panic!("expected text cell, got {:?}", other),
        }
    }

    #[test]
    fn lowercase_headers_are_accepted() {
        let csv = "\
id,category_label,turnover_two_years_ago,turnover_previous_year,turnover_year_signed
1,30dpd,100,200,300
";
        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category_label, "30dpd");
    }

    #[test]
    fn malformed_framing_is_an_error() {
        let csv = "\
ID,CATEGORY_LABEL,TURNOVER_TWO_YEARS_AGO,TURNOVER_PREVIOUS_YEAR,TURNOVER_YEAR_SIGNED
1,30dpd,100
";
        assert!(read_rows(csv.as_bytes()).is_err());
    }
}
