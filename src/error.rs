use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for turnover-screen.
///
/// Input anomalies (unparseable numerals, unknown labels) never surface
/// here; they resolve to row exclusion inside the pipeline. Only surface
/// failures of the input/output files reach the caller.
#[derive(Debug)]
pub enum Error {
    AccessError { path: PathBuf, inner: io::Error },
    CsvError(csv::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AccessError { path, inner } => {
                write!(f, "Failed to access file {:?}: {}", path, inner)
            }
            Error::CsvError(inner) => write!(f, "CSV error: {}", inner),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::AccessError { inner, .. } => Some(inner),
            Error::CsvError(inner) => Some(inner),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(inner: csv::Error) -> Error {
        Error::CsvError(inner)
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;
