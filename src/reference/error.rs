use std::io;

use failure::Fail;

/// Reasons a reference table cannot be used. All of them abort before any
/// query runs.
#[derive(Debug, Fail)]
pub enum ReferenceDataError {
    #[fail(display = "Cannot open reference data {}: {}", _0, _1)]
    Open(String, #[cause] io::Error),

    #[fail(display = "Unreadable reference data: {}", _0)]
    Csv(#[cause] csv::Error),

    #[fail(display = "Reference data is missing required columns: {}", _0)]
    MissingColumns(String),

    #[fail(display = "Invalid {} value {:?} on line {}", column, value, line)]
    InvalidValue {
        column: &'static str,
        value: String,
        line: u64,
    },

    #[fail(display = "Reference data contains no rows")]
    Empty,
}

impl From<csv::Error> for ReferenceDataError {
    fn from(err: csv::Error) -> ReferenceDataError {
        ReferenceDataError::Csv(err)
    }
}
