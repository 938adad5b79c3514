use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

use flate2::read::GzDecoder;

mod error;
pub use self::error::ReferenceDataError;

const AGE_COLUMN: &str = "Age";
const HEIGHT_COLUMN: &str = "Height";

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Conventional file name of the reference table for this sex.
    pub fn dataset_filename(&self) -> &'static str {
        match *self {
            Sex::Male => "growthmale.csv",
            Sex::Female => "growthfemale.csv",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(value: &str) -> Result<Sex, String> {
        match value.to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(format!("unknown sex '{}'", other)),
        }
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct ReferenceRow {
    pub age: f64,
    pub height: f64,
}

/// Reads a reference table from `path`. Files ending in `.gz` are
/// decompressed while reading.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Vec<ReferenceRow>, ReferenceDataError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| ReferenceDataError::Open(path.display().to_string(), err))?;

    let reader = io::BufReader::new(file);

    debug!("Reading reference data from {}", path.display());

    match path.extension() {
        Some(extension) if extension == "gz" => parse(GzDecoder::new(reader)),
        _ => parse(reader),
    }
}

/// Parses CSV reference data with at least an `Age` and a `Height` column.
///
/// Unlike log lines, reference rows are never skipped: the first malformed
/// row fails the whole table.
pub fn parse<R: io::Read>(reader: R) -> Result<Vec<ReferenceRow>, ReferenceDataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let age_index = headers.iter().position(|name| name == AGE_COLUMN);
    let height_index = headers.iter().position(|name| name == HEIGHT_COLUMN);

    let (age_index, height_index) = match (age_index, height_index) {
        (Some(age), Some(height)) => (age, height),
        (age, height) => {
            let missing: Vec<&str> = vec![(AGE_COLUMN, age), (HEIGHT_COLUMN, height)]
                .into_iter()
                .filter(|(_, index)| index.is_none())
                .map(|(name, _)| name)
                .collect();
            return Err(ReferenceDataError::MissingColumns(missing.join(", ")));
        }
    };

    let mut rows: Vec<ReferenceRow> = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let age = parse_value(&record, age_index, AGE_COLUMN, line)?;
        if age < 0.0 {
            return Err(invalid_value(&record, age_index, AGE_COLUMN, line));
        }

        let height = parse_value(&record, height_index, HEIGHT_COLUMN, line)?;
        if height <= 0.0 {
            return Err(invalid_value(&record, height_index, HEIGHT_COLUMN, line));
        }

        rows.push(ReferenceRow { age, height });
    }

    if rows.is_empty() {
        return Err(ReferenceDataError::Empty);
    }

    info!("Loaded {} reference rows", rows.len());

    Ok(rows)
}

fn parse_value(
    record: &csv::StringRecord,
    index: usize,
    column: &'static str,
    line: u64,
) -> Result<f64, ReferenceDataError> {
    match record.get(index).map(|raw| raw.parse::<f64>()) {
        Some(Ok(value)) if value.is_finite() => Ok(value),
        _ => Err(invalid_value(record, index, column, line)),
    }
}

fn invalid_value(
    record: &csv::StringRecord,
    index: usize,
    column: &'static str,
    line: u64,
) -> ReferenceDataError {
    ReferenceDataError::InvalidValue {
        column,
        value: record.get(index).unwrap_or("").to_string(),
        line,
    }
}
