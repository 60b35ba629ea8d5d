//! CSV loading for feature tables.

use std::io::Read;
use std::path::Path;

use super::frame::parse_cell;
use super::{DatasetError, FeatureFrame};

impl FeatureFrame {
    /// Load a frame from a CSV file with a header row
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Load a frame from any CSV source with a header row.
    ///
    /// Every cell must be numeric or a missing-value marker (empty, `NA`,
    /// `NaN`, `null`, `None`).
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
        let mut columns: Vec<Vec<Option<f64>>> = vec![Vec::new(); headers.len()];

        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            for (idx, name) in headers.iter().enumerate() {
                let raw = record.get(idx).unwrap_or("");
                let cell = parse_cell(raw).map_err(|()| DatasetError::NonNumeric {
                    column: name.clone(),
                    row,
                    value: raw.to_string(),
                })?;
                columns[idx].push(cell);
            }
        }

        Self::from_columns(headers.into_iter().zip(columns).collect())
    }
}
