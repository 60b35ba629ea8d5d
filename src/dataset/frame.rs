//! Column-oriented feature table.

use std::collections::HashSet;

use serde_json::Value;

use super::DatasetError;

/// One row of a JSON payload: feature name -> value
pub type Record = serde_json::Map<String, Value>;

/// A named column of optional observations
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureColumn {
    /// Feature name
    pub name: String,
    /// Cell values; `None` or NaN marks a missing observation
    pub values: Vec<Option<f64>>,
}

impl FeatureColumn {
    /// Observed values with missing cells dropped
    pub fn observed(&self) -> Vec<f64> {
        self.values.iter().filter_map(|v| v.filter(|x| !x.is_nan())).collect()
    }
}

/// Immutable column-oriented table of numeric features
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureFrame {
    columns: Vec<FeatureColumn>,
    n_rows: usize,
}

impl FeatureFrame {
    /// Create an empty frame (no rows, no columns)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from named columns of equal length
    pub fn from_columns(columns: Vec<(String, Vec<Option<f64>>)>) -> Result<Self, DatasetError> {
        let n_rows = columns.first().map_or(0, |(_, values)| values.len());
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(columns.len());

        for (name, values) in columns {
            if !seen.insert(name.clone()) {
                return Err(DatasetError::DuplicateColumn(name));
            }
            if values.len() != n_rows {
                return Err(DatasetError::LengthMismatch {
                    column: name,
                    expected: n_rows,
                    actual: values.len(),
                });
            }
            out.push(FeatureColumn { name, values });
        }

        Ok(Self { columns: out, n_rows })
    }

    /// Build a frame from row-oriented JSON records.
    ///
    /// Columns are ordered by first appearance. A key absent from a row, a
    /// `null`, or a string such as `"NaN"` becomes a missing cell. Numeric
    /// strings are parsed; any other value is rejected.
    pub fn from_records(records: &[Record]) -> Result<Self, DatasetError> {
        let mut names: Vec<String> = Vec::new();
        let mut seen = HashSet::new();
        for record in records {
            for key in record.keys() {
                if seen.insert(key.as_str()) {
                    names.push(key.clone());
                }
            }
        }

        let mut columns: Vec<FeatureColumn> = names
            .into_iter()
            .map(|name| FeatureColumn { name, values: Vec::with_capacity(records.len()) })
            .collect();

        for (row, record) in records.iter().enumerate() {
            for column in &mut columns {
                let cell = match record.get(&column.name) {
                    None | Some(Value::Null) => None,
                    Some(Value::Number(n)) => n.as_f64(),
                    Some(Value::String(s)) => parse_cell(s).map_err(|()| {
                        DatasetError::NonNumeric {
                            column: column.name.clone(),
                            row,
                            value: s.clone(),
                        }
                    })?,
                    Some(other) => {
                        return Err(DatasetError::NonNumeric {
                            column: column.name.clone(),
                            row,
                            value: other.to_string(),
                        })
                    }
                };
                column.values.push(cell);
            }
        }

        Ok(Self { columns, n_rows: records.len() })
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Whether the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Column names in order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// All columns in order
    pub fn columns(&self) -> &[FeatureColumn] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&FeatureColumn> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Parse a textual cell. Empty and NA-style markers are missing values.
pub(crate) fn parse_cell(raw: &str) -> Result<Option<f64>, ()> {
    let trimmed = raw.trim();
    match trimmed {
        "" | "NA" | "N/A" | "NaN" | "nan" | "null" | "None" => Ok(None),
        _ => trimmed.parse::<f64>().map(Some).map_err(|_| ()),
    }
}
