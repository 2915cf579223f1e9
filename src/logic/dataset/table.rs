//! Client feature table
//!
//! CSV-backed table indexed by the client identifier column. The decision
//! threshold travels redundantly on every row of the file; it is read once
//! from the first row and the column is dropped before the table is held in
//! memory, so no lookup ever exposes it as a feature.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::constants::{ID_COLUMN, THRESHOLD_COLUMN};

use super::{parse_cell, LoadError};

/// In-memory client feature table, row order as on disk
#[derive(Debug, Clone)]
pub struct ClientTable {
    columns: Vec<String>,
    ids: Vec<i64>,
    rows: Vec<Vec<f64>>,
    index: HashMap<i64, usize>,
    threshold: f64,
}

/// One client's row, borrowed from the table
#[derive(Debug, Clone, Copy)]
pub struct ClientRecord<'a> {
    pub id: i64,
    /// Position of this client in the table's index order. The attribution
    /// store is aligned on this position.
    pub position: usize,
    columns: &'a [String],
    values: &'a [f64],
}

impl ClientTable {
    /// Load the table from a CSV file.
    ///
    /// Extracts the scalar decision threshold from the first record and
    /// strips the threshold column from the in-memory table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new().from_reader(file);
        let headers = reader
            .headers()
            .map_err(|source| csv_err(path, source))?
            .clone();

        let id_col = find_column(path, &headers, ID_COLUMN)?;
        let threshold_col = find_column(path, &headers, THRESHOLD_COLUMN)?;

        // Feature columns: everything except the identifier and threshold
        let mut feature_cols: Vec<usize> = Vec::new();
        let mut columns: Vec<String> = Vec::new();
        for (i, name) in headers.iter().enumerate() {
            if i != id_col && i != threshold_col {
                feature_cols.push(i);
                columns.push(name.to_string());
            }
        }

        let mut ids = Vec::new();
        let mut rows = Vec::new();
        let mut index = HashMap::new();
        let mut threshold = None;

        for (row_no, result) in reader.records().enumerate() {
            let record = result.map_err(|source| csv_err(path, source))?;

            let raw_id = record.get(id_col).unwrap_or("");
            let id: i64 = raw_id.trim().parse().map_err(|_| LoadError::BadValue {
                path: path.to_path_buf(),
                row: row_no,
                column: ID_COLUMN.to_string(),
                value: raw_id.to_string(),
            })?;

            // The threshold is semantically a single global value; read it
            // once from the first row
            if threshold.is_none() {
                let raw = record.get(threshold_col).unwrap_or("");
                let value =
                    raw.trim()
                        .parse::<f64>()
                        .map_err(|_| LoadError::BadValue {
                            path: path.to_path_buf(),
                            row: row_no,
                            column: THRESHOLD_COLUMN.to_string(),
                            value: raw.to_string(),
                        })?;
                threshold = Some(value);
            }

            let mut values = Vec::with_capacity(feature_cols.len());
            for (&col, name) in feature_cols.iter().zip(&columns) {
                let raw = record.get(col).unwrap_or("");
                let value = parse_cell(raw).ok_or_else(|| LoadError::BadValue {
                    path: path.to_path_buf(),
                    row: row_no,
                    column: name.clone(),
                    value: raw.to_string(),
                })?;
                values.push(value);
            }

            index.insert(id, ids.len());
            ids.push(id);
            rows.push(values);
        }

        let threshold = threshold.ok_or_else(|| LoadError::Empty {
            path: path.to_path_buf(),
        })?;

        Ok(Self {
            columns,
            ids,
            rows,
            index,
            threshold,
        })
    }

    /// Decision threshold extracted from the first record
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Client identifiers in index order
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    /// Feature column names (threshold already stripped)
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Isolate a single client's row by identifier
    pub fn lookup(&self, id: i64) -> Option<ClientRecord<'_>> {
        let position = *self.index.get(&id)?;
        Some(ClientRecord {
            id,
            position,
            columns: &self.columns,
            values: &self.rows[position],
        })
    }
}

impl<'a> ClientRecord<'a> {
    /// Value of a named feature, if the column exists
    pub fn get(&self, column: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == column)?;
        self.values.get(i).copied()
    }

    /// All (column, value) pairs for this client
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.columns
            .iter()
            .map(|c| c.as_str())
            .zip(self.values.iter().copied())
    }
}

fn csv_err(path: &Path, source: csv::Error) -> LoadError {
    LoadError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

pub(super) fn find_column(
    path: &Path,
    headers: &csv::StringRecord,
    name: &str,
) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}
