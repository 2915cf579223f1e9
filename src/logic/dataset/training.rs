//! Labeled training table
//!
//! Historical applicants with a binary outcome label. Partitioned at load
//! time into the two outcome subsets; the label column is dropped from both
//! so it never shows up in the feature selectors.

use std::fs::File;
use std::path::Path;

use crate::constants::TARGET_COLUMN;

use super::table::find_column;
use super::{parse_cell, LoadError};

/// Historical outcome of a training-set applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Label 0 - repaid without incident
    NoDefault,
    /// Label 1 - defaulted on the loan
    Defaulted,
}

/// Training table split by outcome label, label column dropped
#[derive(Debug, Clone)]
pub struct TrainingSplit {
    columns: Vec<String>,
    no_default: Vec<Vec<f64>>,
    defaulted: Vec<Vec<f64>>,
}

impl TrainingSplit {
    /// Load and partition the training table.
    ///
    /// Rows whose label is neither 0 nor 1 belong to no subset and are
    /// skipped, matching a strict equality partition.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new().from_reader(file);
        let headers = reader
            .headers()
            .map_err(|source| LoadError::Csv {
                path: path.to_path_buf(),
                source,
            })?
            .clone();

        let target_col = find_column(path, &headers, TARGET_COLUMN)?;

        let mut feature_cols: Vec<usize> = Vec::new();
        let mut columns: Vec<String> = Vec::new();
        for (i, name) in headers.iter().enumerate() {
            if i != target_col {
                feature_cols.push(i);
                columns.push(name.to_string());
            }
        }

        let mut no_default = Vec::new();
        let mut defaulted = Vec::new();

        for (row_no, result) in reader.records().enumerate() {
            let record = result.map_err(|source| LoadError::Csv {
                path: path.to_path_buf(),
                source,
            })?;

            let raw_label = record.get(target_col).unwrap_or("");
            let label = raw_label
                .trim()
                .parse::<f64>()
                .map_err(|_| LoadError::BadValue {
                    path: path.to_path_buf(),
                    row: row_no,
                    column: TARGET_COLUMN.to_string(),
                    value: raw_label.to_string(),
                })?;

            let subset = if label == 0.0 {
                &mut no_default
            } else if label == 1.0 {
                &mut defaulted
            } else {
                continue;
            };

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
            subset.push(values);
        }

        Ok(Self {
            columns,
            no_default,
            defaulted,
        })
    }

    /// Feature column names (label already stripped)
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Index of a named feature column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of rows in one outcome subset
    pub fn subset_len(&self, outcome: Outcome) -> usize {
        self.subset(outcome).len()
    }

    /// Values of one feature column within one outcome subset
    pub fn column_values(
        &self,
        outcome: Outcome,
        column: usize,
    ) -> impl Iterator<Item = f64> + '_ {
        self.subset(outcome)
            .iter()
            .filter_map(move |row| row.get(column).copied())
    }

    fn subset(&self, outcome: Outcome) -> &[Vec<f64>] {
        match outcome {
            Outcome::NoDefault => &self.no_default,
            Outcome::Defaulted => &self.defaulted,
        }
    }
}
