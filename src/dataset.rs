//! Loader for the preprocessed test table.
//!
//! The table is a comma-delimited export with a header line. The leading
//! unnamed index column and the identifier columns listed in
//! [`crate::constants::DROPPED_COLUMNS`] are stripped during load; every
//! surviving cell must parse as `f32`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::constants::DROPPED_COLUMNS;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("table has no header line")]
    Empty,
    #[error("identifier column {0:?} not found in header")]
    MissingColumn(&'static str),
    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column:?}: {message}")]
    Parse {
        line: usize,
        column: String,
        message: String,
    },
}

/// Immutable table of numeric feature rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TestDataset {
    /// Names of the surviving columns, in file order.
    pub columns: Vec<String>,
    /// One `f32` vector per data line, each `columns.len()` long.
    pub rows: Vec<Vec<f32>>,
}

impl TestDataset {
    /// Load the table, dropping identifier columns.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        let mut lines = BufReader::new(file).lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(DatasetError::Empty),
        };
        let header_cells: Vec<&str> = header.split(',').map(str::trim).collect();

        for &dropped in DROPPED_COLUMNS {
            if !header_cells.contains(&dropped) {
                return Err(DatasetError::MissingColumn(dropped));
            }
        }

        // Keep everything except the unnamed index column and the identifiers.
        let kept: Vec<usize> = header_cells
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty() && !DROPPED_COLUMNS.contains(name))
            .map(|(idx, _)| idx)
            .collect();
        let columns: Vec<String> = kept.iter().map(|&i| header_cells[i].to_string()).collect();

        let mut rows = Vec::new();
        for (idx, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let line_no = idx + 2; // 1-based, after the header
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            if cells.len() != header_cells.len() {
                return Err(DatasetError::RaggedRow {
                    line: line_no,
                    expected: header_cells.len(),
                    found: cells.len(),
                });
            }
            let mut row = Vec::with_capacity(kept.len());
            for (&cell_idx, column) in kept.iter().zip(&columns) {
                let value: f32 =
                    cells[cell_idx]
                        .parse()
                        .map_err(|err: std::num::ParseFloatError| DatasetError::Parse {
                            line: line_no,
                            column: column.clone(),
                            message: err.to_string(),
                        })?;
                row.push(value);
            }
            rows.push(row);
        }

        debug!(
            path = %path.display(),
            rows = rows.len(),
            columns = columns.len(),
            "Test table loaded"
        );
        Ok(Self { columns, rows })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_features(&self) -> usize {
        self.columns.len()
    }

    /// Borrow the first `n` rows (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> &[Vec<f32>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
,Product_ID,Gender,Age,Purchase
0,42,0,1,8370.0
1,17,1,0,15200.5
2,99,1,1,1422.25
";

    fn write_table(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preprocessed_data.csv");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn drops_index_and_identifier_columns() {
        let (_dir, path) = write_table(TABLE);
        let table = TestDataset::load(&path).unwrap();
        assert_eq!(table.columns, vec!["Gender", "Age", "Purchase"]);
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.rows[0], vec![0.0, 1.0, 8370.0]);
        assert_eq!(table.rows[1], vec![1.0, 0.0, 15200.5]);
    }

    #[test]
    fn load_is_idempotent() {
        let (_dir, path) = write_table(TABLE);
        let first = TestDataset::load(&path).unwrap();
        let second = TestDataset::load(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn head_clamps_to_available_rows() {
        let (_dir, path) = write_table(TABLE);
        let table = TestDataset::load(&path).unwrap();
        assert_eq!(table.head(2).len(), 2);
        assert_eq!(table.head(10).len(), 3);
    }

    #[test]
    fn missing_identifier_column_is_an_error() {
        let (_dir, path) = write_table(",Gender,Age\n0,0,1\n");
        assert!(matches!(
            TestDataset::load(&path),
            Err(DatasetError::MissingColumn("Product_ID"))
        ));
    }

    #[test]
    fn ragged_row_reports_line_number() {
        let (_dir, path) = write_table(",Product_ID,Gender\n0,42,0\n1,17\n");
        match TestDataset::load(&path) {
            Err(DatasetError::RaggedRow { line, expected, found }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected ragged row error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_cell_reports_column() {
        let (_dir, path) = write_table(",Product_ID,Gender\n0,42,zero\n");
        match TestDataset::load(&path) {
            Err(DatasetError::Parse { line, column, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(column, "Gender");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_an_error() {
        let (_dir, path) = write_table("");
        assert!(matches!(TestDataset::load(&path), Err(DatasetError::Empty)));
    }
}
