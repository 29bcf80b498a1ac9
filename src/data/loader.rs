//! CSV Data Loader Module
//! Reads the dataset exports into Polars DataFrames.

use log::info;
use polars::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use super::sources::{DataPaths, Dataset, DATA_PATHS};
use crate::error::Result;

/// Row and column count of a loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
    pub rows: usize,
    pub columns: usize,
}

impl TableShape {
    pub fn of(df: &DataFrame) -> Self {
        Self {
            rows: df.height(),
            columns: df.width(),
        }
    }
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows, {} columns", self.rows, self.columns)
    }
}

/// Read a comma-separated file with a header row fully into memory.
///
/// Column types are inferred from every row. Empty lines outside quoted
/// fields are skipped and do not count as rows.
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    let mut bytes = Vec::new();
    File::open(path)?.read_to_end(&mut bytes)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(Cursor::new(strip_blank_lines(&bytes)))
        .finish()?;
    Ok(df)
}

/// Drop `\n` / `\r\n` lines that sit outside a quoted field.
fn strip_blank_lines(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut in_quotes = false;

    for line in bytes.split_inclusive(|&b| b == b'\n') {
        if !in_quotes && matches!(line, b"\n" | b"\r\n") {
            continue;
        }
        if line.iter().filter(|&&b| b == b'"').count() % 2 == 1 {
            in_quotes = !in_quotes;
        }
        out.extend_from_slice(line);
    }
    out
}

impl DataPaths {
    /// Load one dataset from under this base directory.
    pub fn extract(&self, dataset: Dataset) -> Result<DataFrame> {
        let path = self.path(dataset);
        info!("Extracting {} data from {}", dataset, path.display());

        let df = load_csv(path)?;

        info!("Loaded {}: {}", dataset, TableShape::of(&df));
        Ok(df)
    }

    /// Load ZHVI then ZORI. Stops at the first failure.
    pub fn extract_all(&self) -> Result<(DataFrame, DataFrame)> {
        let zhvi = self.extract(Dataset::Zhvi)?;
        let zori = self.extract(Dataset::Zori)?;
        Ok((zhvi, zori))
    }
}

/// Load a dataset from the directory configured by `DATA_DIR`.
pub fn extract_dataset(dataset: Dataset) -> Result<DataFrame> {
    DATA_PATHS.extract(dataset)
}

/// Load the Zillow Home Value Index export.
pub fn extract_zhvi() -> Result<DataFrame> {
    extract_dataset(Dataset::Zhvi)
}

/// Load the Zillow Observed Rent Index export.
pub fn extract_zori() -> Result<DataFrame> {
    extract_dataset(Dataset::Zori)
}

/// Load both exports as `(zhvi, zori)`.
pub fn extract_all() -> Result<(DataFrame, DataFrame)> {
    DATA_PATHS.extract_all()
}
