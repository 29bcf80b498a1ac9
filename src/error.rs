//! Error types for dataset extraction.

use polars::prelude::PolarsError;
use std::io;
use thiserror::Error;

/// Failure while loading a dataset file.
///
/// Both variants are transparent: the underlying error reaches the caller
/// exactly as the file system or the CSV reader produced it.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The file could not be opened (missing, permissions, not a file).
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The file opened but its contents are not a consistent CSV table.
    #[error(transparent)]
    Csv(#[from] PolarsError),
}

impl ExtractError {
    /// True when the dataset file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExtractError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
