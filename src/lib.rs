//! Zillow Extract - loads Zillow Research housing exports into DataFrames.
//!
//! Two fixed datasets are read from the directory named by `DATA_DIR`:
//! ZHVI (typical home values) and ZORI (typical rents). Each load re-reads
//! its file and returns a fresh `DataFrame`.

pub mod data;
pub mod error;

pub use data::{
    extract_all, extract_dataset, extract_zhvi, extract_zori, load_csv, DataPaths, Dataset,
    TableShape,
};
pub use error::{ExtractError, Result};
