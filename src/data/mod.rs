//! Data module - dataset locations and CSV extraction

mod loader;
mod sources;

pub use loader::{
    extract_all, extract_dataset, extract_zhvi, extract_zori, load_csv, TableShape,
};
pub use sources::{DataPaths, Dataset, DATA_DIR_ENV, DATA_PATHS, DEFAULT_DATA_DIR};
