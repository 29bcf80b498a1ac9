//! Dataset Sources Module
//! Fixed Zillow Research datasets and where they live on disk.
//!
//! Data sources: https://www.zillow.com/research/data/

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable naming the directory that holds the CSV exports.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Base directory used when `DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "/opt/airflow/data";

/// Zillow dataset available for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Zillow Home Value Index: typical home values
    Zhvi,
    /// Zillow Observed Rent Index: typical rental prices
    Zori,
}

impl Dataset {
    /// Every dataset, in extraction order.
    pub const ALL: [Dataset; 2] = [Dataset::Zhvi, Dataset::Zori];

    pub fn name(self) -> &'static str {
        match self {
            Dataset::Zhvi => "ZHVI",
            Dataset::Zori => "ZORI",
        }
    }

    /// File name of the export inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Zhvi => "Metro_zhvi_uc_sfrcondo_tier_0.33_0.67_sm_sa_month.csv",
            Dataset::Zori => "Metro_zori_uc_sfrcondomfr_sm_month.csv",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Dataset::Zhvi => "Zillow Home Value Index (typical home values)",
            Dataset::Zori => "Zillow Observed Rent Index (typical rental prices)",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved locations of the dataset files under one base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    base_dir: PathBuf,
    zhvi: PathBuf,
    zori: PathBuf,
}

impl DataPaths {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            zhvi: base_dir.join(Dataset::Zhvi.file_name()),
            zori: base_dir.join(Dataset::Zori.file_name()),
            base_dir,
        }
    }

    /// Resolve from `DATA_DIR`, falling back to [`DEFAULT_DATA_DIR`].
    pub fn from_env() -> Self {
        let base_dir = env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self::new(base_dir)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path(&self, dataset: Dataset) -> &Path {
        match dataset {
            Dataset::Zhvi => &self.zhvi,
            Dataset::Zori => &self.zori,
        }
    }
}

/// Paths resolved from the environment on first use; fixed afterwards.
pub static DATA_PATHS: LazyLock<DataPaths> = LazyLock::new(DataPaths::from_env);
