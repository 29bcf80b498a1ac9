//! Zillow Extract - loads the ZHVI and ZORI exports and reports their shapes.

use anyhow::Result;
use log::info;
use zillow_extract::data::DATA_PATHS;
use zillow_extract::{extract_all, Dataset, TableShape};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Data directory: {}", DATA_PATHS.base_dir().display());
    let (zhvi, zori) = extract_all()?;

    for (dataset, df) in Dataset::ALL.into_iter().zip([&zhvi, &zori]) {
        println!("{}: {}", dataset.description(), TableShape::of(df));
    }

    Ok(())
}
