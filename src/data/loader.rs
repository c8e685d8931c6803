//! CSV Loader Module
//! Loads the city and building datasets with Polars schema inference.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

use crate::data::{BuildingRecord, CityRecord};

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column `{0}`")]
    MissingColumn(String),
}

/// Load a CSV file into a DataFrame.
///
/// Field types are inferred from the data: numeric-looking fields become
/// numbers, `true`/`false` become booleans, everything else stays a string.
pub fn load_dataframe(path: &Path) -> Result<DataFrame, DataError> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;
    Ok(df)
}

/// Load and extract the city dataset.
pub fn load_cities(path: &Path) -> Result<Vec<CityRecord>, DataError> {
    let df = load_dataframe(path)?;
    let cities = CityRecord::from_dataframe(&df)?;
    log::info!("loaded {} cities from {}", cities.len(), path.display());
    Ok(cities)
}

/// Load and extract the building dataset.
pub fn load_buildings(path: &Path) -> Result<Vec<BuildingRecord>, DataError> {
    let df = load_dataframe(path)?;
    let buildings = BuildingRecord::from_dataframe(&df)?;
    log::info!(
        "loaded {} buildings from {}",
        buildings.len(),
        path.display()
    );
    Ok(buildings)
}

/// Look up a required column, mapping absence to the typed contract error.
pub(crate) fn required_column<'a>(
    df: &'a DataFrame,
    name: &str,
) -> Result<&'a Column, DataError> {
    df.column(name)
        .map_err(|_| DataError::MissingColumn(name.to_string()))
}
