//! Data module - CSV loading and record extraction

mod loader;
mod records;

pub use loader::{load_buildings, load_cities, load_dataframe, DataError};
pub use records::{BuildingRecord, CityRecord};
