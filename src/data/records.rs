//! Record Types Module
//! Typed rows extracted from the loaded DataFrames.

use polars::prelude::*;

use crate::data::loader::required_column;
use crate::data::DataError;

/// A city row from `cities.csv`.
///
/// `x`/`y` are plot coordinates supplied by the file itself (screen space,
/// y grows downward); nothing is projected at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    pub city: String,
    pub country: String,
    pub population: i64,
    pub x: f64,
    pub y: f64,
    pub eu: bool,
}

/// A building row from `buildings.csv`.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingRecord {
    pub building: String,
    pub city: String,
    pub country: String,
    pub height_ft: f64,
    pub height_m: f64,
    pub floors: i64,
    pub completed: i64,
}

impl CityRecord {
    /// Extract typed city rows. Rows with a null in any required field are
    /// skipped.
    pub fn from_dataframe(df: &DataFrame) -> Result<Vec<CityRecord>, DataError> {
        let city = required_column(df, "city")?.cast(&DataType::String)?;
        let city = city.str()?;
        let country = required_column(df, "country")?.cast(&DataType::String)?;
        let country = country.str()?;
        let population = required_column(df, "population")?.cast(&DataType::Int64)?;
        let population = population.i64()?;
        let x = required_column(df, "x")?.cast(&DataType::Float64)?;
        let x = x.f64()?;
        let y = required_column(df, "y")?.cast(&DataType::Float64)?;
        let y = y.f64()?;
        let eu = required_column(df, "eu")?.cast(&DataType::Boolean)?;
        let eu = eu.bool()?;

        let mut records = Vec::with_capacity(df.height());
        let mut skipped = 0usize;

        for i in 0..df.height() {
            let (Some(city), Some(country), Some(population), Some(x), Some(y), Some(eu)) = (
                city.get(i),
                country.get(i),
                population.get(i),
                x.get(i),
                y.get(i),
                eu.get(i),
            ) else {
                skipped += 1;
                continue;
            };

            records.push(CityRecord {
                city: city.to_string(),
                country: country.to_string(),
                population,
                x,
                y,
                eu,
            });
        }

        if skipped > 0 {
            log::warn!("skipped {} incomplete city rows", skipped);
        }

        Ok(records)
    }
}

impl BuildingRecord {
    /// Extract typed building rows. Rows with a null in any required field
    /// are skipped.
    pub fn from_dataframe(df: &DataFrame) -> Result<Vec<BuildingRecord>, DataError> {
        let building = required_column(df, "building")?.cast(&DataType::String)?;
        let building = building.str()?;
        let city = required_column(df, "city")?.cast(&DataType::String)?;
        let city = city.str()?;
        let country = required_column(df, "country")?.cast(&DataType::String)?;
        let country = country.str()?;
        let height_ft = required_column(df, "height_ft")?.cast(&DataType::Float64)?;
        let height_ft = height_ft.f64()?;
        let height_m = required_column(df, "height_m")?.cast(&DataType::Float64)?;
        let height_m = height_m.f64()?;
        let floors = required_column(df, "floors")?.cast(&DataType::Int64)?;
        let floors = floors.i64()?;
        let completed = required_column(df, "completed")?.cast(&DataType::Int64)?;
        let completed = completed.i64()?;

        let mut records = Vec::with_capacity(df.height());
        let mut skipped = 0usize;

        for i in 0..df.height() {
            let (
                Some(building),
                Some(city),
                Some(country),
                Some(height_ft),
                Some(height_m),
                Some(floors),
                Some(completed),
            ) = (
                building.get(i),
                city.get(i),
                country.get(i),
                height_ft.get(i),
                height_m.get(i),
                floors.get(i),
                completed.get(i),
            )
            else {
                skipped += 1;
                continue;
            };

            records.push(BuildingRecord {
                building: building.to_string(),
                city: city.to_string(),
                country: country.to_string(),
                height_ft,
                height_m,
                floors,
                completed,
            });
        }

        if skipped > 0 {
            log::warn!("skipped {} incomplete building rows", skipped);
        }

        Ok(records)
    }
}
