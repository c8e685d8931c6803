//! Scatter Model Module
//! Maps city records onto the population scatter plot.

use crate::data::CityRecord;

/// Plot canvas dimensions, in plot units (same space as the CSV coordinates).
pub const PLOT_WIDTH: f64 = 700.0;
pub const PLOT_HEIGHT: f64 = 550.0;

/// Cities at or above this population get the large radius and a name label.
pub const LARGE_POPULATION: i64 = 1_000_000;

const RADIUS_SMALL: f32 = 4.0;
const RADIUS_LARGE: f32 = 8.0;

/// Vertical offset of a city label above its circle.
pub const LABEL_OFFSET: f64 = 10.0;

/// One rendered city: a circle, and for large cities a label above it.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMark {
    pub city: String,
    pub country: String,
    pub population: i64,
    /// Circle center, screen space (y grows downward).
    pub x: f64,
    pub y: f64,
    pub radius: f32,
    pub labeled: bool,
}

impl CityMark {
    fn new(record: &CityRecord) -> Self {
        let radius = if record.population < LARGE_POPULATION {
            RADIUS_SMALL
        } else {
            RADIUS_LARGE
        };
        Self {
            city: record.city.clone(),
            country: record.country.clone(),
            population: record.population,
            x: record.x,
            y: record.y,
            radius,
            labeled: record.population >= LARGE_POPULATION,
        }
    }

    /// The two tooltip lines, as (emphasized label, value) pairs.
    pub fn tooltip_lines(&self) -> [(String, String); 2] {
        [
            (
                "city, country:".to_string(),
                format!("{}, {}", self.city, self.country),
            ),
            ("population:".to_string(), self.population.to_string()),
        ]
    }
}

/// View model for the population scatter plot: the EU subset of the loaded
/// cities, one mark per city.
#[derive(Debug, Clone)]
pub struct ScatterModel {
    pub marks: Vec<CityMark>,
}

impl ScatterModel {
    pub fn build(cities: &[CityRecord]) -> Self {
        let marks = cities
            .iter()
            .filter(|c| c.eu)
            .map(CityMark::new)
            .collect();
        Self { marks }
    }

    /// Number of rendered (EU) cities.
    pub fn count(&self) -> usize {
        self.marks.len()
    }

    /// The count line shown above the plot.
    pub fn count_text(&self) -> String {
        format!("Number of cities: {}", self.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, population: i64, eu: bool, x: f64, y: f64) -> CityRecord {
        CityRecord {
            city: name.to_string(),
            country: "France".to_string(),
            population,
            x,
            y,
            eu,
        }
    }

    #[test]
    fn filters_to_eu_and_sizes_by_population() {
        let cities = [
            city("Paris", 2_000_000, true, 10.0, 10.0),
            city("Lyon", 500_000, true, 20.0, 20.0),
            city("London", 9_000_000, false, 30.0, 30.0),
        ];

        let model = ScatterModel::build(&cities);
        assert_eq!(model.count(), 2);
        assert_eq!(model.count_text(), "Number of cities: 2");

        let paris = &model.marks[0];
        assert_eq!(paris.city, "Paris");
        assert_eq!(paris.radius, 8.0);
        assert!(paris.labeled);

        let lyon = &model.marks[1];
        assert_eq!(lyon.radius, 4.0);
        assert!(!lyon.labeled);
    }

    #[test]
    fn exactly_one_million_takes_the_large_branch() {
        let cities = [
            city("Boundary", LARGE_POPULATION, true, 0.0, 0.0),
            city("Below", LARGE_POPULATION - 1, true, 0.0, 0.0),
        ];

        let model = ScatterModel::build(&cities);
        assert_eq!(model.marks[0].radius, 8.0);
        assert!(model.marks[0].labeled);
        assert_eq!(model.marks[1].radius, 4.0);
        assert!(!model.marks[1].labeled);
    }

    #[test]
    fn tooltip_lines_match_the_page_format() {
        let model = ScatterModel::build(&[city("Paris", 2_000_000, true, 10.0, 10.0)]);
        let lines = model.marks[0].tooltip_lines();
        assert_eq!(lines[0].0, "city, country:");
        assert_eq!(lines[0].1, "Paris, France");
        assert_eq!(lines[1].0, "population:");
        assert_eq!(lines[1].1, "2000000");
    }
}
